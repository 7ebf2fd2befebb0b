//! Savings goal reversal.
//!
//! Works backwards from a savings target and a timeframe to the number of
//! working days needed at the current per-session income.

use rust_decimal::Decimal;

use crate::models::{DaysRequirement, GoalInputs, GoalResult, UnattainableReason};

use super::common::{MONTHS_PER_YEAR, WEEKS_PER_MONTH};

/// Derives the work required to reach a savings goal.
///
/// - required monthly savings = goal amount / goal months
/// - required monthly income = required monthly savings + living cost
/// - daily income = price per session x sessions per day
/// - required days per week = required monthly income / (daily income x 4.33)
/// - required days per month = ceil(required days per week x 4.33)
/// - projected yearly income = required monthly income x 12
///
/// A zero daily income or a zero month timeframe has no finite answer and is
/// reported as [`DaysRequirement::Unattainable`] rather than as an error, as
/// is a day count too large to represent. Amounts saturate at
/// [`Decimal::MAX`].
///
/// # Examples
///
/// ```
/// use earnings_estimator::calculation::compute_goal_projection;
/// use earnings_estimator::models::GoalInputs;
/// use rust_decimal::Decimal;
///
/// let result = compute_goal_projection(&GoalInputs {
///     goal_amount: Decimal::from(1_000_000),
///     goal_months: 10,
///     price_per_session: Decimal::from(10000),
///     sessions_per_day: Decimal::from(3),
///     living_cost: Decimal::from(150000),
/// });
///
/// assert_eq!(result.required_monthly_income, Some(Decimal::from(250000)));
/// assert_eq!(result.required_days_per_month(), Some(Decimal::from(9)));
/// ```
pub fn compute_goal_projection(inputs: &GoalInputs) -> GoalResult {
    let daily_income = inputs
        .price_per_session
        .saturating_mul(inputs.sessions_per_day)
        .normalize();

    if inputs.goal_months == 0 {
        return GoalResult {
            required_monthly_savings: None,
            required_monthly_income: None,
            daily_income,
            required_days: DaysRequirement::Unattainable {
                reason: UnattainableReason::NoTimeframe,
            },
            projected_yearly_income: None,
        };
    }

    let required_monthly_savings = inputs.goal_amount / Decimal::from(inputs.goal_months);
    let required_monthly_income = required_monthly_savings.saturating_add(inputs.living_cost);

    GoalResult {
        required_monthly_savings: Some(required_monthly_savings.normalize()),
        required_monthly_income: Some(required_monthly_income.normalize()),
        daily_income,
        required_days: required_days(required_monthly_income, daily_income),
        projected_yearly_income: Some(
            required_monthly_income
                .saturating_mul(MONTHS_PER_YEAR)
                .normalize(),
        ),
    }
}

/// Days per week and per month needed to earn `monthly_income`.
///
/// Days per month is taken as `ceil(monthly_income / daily_income)`, which
/// equals `ceil(per_week x 4.33)` without the rounding error of the
/// intermediate quotient.
fn required_days(monthly_income: Decimal, daily_income: Decimal) -> DaysRequirement {
    if daily_income.is_zero() {
        return DaysRequirement::Unattainable {
            reason: UnattainableReason::NoDailyIncome,
        };
    }

    let per_week = monthly_income.checked_div(daily_income.saturating_mul(WEEKS_PER_MONTH));
    let per_month = monthly_income.checked_div(daily_income);

    match (per_week, per_month) {
        (Some(per_week), Some(per_month)) => DaysRequirement::Attainable {
            per_week: per_week.normalize(),
            per_month: per_month.ceil().normalize(),
        },
        _ => DaysRequirement::Unattainable {
            reason: UnattainableReason::OutOfRange,
        },
    }
}

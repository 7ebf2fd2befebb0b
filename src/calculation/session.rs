//! Per-session earnings projection.
//!
//! Income is a fixed price per session multiplied by the number of
//! sessions worked, scaled from days to weeks, months and years.

use crate::models::{ProjectionResult, SessionInputs};

use super::common::{project_from_daily, round_whole};

/// Projects earnings from a price per session.
///
/// - daily = price per session x sessions per day
/// - weekly = daily x days per week
/// - monthly = weekly x [`WEEKS_PER_MONTH`](super::WEEKS_PER_MONTH)
/// - monthly work days = round(days per week x 4.33)
/// - monthly sessions = round(sessions per day x monthly work days)
///
/// Savings are monthly income minus living cost and are never clamped: a
/// negative value signals a shortfall.
///
/// # Examples
///
/// ```
/// use earnings_estimator::calculation::compute_session_projection;
/// use earnings_estimator::models::SessionInputs;
/// use rust_decimal::Decimal;
///
/// let result = compute_session_projection(&SessionInputs {
///     price_per_session: Decimal::from(10000),
///     sessions_per_day: Decimal::from(3),
///     days_per_week: Decimal::from(5),
///     living_cost: Decimal::from(150000),
/// });
///
/// assert_eq!(result.daily_earnings, Decimal::from(30000));
/// assert_eq!(result.monthly_total, Decimal::from(649500));
/// assert_eq!(result.monthly_total_sessions, Some(Decimal::from(66)));
/// ```
pub fn compute_session_projection(inputs: &SessionInputs) -> ProjectionResult {
    let daily_earnings = inputs
        .price_per_session
        .saturating_mul(inputs.sessions_per_day);
    let mut result = project_from_daily(daily_earnings, inputs.days_per_week, inputs.living_cost);

    // Sessions follow the rounded day count, not the exact one.
    result.monthly_total_sessions = Some(round_whole(
        inputs
            .sessions_per_day
            .saturating_mul(result.monthly_work_days),
    ));

    result
}

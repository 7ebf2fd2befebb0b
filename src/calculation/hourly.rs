//! Hourly earnings projection.
//!
//! Active work is paid at the full hourly rate. Waiting (standby) time is
//! paid at half the rate; the multiplier is fixed and not an input.

use rust_decimal::Decimal;

use crate::models::{HourlyInputs, HourlyPay, ProjectionResult};

use super::common::project_from_daily;

/// Returns the multiplier applied to the hourly rate for waiting time.
///
/// The multiplier is 0.5 (half rate).
pub fn waiting_rate_multiplier() -> Decimal {
    Decimal::new(5, 1)
}

/// Projects earnings from an hourly rate.
///
/// - work pay = hourly rate x work hours
/// - waiting pay = hourly rate x 0.5 x waiting hours
/// - daily = work pay + waiting pay
///
/// Everything from weekly earnings onwards matches the session mode. No
/// monthly session count is produced.
///
/// # Examples
///
/// ```
/// use earnings_estimator::calculation::compute_hourly_projection;
/// use earnings_estimator::models::HourlyInputs;
/// use rust_decimal::Decimal;
///
/// let result = compute_hourly_projection(&HourlyInputs {
///     hourly_rate: Decimal::from(2000),
///     work_hours: Decimal::from(5),
///     waiting_hours: Decimal::from(3),
///     days_per_week: Decimal::from(5),
///     living_cost: Decimal::from(150000),
/// });
///
/// assert_eq!(result.daily_earnings, Decimal::from(13000));
/// assert!(result.monthly_total_sessions.is_none());
/// ```
pub fn compute_hourly_projection(inputs: &HourlyInputs) -> ProjectionResult {
    let work_pay = inputs.hourly_rate.saturating_mul(inputs.work_hours);
    let waiting_pay = inputs
        .hourly_rate
        .saturating_mul(waiting_rate_multiplier())
        .saturating_mul(inputs.waiting_hours);
    let daily_earnings = work_pay.saturating_add(waiting_pay);

    let mut result = project_from_daily(daily_earnings, inputs.days_per_week, inputs.living_cost);
    result.hourly_pay = Some(HourlyPay {
        work_pay: work_pay.normalize(),
        waiting_pay: waiting_pay.normalize(),
    });

    result
}

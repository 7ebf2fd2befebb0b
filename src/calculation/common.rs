//! Shared constants and the weekly-to-yearly derivation used by every
//! earnings mode.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::ProjectionResult;

/// Average weeks per month used for every weekly/monthly conversion.
///
/// Stored and exported figures depend on this exact value.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Months in a year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Rounds to a whole number, halves away from zero.
pub(crate) fn round_whole(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Builds a projection from daily earnings.
///
/// Everything after the daily figure is identical between session and
/// hourly modes, so both calculators finish here. The mode-specific
/// fields (`monthly_total_sessions`, `hourly_pay`) are left unset.
///
/// Arithmetic saturates at [`Decimal::MAX`] / [`Decimal::MIN`] instead of
/// overflowing.
pub(crate) fn project_from_daily(
    daily_earnings: Decimal,
    days_per_week: Decimal,
    living_cost: Decimal,
) -> ProjectionResult {
    let weekly_earnings = daily_earnings.saturating_mul(days_per_week);
    let monthly_base = weekly_earnings.saturating_mul(WEEKS_PER_MONTH);
    let monthly_total = monthly_base;
    let savings_amount = monthly_total.saturating_sub(living_cost);

    ProjectionResult {
        daily_earnings: daily_earnings.normalize(),
        weekly_earnings: weekly_earnings.normalize(),
        monthly_base: monthly_base.normalize(),
        monthly_total: monthly_total.normalize(),
        yearly_earnings: monthly_total.saturating_mul(MONTHS_PER_YEAR).normalize(),
        savings_amount: savings_amount.normalize(),
        yearly_savings: savings_amount.saturating_mul(MONTHS_PER_YEAR).normalize(),
        monthly_work_days: round_whole(days_per_week.saturating_mul(WEEKS_PER_MONTH)),
        monthly_total_sessions: None,
        hourly_pay: None,
    }
}

//! Lenient numeric parsing for raw form fields.
//!
//! Nothing here fails: text that is not a number becomes zero, and negative
//! numbers are clamped to zero the same way the input form resets them.
//! Values above [`MAX_AMOUNT`] (money) or [`MAX_COUNT`] (sessions and hours)
//! are clamped to that ceiling, which keeps every derived yearly figure well
//! inside the range of [`Decimal`].

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Upper bound for the days-per-week fields.
pub const MAX_DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Upper bound for monetary fields (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Upper bound for per-day sessions and hours (10^6).
pub const MAX_COUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

const CURRENCY_PREFIXES: [char; 3] = ['¥', '￥', '$'];

/// Parses a raw field into a non-negative amount of money.
///
/// Leading currency symbols and thousands separators are ignored.
/// Scientific notation is accepted. Anything else that does not parse,
/// including an empty field, is zero.
///
/// # Examples
///
/// ```
/// use earnings_estimator::form::{MAX_AMOUNT, parse_amount};
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("¥10,000"), Decimal::from(10000));
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// assert_eq!(parse_amount("-5"), Decimal::ZERO);
/// assert_eq!(parse_amount("1e27"), MAX_AMOUNT);
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    clamp_amount(parse_number(raw))
}

/// Parses a sessions-per-day or hours-per-day field, capped at [`MAX_COUNT`].
pub fn parse_count(raw: &str) -> Decimal {
    clamp_count(parse_number(raw))
}

/// Parses a days-per-week field, capped at 7.
pub fn parse_days(raw: &str) -> Decimal {
    clamp_days(parse_number(raw))
}

/// Parses a whole number of months. Fractions are truncated.
pub fn parse_months(raw: &str) -> u32 {
    parse_number(raw)
        .max(Decimal::ZERO)
        .trunc()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Clamps a monetary value into `0..=MAX_AMOUNT`.
pub fn clamp_amount(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, MAX_AMOUNT).normalize()
}

/// Clamps a per-day count into `0..=MAX_COUNT`.
pub fn clamp_count(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, MAX_COUNT).normalize()
}

/// Clamps a days-per-week value into `0..=7`.
pub fn clamp_days(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, MAX_DAYS_PER_WEEK).normalize()
}

fn parse_number(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .trim_start_matches(CURRENCY_PREFIXES)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .unwrap_or(Decimal::ZERO)
}

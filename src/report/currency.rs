//! Currency and number formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Formats amounts as whole currency units with thousands grouping.
///
/// # Example
///
/// ```
/// use earnings_estimator::report::CurrencyFormatter;
/// use rust_decimal::Decimal;
///
/// let formatter = CurrencyFormatter::new("¥");
/// assert_eq!(formatter.format(Decimal::from(649500)), "¥649,500");
/// assert_eq!(formatter.format(Decimal::from(-499500)), "¥-499,500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("¥")
    }
}

impl CurrencyFormatter {
    /// Creates a formatter that prefixes amounts with `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// The currency symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Rounds to the nearest whole unit and formats it.
    ///
    /// Halves round toward positive infinity, so -0.5 becomes 0 and 2.5
    /// becomes 3. The sign follows the symbol.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.saturating_add(Decimal::new(5, 1)).floor();
        format!("{}{}", self.symbol, format_number(rounded))
    }

    /// Formats an amount without rounding away its fractional part.
    ///
    /// Used to echo entered values back exactly.
    pub fn format_exact(&self, amount: Decimal) -> String {
        format!("{}{}", self.symbol, format_number(amount))
    }
}

/// Groups the integer part in thousands and keeps up to three decimal
/// places.
///
/// # Example
///
/// ```
/// use earnings_estimator::report::format_number;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_number(Decimal::from(1234567)), "1,234,567");
/// assert_eq!(format_number(Decimal::from_str("2.5").unwrap()), "2.5");
/// ```
pub fn format_number(value: Decimal) -> String {
    let value = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = value < Decimal::ZERO;
    let text = value.abs().to_string();

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_groups_thousands() {
        let formatter = CurrencyFormatter::default();
        assert_eq!(formatter.format(dec("7794000")), "¥7,794,000");
        assert_eq!(formatter.format(dec("999")), "¥999");
        assert_eq!(formatter.format(dec("1000")), "¥1,000");
        assert_eq!(formatter.format(dec("0")), "¥0");
    }

    #[test]
    fn test_format_rounds_to_whole_units() {
        let formatter = CurrencyFormatter::default();
        assert_eq!(formatter.format(dec("1234.49")), "¥1,234");
        assert_eq!(formatter.format(dec("1234.5")), "¥1,235");
        assert_eq!(formatter.format(dec("281450.00")), "¥281,450");
    }

    #[test]
    fn test_format_negative_halves_round_up() {
        let formatter = CurrencyFormatter::default();
        assert_eq!(formatter.format(dec("-0.5")), "¥0");
        assert_eq!(formatter.format(dec("-2.5")), "¥-2");
        assert_eq!(formatter.format(dec("-56700")), "¥-56,700");
    }

    #[test]
    fn test_format_extreme_amounts() {
        let formatter = CurrencyFormatter::default();
        assert!(formatter.format(Decimal::MAX).starts_with("¥79,228,162,514"));
        assert!(formatter.format(Decimal::MIN).starts_with("¥-79,228,162,514"));
    }

    #[test]
    fn test_format_exact_keeps_fraction() {
        let formatter = CurrencyFormatter::new("$");
        assert_eq!(formatter.format_exact(dec("1234.5")), "$1,234.5");
        assert_eq!(formatter.format_exact(dec("10000")), "$10,000");
    }

    #[test]
    fn test_format_number_limits_fraction_digits() {
        assert_eq!(format_number(dec("1.23456")), "1.235");
        assert_eq!(format_number(dec("-1234.5")), "-1,234.5");
        assert_eq!(format_number(dec("100")), "100");
    }
}

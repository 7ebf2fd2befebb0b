//! Calculation mode selection.

use serde::{Deserialize, Serialize};

/// Which formula branch a calculation runs.
///
/// Exactly one mode is active per calculation. The mode is always passed
/// explicitly; nothing in the crate remembers a "current" mode.
///
/// # Example
///
/// ```
/// use earnings_estimator::models::CalculationMode;
///
/// let mode: CalculationMode = serde_json::from_str("\"hourly\"").unwrap();
/// assert_eq!(mode, CalculationMode::Hourly);
/// assert_eq!(mode.label(), "Hourly rate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Earnings from a fixed price per session.
    #[default]
    Session,
    /// Earnings from an hourly rate with half-paid waiting time.
    Hourly,
    /// Work required to reach a savings goal.
    Goal,
}

impl CalculationMode {
    /// Human-readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMode::Session => "Per session",
            CalculationMode::Hourly => "Hourly rate",
            CalculationMode::Goal => "Savings goal",
        }
    }
}

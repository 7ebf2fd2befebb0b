//! Projection result models.
//!
//! This module contains the [`ProjectionResult`] produced by the session and
//! hourly calculators, the [`GoalResult`] produced by goal reversal, and the
//! [`CalculationOutcome`] that wraps whichever of the two a calculation
//! produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How daily earnings split between active work and waiting time.
///
/// Only present for hourly projections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPay {
    /// Pay for active work hours at the full rate.
    pub work_pay: Decimal,
    /// Pay for waiting hours at half the rate.
    pub waiting_pay: Decimal,
}

/// Earnings projection for the session and hourly modes.
///
/// Every field is derived from the inputs; nothing is ever set
/// independently of a calculation.
///
/// # Example
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
/// assert!(!result.has_shortfall());
/// assert_eq!(result.monthly_total, result.monthly_base);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Earnings for one working day.
    pub daily_earnings: Decimal,
    /// Earnings for one working week.
    pub weekly_earnings: Decimal,
    /// Weekly earnings scaled to a month.
    pub monthly_base: Decimal,
    /// Monthly income. Equal to `monthly_base`; no deductions are modeled.
    pub monthly_total: Decimal,
    /// Monthly income over twelve months.
    pub yearly_earnings: Decimal,
    /// Monthly income minus living cost. Negative means a shortfall.
    pub savings_amount: Decimal,
    /// Monthly savings over twelve months.
    pub yearly_savings: Decimal,
    /// Approximate working days per month, rounded to a whole day.
    pub monthly_work_days: Decimal,
    /// Approximate sessions per month. Session mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_total_sessions: Option<Decimal>,
    /// Work and waiting pay split. Hourly mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_pay: Option<HourlyPay>,
}

impl ProjectionResult {
    /// Returns true when living cost exceeds monthly income.
    pub fn has_shortfall(&self) -> bool {
        self.savings_amount < Decimal::ZERO
    }
}

/// Why a savings goal cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnattainableReason {
    /// Price per session or sessions per day is zero, so no number of days
    /// produces income.
    NoDailyIncome,
    /// The goal timeframe is zero months.
    NoTimeframe,
    /// Daily income is positive but so small that the day count does not
    /// fit in a [`Decimal`].
    OutOfRange,
}

impl UnattainableReason {
    /// Human-readable explanation.
    pub fn message(&self) -> &'static str {
        match self {
            UnattainableReason::NoDailyIncome => {
                "requirement unattainable with current per-session rate"
            }
            UnattainableReason::NoTimeframe => "goal timeframe must be at least one month",
            UnattainableReason::OutOfRange => {
                "required working days exceed the calculable range"
            }
        }
    }
}

/// Working days needed to reach a goal, or the marker that it cannot be
/// reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DaysRequirement {
    /// The goal is reachable.
    Attainable {
        /// Required working days per week, unrounded. May exceed 7.
        per_week: Decimal,
        /// Required working days per month, rounded up.
        per_month: Decimal,
    },
    /// No finite number of days reaches the goal.
    Unattainable {
        /// Why the goal cannot be reached.
        reason: UnattainableReason,
    },
}

/// Result of reversing a savings goal.
///
/// The timeframe-derived amounts are `None` only when the goal has a zero
/// month timeframe, in which case `required_days` is also unattainable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalResult {
    /// Amount that must be saved each month.
    pub required_monthly_savings: Option<Decimal>,
    /// Monthly savings plus living cost.
    pub required_monthly_income: Option<Decimal>,
    /// Income from one working day at the current rate.
    pub daily_income: Decimal,
    /// Working days needed per week and per month.
    pub required_days: DaysRequirement,
    /// Required monthly income over twelve months.
    pub projected_yearly_income: Option<Decimal>,
}

impl GoalResult {
    /// Returns true when the goal can be reached.
    pub fn is_attainable(&self) -> bool {
        matches!(self.required_days, DaysRequirement::Attainable { .. })
    }

    /// Required working days per week, if attainable.
    pub fn required_days_per_week(&self) -> Option<Decimal> {
        match self.required_days {
            DaysRequirement::Attainable { per_week, .. } => Some(per_week),
            DaysRequirement::Unattainable { .. } => None,
        }
    }

    /// Required working days per month, if attainable.
    pub fn required_days_per_month(&self) -> Option<Decimal> {
        match self.required_days {
            DaysRequirement::Attainable { per_month, .. } => Some(per_month),
            DaysRequirement::Unattainable { .. } => None,
        }
    }

    /// The reason the goal cannot be reached, if it cannot.
    pub fn unattainable_reason(&self) -> Option<UnattainableReason> {
        match self.required_days {
            DaysRequirement::Attainable { .. } => None,
            DaysRequirement::Unattainable { reason } => Some(reason),
        }
    }
}

/// Whatever a single calculation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationOutcome {
    /// A session or hourly earnings projection.
    Projection(ProjectionResult),
    /// A goal reversal.
    Goal(GoalResult),
}

impl CalculationOutcome {
    /// Returns the projection, if this outcome is one.
    pub fn as_projection(&self) -> Option<&ProjectionResult> {
        match self {
            CalculationOutcome::Projection(projection) => Some(projection),
            CalculationOutcome::Goal(_) => None,
        }
    }

    /// Returns the goal result, if this outcome is one.
    pub fn as_goal(&self) -> Option<&GoalResult> {
        match self {
            CalculationOutcome::Projection(_) => None,
            CalculationOutcome::Goal(goal) => Some(goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_projection(savings: Decimal) -> ProjectionResult {
        ProjectionResult {
            daily_earnings: dec("30000"),
            weekly_earnings: dec("150000"),
            monthly_base: dec("649500"),
            monthly_total: dec("649500"),
            yearly_earnings: dec("7794000"),
            savings_amount: savings,
            yearly_savings: savings * Decimal::from(12),
            monthly_work_days: dec("22"),
            monthly_total_sessions: Some(dec("66")),
            hourly_pay: None,
        }
    }

    #[test]
    fn test_shortfall_detected_for_negative_savings() {
        assert!(sample_projection(dec("-1000")).has_shortfall());
        assert!(!sample_projection(dec("0")).has_shortfall());
        assert!(!sample_projection(dec("499500")).has_shortfall());
    }

    #[test]
    fn test_projection_serialization_omits_absent_fields() {
        let json = serde_json::to_value(sample_projection(dec("499500"))).unwrap();
        assert_eq!(json["monthly_total_sessions"], "66");
        assert!(json.get("hourly_pay").is_none());
    }

    #[test]
    fn test_unattainable_requirement_serializes_with_status_tag() {
        let requirement = DaysRequirement::Unattainable {
            reason: UnattainableReason::NoDailyIncome,
        };
        let json = serde_json::to_value(&requirement).unwrap();
        assert_eq!(json["status"], "unattainable");
        assert_eq!(json["reason"], "no_daily_income");
    }

    #[test]
    fn test_goal_accessors_for_unattainable_goal() {
        let goal = GoalResult {
            required_monthly_savings: Some(dec("100000")),
            required_monthly_income: Some(dec("250000")),
            daily_income: Decimal::ZERO,
            required_days: DaysRequirement::Unattainable {
                reason: UnattainableReason::NoDailyIncome,
            },
            projected_yearly_income: Some(dec("3000000")),
        };

        assert!(!goal.is_attainable());
        assert_eq!(goal.required_days_per_week(), None);
        assert_eq!(goal.required_days_per_month(), None);
        assert_eq!(
            goal.unattainable_reason(),
            Some(UnattainableReason::NoDailyIncome)
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = CalculationOutcome::Projection(sample_projection(dec("1")));
        assert!(outcome.as_projection().is_some());
        assert!(outcome.as_goal().is_none());
    }

    #[test]
    fn test_unattainable_reason_messages() {
        assert_eq!(
            UnattainableReason::NoDailyIncome.message(),
            "requirement unattainable with current per-session rate"
        );
        assert!(UnattainableReason::NoTimeframe.message().contains("month"));
        assert!(UnattainableReason::OutOfRange.message().contains("range"));
    }

    #[test]
    fn test_out_of_range_reason_serializes_snake_case() {
        let json = serde_json::to_value(UnattainableReason::OutOfRange).unwrap();
        assert_eq!(json, "out_of_range");
    }
}

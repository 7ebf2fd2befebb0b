//! Typed calculator inputs.
//!
//! Each mode has its own input struct. The [`InputSnapshot`] holds all three
//! side by side so switching modes never discards what was entered for the
//! others.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationMode;

/// Inputs for per-session earnings.
///
/// # Example
///
/// ```
/// use earnings_estimator::models::SessionInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = SessionInputs {
///     price_per_session: Decimal::from(10000),
///     sessions_per_day: Decimal::from(3),
///     days_per_week: Decimal::from(5),
///     living_cost: Decimal::from(150000),
/// };
/// assert_eq!(inputs.days_per_week, Decimal::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionInputs {
    /// Price charged for one session.
    pub price_per_session: Decimal,
    /// Sessions worked per day (may be fractional as an average).
    pub sessions_per_day: Decimal,
    /// Working days per week, 0 to 7.
    pub days_per_week: Decimal,
    /// Fixed monthly living cost.
    pub living_cost: Decimal,
}

/// Inputs for hourly earnings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourlyInputs {
    /// Standard hourly rate.
    pub hourly_rate: Decimal,
    /// Hours of active work per day.
    pub work_hours: Decimal,
    /// Hours of standby per day, paid at half the hourly rate.
    pub waiting_hours: Decimal,
    /// Working days per week, 0 to 7.
    pub days_per_week: Decimal,
    /// Fixed monthly living cost.
    pub living_cost: Decimal,
}

/// Inputs for reversing a savings goal into required working days.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalInputs {
    /// Total amount to save.
    pub goal_amount: Decimal,
    /// Months over which the goal is saved. Zero makes the goal unattainable.
    pub goal_months: u32,
    /// Price charged for one session.
    pub price_per_session: Decimal,
    /// Sessions worked per day.
    pub sessions_per_day: Decimal,
    /// Fixed monthly living cost.
    pub living_cost: Decimal,
}

/// The inputs of every mode at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Per-session inputs.
    pub session: SessionInputs,
    /// Hourly inputs.
    pub hourly: HourlyInputs,
    /// Savings goal inputs.
    pub goal: GoalInputs,
}

impl InputSnapshot {
    /// Returns the living cost entered for the given mode.
    pub fn living_cost(&self, mode: CalculationMode) -> Decimal {
        match mode {
            CalculationMode::Session => self.session.living_cost,
            CalculationMode::Hourly => self.hourly.living_cost,
            CalculationMode::Goal => self.goal.living_cost,
        }
    }
}

impl From<SessionInputs> for InputSnapshot {
    fn from(session: SessionInputs) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }
}

impl From<HourlyInputs> for InputSnapshot {
    fn from(hourly: HourlyInputs) -> Self {
        Self {
            hourly,
            ..Self::default()
        }
    }
}

impl From<GoalInputs> for InputSnapshot {
    fn from(goal: GoalInputs) -> Self {
        Self {
            goal,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_zero() {
        let inputs = SessionInputs::default();
        assert_eq!(inputs.price_per_session, Decimal::ZERO);
        assert_eq!(inputs.living_cost, Decimal::ZERO);
        assert_eq!(GoalInputs::default().goal_months, 0);
    }

    #[test]
    fn test_snapshot_keeps_other_modes_inputs() {
        let mut snapshot = InputSnapshot::from(SessionInputs {
            price_per_session: Decimal::from(10000),
            sessions_per_day: Decimal::from(3),
            days_per_week: Decimal::from(5),
            living_cost: Decimal::from(150000),
        });
        snapshot.hourly.hourly_rate = Decimal::from(2000);

        assert_eq!(snapshot.session.price_per_session, Decimal::from(10000));
        assert_eq!(snapshot.hourly.hourly_rate, Decimal::from(2000));
    }

    #[test]
    fn test_living_cost_follows_mode() {
        let mut snapshot = InputSnapshot::default();
        snapshot.session.living_cost = Decimal::from(1);
        snapshot.hourly.living_cost = Decimal::from(2);
        snapshot.goal.living_cost = Decimal::from(3);

        assert_eq!(snapshot.living_cost(CalculationMode::Session), Decimal::from(1));
        assert_eq!(snapshot.living_cost(CalculationMode::Hourly), Decimal::from(2));
        assert_eq!(snapshot.living_cost(CalculationMode::Goal), Decimal::from(3));
    }
}

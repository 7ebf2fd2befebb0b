//! Mode dispatch.

use tracing::{debug, warn};

use crate::models::{CalculationMode, CalculationOutcome, InputSnapshot};

use super::{compute_goal_projection, compute_hourly_projection, compute_session_projection};

/// Runs the calculation for `mode` against the matching inputs in
/// `snapshot`.
///
/// The inputs of the other modes are ignored but left untouched, so a
/// caller can switch modes and recalculate without losing anything.
///
/// # Examples
///
/// ```
/// use earnings_estimator::calculation::calculate;
/// use earnings_estimator::models::{CalculationMode, InputSnapshot};
///
/// let snapshot = InputSnapshot::default();
/// let outcome = calculate(CalculationMode::Goal, &snapshot);
/// assert!(outcome.as_goal().is_some());
/// ```
pub fn calculate(mode: CalculationMode, snapshot: &InputSnapshot) -> CalculationOutcome {
    let outcome = match mode {
        CalculationMode::Session => {
            CalculationOutcome::Projection(compute_session_projection(&snapshot.session))
        }
        CalculationMode::Hourly => {
            CalculationOutcome::Projection(compute_hourly_projection(&snapshot.hourly))
        }
        CalculationMode::Goal => CalculationOutcome::Goal(compute_goal_projection(&snapshot.goal)),
    };

    match &outcome {
        CalculationOutcome::Projection(projection) => debug!(
            mode = ?mode,
            monthly_total = %projection.monthly_total,
            savings_amount = %projection.savings_amount,
            "Calculated earnings projection"
        ),
        CalculationOutcome::Goal(goal) => match goal.unattainable_reason() {
            Some(reason) => warn!(
                mode = ?mode,
                goal_amount = %snapshot.goal.goal_amount,
                goal_months = snapshot.goal.goal_months,
                reason = reason.message(),
                "Savings goal unattainable"
            ),
            None => debug!(
                mode = ?mode,
                daily_income = %goal.daily_income,
                "Calculated savings goal requirement"
            ),
        },
    }

    outcome
}

//! Core data models for the earnings estimator.
//!
//! This module contains the calculation mode, the typed inputs for each
//! mode, and the result structures the calculators produce.

mod inputs;
mod mode;
mod projection;

pub use inputs::{GoalInputs, HourlyInputs, InputSnapshot, SessionInputs};
pub use mode::CalculationMode;
pub use projection::{
    CalculationOutcome, DaysRequirement, GoalResult, HourlyPay, ProjectionResult,
    UnattainableReason,
};

//! Calculation logic for the earnings estimator.
//!
//! This module contains the per-session and hourly earnings projections,
//! savings goal reversal, and the dispatcher that picks between them for an
//! explicit calculation mode.

mod common;
mod dispatch;
mod goal;
mod hourly;
mod session;

pub use common::{MONTHS_PER_YEAR, WEEKS_PER_MONTH};
pub use dispatch::calculate;
pub use goal::compute_goal_projection;
pub use hourly::{compute_hourly_projection, waiting_rate_multiplier};
pub use session::compute_session_projection;

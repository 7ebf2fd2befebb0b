//! Earnings estimator for per-session and hourly gig workers.
//!
//! This crate projects daily, weekly, monthly and yearly income from a
//! price per session or an hourly rate, reverses a savings goal into the
//! working days it requires, and formats the results for display and
//! export.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod report;

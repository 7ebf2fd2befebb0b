//! Configuration loading and management for the earnings estimator.
//!
//! This module loads the currency settings and named presets from YAML
//! files, or provides the same values built in.
//!
//! # Example
//!
//! ```no_run
//! use earnings_estimator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Currency: {}", config.config().currency().code);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CurrencyConfig, EstimatorConfig, Preset, PresetsConfig};

//! Configuration types for the earnings estimator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::form::{clamp_amount, clamp_count, clamp_days};
use crate::models::SessionInputs;

/// Currency settings from currency.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol prefixed to formatted amounts (e.g., "¥").
    pub symbol: String,
    /// ISO 4217 code, informational only (e.g., "JPY").
    pub code: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "¥".to_string(),
            code: "JPY".to_string(),
        }
    }
}

/// A named set of per-session inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Preset {
    /// Short description shown when listing presets.
    #[serde(default)]
    pub description: String,
    /// Price per session.
    pub price_per_session: Decimal,
    /// Sessions per day.
    pub sessions_per_day: Decimal,
    /// Working days per week.
    pub days_per_week: Decimal,
    /// Monthly living cost.
    pub living_cost: Decimal,
}

impl Preset {
    /// The session inputs this preset fills in.
    ///
    /// Values are clamped the same way form fields are: nothing negative,
    /// at most 7 days per week.
    pub fn session_inputs(&self) -> SessionInputs {
        SessionInputs {
            price_per_session: clamp_amount(self.price_per_session),
            sessions_per_day: clamp_count(self.sessions_per_day),
            days_per_week: clamp_days(self.days_per_week),
            living_cost: clamp_amount(self.living_cost),
        }
    }
}

/// Presets configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetsConfig {
    /// Map of preset name to preset values.
    pub presets: BTreeMap<String, Preset>,
}

/// The complete estimator configuration.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    currency: CurrencyConfig,
    presets: BTreeMap<String, Preset>,
}

impl EstimatorConfig {
    /// Creates a new EstimatorConfig from its component parts.
    pub fn new(currency: CurrencyConfig, presets: BTreeMap<String, Preset>) -> Self {
        Self { currency, presets }
    }

    /// Returns the currency settings.
    pub fn currency(&self) -> &CurrencyConfig {
        &self.currency
    }

    /// Returns all presets, ordered by name.
    pub fn presets(&self) -> &BTreeMap<String, Preset> {
        &self.presets
    }
}

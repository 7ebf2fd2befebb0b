//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading estimator
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::SessionInputs;
use crate::report::CurrencyFormatter;

use super::types::{CurrencyConfig, EstimatorConfig, Preset, PresetsConfig};

/// Loads and provides access to estimator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── currency.yaml   # Currency symbol and code
/// └── presets.yaml    # Named per-session presets
/// ```
///
/// # Example
///
/// ```no_run
/// use earnings_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let inputs = loader.get_preset("standard")?;
/// println!("Price per session: {}", inputs.price_per_session);
/// # Ok::<(), earnings_estimator::error::EstimatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EstimatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The presets file defines no presets (`ConfigNotFound`)
    pub fn load<P: AsRef<Path>>(path: P) -> EstimatorResult<Self> {
        let path = path.as_ref();

        let currency = Self::load_yaml::<CurrencyConfig>(&path.join("currency.yaml"))?;

        let presets_path = path.join("presets.yaml");
        let presets = Self::load_yaml::<PresetsConfig>(&presets_path)?.presets;
        if presets.is_empty() {
            return Err(EstimatorError::ConfigNotFound {
                path: format!("{} (no presets defined)", presets_path.display()),
            });
        }

        debug!(
            path = %path.display(),
            currency = %currency.code,
            presets = presets.len(),
            "Loaded estimator configuration"
        );

        Ok(Self {
            config: EstimatorConfig::new(currency, presets),
        })
    }

    /// The built-in configuration: yen and the beginner, standard and
    /// premium presets.
    pub fn builtin() -> Self {
        let preset = |description: &str, price: i64, sessions: i64, days: i64, living: i64| Preset {
            description: description.to_string(),
            price_per_session: Decimal::from(price),
            sessions_per_day: Decimal::from(sessions),
            days_per_week: Decimal::from(days),
            living_cost: Decimal::from(living),
        };

        let presets = BTreeMap::from([
            (
                "beginner".to_string(),
                preset("Starting out, a few sessions a week", 8000, 2, 4, 100000),
            ),
            (
                "standard".to_string(),
                preset("Typical full schedule", 10000, 3, 5, 150000),
            ),
            (
                "premium".to_string(),
                preset("High rate, heavy schedule", 15000, 4, 6, 200000),
            ),
        ]);

        Self {
            config: EstimatorConfig::new(CurrencyConfig::default(), presets),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EstimatorResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EstimatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EstimatorError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Gets the session inputs of a named preset.
    ///
    /// Returns `PresetNotFound` for an unknown name.
    pub fn get_preset(&self, name: &str) -> EstimatorResult<SessionInputs> {
        self.config
            .presets()
            .get(name)
            .map(Preset::session_inputs)
            .ok_or_else(|| EstimatorError::PresetNotFound {
                name: name.to_string(),
            })
    }

    /// Returns preset names in alphabetical order.
    pub fn preset_names(&self) -> Vec<&str> {
        self.config.presets().keys().map(String::as_str).collect()
    }

    /// A currency formatter using the configured symbol.
    pub fn currency_formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(self.config.currency().symbol.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scratch_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("estimator-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().currency().symbol, "¥");
        assert_eq!(loader.config().currency().code, "JPY");
    }

    #[test]
    fn test_get_standard_preset() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let inputs = loader.get_preset("standard").unwrap();
        assert_eq!(inputs.price_per_session, dec("10000"));
        assert_eq!(inputs.sessions_per_day, dec("3"));
        assert_eq!(inputs.days_per_week, dec("5"));
        assert_eq!(inputs.living_cost, dec("150000"));
    }

    #[test]
    fn test_get_unknown_preset_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_preset("platinum") {
            Err(EstimatorError::PresetNotFound { name }) => assert_eq!(name, "platinum"),
            other => panic!("Expected PresetNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_file_presets_match_builtin() {
        let loaded = ConfigLoader::load(config_path()).unwrap();
        let builtin = ConfigLoader::builtin();

        assert_eq!(loaded.preset_names(), builtin.preset_names());
        for name in builtin.preset_names() {
            assert_eq!(
                loaded.get_preset(name).unwrap(),
                builtin.get_preset(name).unwrap()
            );
        }
    }

    #[test]
    fn test_preset_names_are_sorted() {
        let loader = ConfigLoader::builtin();
        assert_eq!(loader.preset_names(), vec!["beginner", "premium", "standard"]);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EstimatorError::ConfigNotFound { path }) => {
                assert!(path.contains("currency.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir();
        fs::write(dir.join("currency.yaml"), "symbol: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EstimatorError::ConfigParseError { path, .. }) => {
                assert!(path.contains("currency.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_preset_values_are_clamped() {
        let dir = scratch_dir();
        fs::write(dir.join("currency.yaml"), "symbol: \"¥\"\ncode: \"JPY\"\n").unwrap();
        fs::write(
            dir.join("presets.yaml"),
            "presets:\n  odd:\n    price_per_session: -5000\n    sessions_per_day: 3\n    days_per_week: 9\n    living_cost: -1\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        let inputs = result.unwrap().get_preset("odd").unwrap();
        assert_eq!(inputs.price_per_session, Decimal::ZERO);
        assert_eq!(inputs.sessions_per_day, dec("3"));
        assert_eq!(inputs.days_per_week, dec("7"));
        assert_eq!(inputs.living_cost, Decimal::ZERO);
    }

    #[test]
    fn test_empty_presets_returns_error() {
        let dir = scratch_dir();
        fs::write(dir.join("currency.yaml"), "symbol: \"$\"\ncode: \"USD\"\n").unwrap();
        fs::write(dir.join("presets.yaml"), "presets: {}\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EstimatorError::ConfigNotFound { path }) => {
                assert!(path.contains("no presets defined"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_currency_formatter_uses_configured_symbol() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let formatter = loader.currency_formatter();
        assert_eq!(formatter.symbol(), "¥");
        assert_eq!(formatter.format(dec("649500")), "¥649,500");
    }
}

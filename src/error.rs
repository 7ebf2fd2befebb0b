//! Error types for the earnings estimator.
//!
//! The projection calculator itself never fails: malformed input degrades to
//! zero and an unreachable savings goal is reported as data. These errors
//! cover the outer layers only (configuration, presets and form decoding).

use thiserror::Error;

/// The main error type for the earnings estimator.
///
/// # Example
///
/// ```
/// use earnings_estimator::error::EstimatorError;
///
/// let error = EstimatorError::ConfigNotFound {
///     path: "/missing/presets.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/presets.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No preset with the given name exists in the configuration.
    #[error("Preset not found: {name}")]
    PresetNotFound {
        /// The preset name that was requested.
        name: String,
    },

    /// A form payload could not be decoded at all.
    #[error("Malformed form payload: {message}")]
    MalformedForm {
        /// A description of the decoding failure.
        message: String,
    },
}

/// A type alias for Results that return EstimatorError.
pub type EstimatorResult<T> = Result<T, EstimatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EstimatorError::ConfigNotFound {
            path: "/missing/currency.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/currency.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EstimatorError::ConfigParseError {
            path: "/config/presets.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/presets.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_preset_not_found_displays_name() {
        let error = EstimatorError::PresetNotFound {
            name: "platinum".to_string(),
        };
        assert_eq!(error.to_string(), "Preset not found: platinum");
    }

    #[test]
    fn test_malformed_form_displays_message() {
        let error = EstimatorError::MalformedForm {
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed form payload: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EstimatorError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_preset_not_found() -> EstimatorResult<()> {
            Err(EstimatorError::PresetNotFound {
                name: "missing".to_string(),
            })
        }

        fn propagates_error() -> EstimatorResult<()> {
            returns_preset_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

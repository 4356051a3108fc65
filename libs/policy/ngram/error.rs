//! Error types for n-gram predictor configuration and construction

use crate::config::ConfigError;
use crate::store::StoreError;

/// Error types for building a smoothed n-gram predictor
#[derive(Debug, Clone, PartialEq)]
pub enum NgramError {
    /// A configuration section or key could not be read
    Config(ConfigError),

    /// A required configuration facet is missing or empty
    ConfigurationIncomplete {
        predictor: String,
        field: &'static str,
    },

    /// A smoothing weight is not a finite non-negative number
    InvalidDelta { predictor: String, delta: f64 },

    /// The configured count store could not be opened
    Store(StoreError),
}

impl std::fmt::Display for NgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NgramError::Config(e) => write!(f, "Configuration error: {}", e),
            NgramError::ConfigurationIncomplete { predictor, field } => {
                write!(
                    f,
                    "Predictor \"{}\" configuration incomplete: {} is missing or empty",
                    predictor, field
                )
            }
            NgramError::InvalidDelta { predictor, delta } => {
                write!(
                    f,
                    "Predictor \"{}\" has invalid delta {} (must be finite and >= 0)",
                    predictor, delta
                )
            }
            NgramError::Store(e) => write!(f, "Count store error: {}", e),
        }
    }
}

impl std::error::Error for NgramError {}

impl From<ConfigError> for NgramError {
    fn from(error: ConfigError) -> Self {
        NgramError::Config(error)
    }
}

impl From<StoreError> for NgramError {
    fn from(error: StoreError) -> Self {
        NgramError::Store(error)
    }
}

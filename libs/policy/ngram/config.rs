//! Configuration for the smoothed n-gram predictor
//!
//! A predictor section supplies three facets: the count store identifier
//! (`dbfilename`), the interpolation weights (`deltas`, whitespace-separated
//! floats ordered by ascending n-gram order), and the learn-mode flag
//! (`learn`). All three are read and validated before a predictor is
//! constructed, so a predictor never exists half-configured.

use serde::{Deserialize, Serialize};

use crate::config::Config;

use super::error::NgramError;

/// Validated configuration for one smoothed n-gram predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgramPredictorConfig {
    /// Configured predictor name (its configuration section)
    pub name: String,

    /// Count store identifier, resolved through the store catalog
    pub store_name: String,

    /// Interpolation weights by ascending n-gram order (unigram first);
    /// expected to sum to 1.0, which is a configuration contract rather
    /// than an enforced invariant
    pub deltas: Vec<f64>,

    /// Whether the predictor should feed typed tokens back into the store
    pub learn_mode: bool,
}

impl NgramPredictorConfig {
    /// Create a configuration from explicit values, validating it
    pub fn new(
        name: impl Into<String>,
        store_name: impl Into<String>,
        deltas: Vec<f64>,
        learn_mode: bool,
    ) -> Result<Self, NgramError> {
        let config = Self {
            name: name.into(),
            store_name: store_name.into(),
            deltas,
            learn_mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a predictor's configuration section
    pub fn from_section(config: &Config, name: &str) -> Result<Self, NgramError> {
        let store_name = config.get(name, "dbfilename")?.to_string();
        let deltas = config.get_f64_list(name, "deltas")?;
        let learn_mode = config.get_bool(name, "learn")?;
        Self::new(name, store_name, deltas, learn_mode)
    }

    /// The n-gram order this predictor models
    pub fn cardinality(&self) -> usize {
        self.deltas.len()
    }

    /// Validate the configuration facets
    pub fn validate(&self) -> Result<(), NgramError> {
        if self.store_name.is_empty() {
            return Err(NgramError::ConfigurationIncomplete {
                predictor: self.name.clone(),
                field: "dbfilename",
            });
        }
        if self.deltas.is_empty() {
            return Err(NgramError::ConfigurationIncomplete {
                predictor: self.name.clone(),
                field: "deltas",
            });
        }
        for delta in &self.deltas {
            if !delta.is_finite() || *delta < 0.0 {
                return Err(NgramError::InvalidDelta {
                    predictor: self.name.clone(),
                    delta: *delta,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinality_follows_deltas() {
        let config =
            NgramPredictorConfig::new("p", "db", vec![0.01, 0.1, 0.89], false).unwrap();
        assert_eq!(config.cardinality(), 3);
    }

    #[test]
    fn empty_deltas_are_incomplete() {
        let result = NgramPredictorConfig::new("p", "db", vec![], false);
        assert!(matches!(
            result,
            Err(NgramError::ConfigurationIncomplete { field: "deltas", .. })
        ));
    }

    #[test]
    fn empty_store_name_is_incomplete() {
        let result = NgramPredictorConfig::new("p", "", vec![0.5, 0.5], false);
        assert!(matches!(
            result,
            Err(NgramError::ConfigurationIncomplete {
                field: "dbfilename",
                ..
            })
        ));
    }

    #[test]
    fn negative_delta_is_invalid() {
        let result = NgramPredictorConfig::new("p", "db", vec![0.5, -0.5], false);
        assert!(matches!(result, Err(NgramError::InvalidDelta { .. })));
    }

    #[test]
    fn reads_section_values() {
        let mut config = Config::new();
        config.set("ngram_main", "dbfilename", "corpus.db");
        config.set("ngram_main", "deltas", "0.2 0.8");
        config.set("ngram_main", "learn", "yes");

        let parsed = NgramPredictorConfig::from_section(&config, "ngram_main").unwrap();
        assert_eq!(parsed.name, "ngram_main");
        assert_eq!(parsed.store_name, "corpus.db");
        assert_eq!(parsed.deltas, vec![0.2, 0.8]);
        assert!(parsed.learn_mode);
    }

    #[test]
    fn missing_section_key_surfaces_config_error() {
        let config = Config::new();
        let result = NgramPredictorConfig::from_section(&config, "ngram_main");
        assert!(matches!(result, Err(NgramError::Config(_))));
    }
}

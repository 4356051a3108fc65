//! Predictor registry
//!
//! The registry owns the ordered set of active predictors, built from the
//! `PredictorRegistry` configuration section. Exactly one context tracker is
//! shared by the registry and every predictor it constructs; assigning a
//! different tracker invalidates and rebuilds the whole set, while
//! re-assigning the same tracker is a no-op so repeated updates from the
//! same source cause no rebuild storms.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{Config, ConfigError};
use crate::context::ContextTracker;
use crate::ngram::{NgramError, NgramPredictorConfig, SmoothedNgramPredictor};
use crate::store::StoreCatalog;
use crate::Predictor;

/// Error types for registry construction
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A configuration section or key could not be read
    Config(ConfigError),

    /// A configured predictor could not be built
    Predictor(NgramError),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::Config(e) => write!(f, "Configuration error: {}", e),
            RegistryError::Predictor(e) => write!(f, "Predictor construction failed: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<ConfigError> for RegistryError {
    fn from(error: ConfigError) -> Self {
        RegistryError::Config(error)
    }
}

impl From<NgramError> for RegistryError {
    fn from(error: NgramError) -> Self {
        RegistryError::Predictor(error)
    }
}

/// Ordered collection of active predictors, derived from configuration and
/// the current context tracker
pub struct PredictorRegistry {
    config: Arc<Config>,
    catalog: Arc<dyn StoreCatalog>,
    tracker: Option<Arc<dyn ContextTracker>>,
    predictors: Vec<Arc<dyn Predictor>>,
}

impl PredictorRegistry {
    /// Create a registry without a context tracker; it stays empty until a
    /// tracker is assigned
    pub fn new(config: Arc<Config>, catalog: Arc<dyn StoreCatalog>) -> Self {
        Self {
            config,
            catalog,
            tracker: None,
            predictors: Vec::new(),
        }
    }

    /// Assign the shared context tracker
    ///
    /// A tracker identical (by identity) to the current one leaves the
    /// predictor set untouched; a different one clears and rebuilds it.
    pub fn set_context_tracker(
        &mut self,
        tracker: Arc<dyn ContextTracker>,
    ) -> Result<(), RegistryError> {
        if let Some(current) = &self.tracker {
            if same_identity(current, &tracker) {
                debug!("context tracker unchanged, keeping predictor set");
                return Ok(());
            }
        }
        self.tracker = Some(tracker);
        self.set_predictors()
    }

    /// Rebuild the predictor list from the current configuration
    ///
    /// No-op while no context tracker is assigned.
    pub fn set_predictors(&mut self) -> Result<(), RegistryError> {
        let Some(tracker) = self.tracker.clone() else {
            return Ok(());
        };
        self.predictors.clear();

        let names = self.config.get("PredictorRegistry", "predictors")?.to_string();
        for name in names.split_whitespace() {
            self.add_predictor(name, tracker.clone())?;
        }
        debug!(predictors = self.predictors.len(), "predictor set rebuilt");
        Ok(())
    }

    fn add_predictor(
        &mut self,
        name: &str,
        tracker: Arc<dyn ContextTracker>,
    ) -> Result<(), RegistryError> {
        let class = self.config.get(name, "predictor_class")?.to_string();
        match class.as_str() {
            "SmoothedNgramPredictor" => {
                let predictor_config = NgramPredictorConfig::from_section(&self.config, name)?;
                let predictor =
                    SmoothedNgramPredictor::new(predictor_config, tracker, self.catalog.as_ref())?;
                self.predictors.push(Arc::new(predictor));
            }
            other => {
                warn!(
                    predictor = name,
                    class = other,
                    "unrecognized predictor_class, skipping"
                );
            }
        }
        Ok(())
    }

    /// The active predictors, in configuration order
    pub fn predictors(&self) -> &[Arc<dyn Predictor>] {
        &self.predictors
    }

    /// Number of active predictors
    pub fn len(&self) -> usize {
        self.predictors.len()
    }

    /// Whether no predictor is active
    pub fn is_empty(&self) -> bool {
        self.predictors.is_empty()
    }
}

// Identity comparison on the data pointer; the metadata half of a trait
// object pointer is not stable across codegen units.
fn same_identity(a: &Arc<dyn ContextTracker>, b: &Arc<dyn ContextTracker>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const u8,
        Arc::as_ptr(b) as *const u8,
    )
}

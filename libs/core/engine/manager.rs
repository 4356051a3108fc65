//! Engine assembly and session API
//!
//! `PredictiveEngine` is built from a configuration and a store catalog. It
//! owns the sliding-window tracker, hands it to the registry, and drives
//! prediction rounds through the activator.

use std::sync::Arc;
use std::time::Duration;

use policy::activator::{ActivatorError, PredictorActivator};
use policy::config::{Config, ConfigError};
use policy::constants::{DEFAULT_COMBINATION_POLICY, DEFAULT_MAX_PARTIAL_PREDICTION_SIZE};
use policy::registry::{PredictorRegistry, RegistryError};
use policy::store::StoreCatalog;
use policy::suggestion::Prediction;
use policy::CharacterFilter;
use tracing::{debug, info, instrument};

use crate::tracker::SlidingWindowTracker;

/// Error types for engine construction and prediction rounds
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A configuration value could not be read
    Config(ConfigError),

    /// The predictor set could not be built
    Registry(RegistryError),

    /// A prediction round failed
    Round(ActivatorError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Config(e) => write!(f, "Configuration error: {}", e),
            EngineError::Registry(e) => write!(f, "Registry error: {}", e),
            EngineError::Round(e) => write!(f, "Prediction round failed: {}", e),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<ConfigError> for EngineError {
    fn from(error: ConfigError) -> Self {
        EngineError::Config(error)
    }
}

impl From<RegistryError> for EngineError {
    fn from(error: RegistryError) -> Self {
        EngineError::Registry(error)
    }
}

impl From<ActivatorError> for EngineError {
    fn from(error: ActivatorError) -> Self {
        EngineError::Round(error)
    }
}

// Missing sections and keys fall back to defaults; malformed values do not.
fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::MissingSection(_)) | Err(ConfigError::MissingKey { .. }) => Ok(None),
        Err(error) => Err(error),
    }
}

/// Assembled prediction engine for one input session
pub struct PredictiveEngine {
    tracker: Arc<SlidingWindowTracker>,
    registry: PredictorRegistry,
    activator: PredictorActivator,
}

impl PredictiveEngine {
    /// Build an engine from configuration, resolving count stores through
    /// `catalog`
    ///
    /// The `PredictorRegistry` section is required. The `PredictorActivator`
    /// and `ContextTracker` sections are optional and fall back to defaults
    /// key by key.
    #[instrument(level = "info", name = "engine_new", skip(config, catalog))]
    pub fn new(
        config: Arc<Config>,
        catalog: Arc<dyn StoreCatalog>,
    ) -> Result<Self, EngineError> {
        let window_capacity =
            optional(config.get_usize("ContextTracker", "sliding_window_size"))?.unwrap_or(0);
        let tracker = Arc::new(SlidingWindowTracker::new(window_capacity));

        let max_size = optional(config.get_usize(
            "PredictorActivator",
            "max_partial_prediction_size",
        ))?
        .unwrap_or(DEFAULT_MAX_PARTIAL_PREDICTION_SIZE);
        let predict_time = optional(config.get_usize("PredictorActivator", "predict_time"))?
            .filter(|ms| *ms > 0)
            .map(|ms| Duration::from_millis(ms as u64));
        let policy_name =
            optional(config.get("PredictorActivator", "combination_policy"))?
                .unwrap_or(DEFAULT_COMBINATION_POLICY)
                .to_string();

        let mut activator = PredictorActivator::new(max_size, predict_time);
        activator.set_combination_policy(&policy_name)?;

        let mut registry = PredictorRegistry::new(config, catalog);
        registry.set_context_tracker(tracker.clone())?;

        info!(
            predictors = registry.len(),
            combination_policy = %policy_name,
            max_partial_prediction_size = max_size,
            "predictive engine ready"
        );
        Ok(Self {
            tracker,
            registry,
            activator,
        })
    }

    /// The engine's context tracker
    pub fn tracker(&self) -> &Arc<SlidingWindowTracker> {
        &self.tracker
    }

    /// Number of active predictors
    pub fn predictor_count(&self) -> usize {
        self.registry.len()
    }

    /// Replace the word currently being entered
    pub fn set_current(&self, partial: impl Into<String>) {
        self.tracker.set_current(partial);
    }

    /// Complete the current word and append it to the context history
    pub fn push_token(&self, token: impl Into<String>) {
        self.tracker.push_token(token);
    }

    /// Forget the context history
    pub fn clear_context(&self) {
        self.tracker.clear();
    }

    /// Run one prediction round against the current context
    pub fn predict(
        &mut self,
        multiplier: usize,
        filter: Option<&CharacterFilter>,
    ) -> Result<Prediction, EngineError> {
        let prediction = self.activator.predict(&self.registry, multiplier, filter)?;
        debug!(suggestions = prediction.len(), "prediction round finished");
        Ok(prediction)
    }
}

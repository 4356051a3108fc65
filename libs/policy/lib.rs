// Prediction policy library module
pub mod activator;
pub mod combiner;
pub mod config;
pub mod constants;
pub mod context;
pub mod ngram;
pub mod registry;
pub mod store;
pub mod suggestion;

pub use activator::{ActivatorError, PredictorActivator};
pub use combiner::{Combiner, MeritocracyCombiner};
pub use config::{Config, ConfigError};
pub use context::ContextTracker;
pub use ngram::predictor::SmoothedNgramPredictor;
pub use registry::{PredictorRegistry, RegistryError};
pub use store::{CountStore, StoreCatalog, StoreError};
pub use suggestion::{Prediction, Suggestion, SuggestionError};

/// Set of characters a candidate's next character must fall in
///
/// Used for prefix-completion filtering while a word is being typed: a
/// candidate completion passes the filter when the character that follows
/// the already-typed prefix is one of the filter's characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterFilter {
    chars: Vec<char>,
}

impl CharacterFilter {
    /// Create a filter from a set of characters (deduplicated, sorted)
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    /// The characters this filter accepts, in sorted order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Check whether `token` completes `prefix` through one of the filter's
    /// characters
    ///
    /// The token must start with the prefix, and the first character after
    /// the prefix must be in the filter set. A token equal to the prefix has
    /// no next character and never passes.
    pub fn matches_completion(&self, prefix: &str, token: &str) -> bool {
        token
            .strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| self.chars.binary_search(&c).is_ok())
    }
}

impl FromIterator<char> for CharacterFilter {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Polymorphic prediction strategy
///
/// A predictor consumes the shared context history and produces one partial
/// `Prediction` per round. Predictors are stateless across rounds apart from
/// their configuration-derived parameters and backing store handle.
pub trait Predictor: Send + Sync {
    /// Configured name of this predictor instance
    fn name(&self) -> &str;

    /// Produce at most `max_partial_prediction_size` ranked suggestions for
    /// the current context, optionally restricted by `filter`
    fn predict(
        &self,
        max_partial_prediction_size: usize,
        filter: Option<&CharacterFilter>,
    ) -> Result<Prediction, PredictorError>;
}

/// Error types for a prediction round
#[derive(Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// The backing count store could not be reached or a query failed
    Store(StoreError),

    /// A computed probability fell outside [0,1]
    Probability(SuggestionError),
}

impl std::fmt::Display for PredictorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictorError::Store(e) => write!(f, "Count store error: {}", e),
            PredictorError::Probability(e) => write!(f, "Probability error: {}", e),
        }
    }
}

impl std::error::Error for PredictorError {}

impl From<StoreError> for PredictorError {
    fn from(error: StoreError) -> Self {
        PredictorError::Store(error)
    }
}

impl From<SuggestionError> for PredictorError {
    fn from(error: SuggestionError) -> Self {
        PredictorError::Probability(error)
    }
}

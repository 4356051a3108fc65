//! Prediction activation
//!
//! The activator drives a prediction round: it asks every registered
//! predictor for suggestions under a shared candidate budget and optional
//! deadline, then merges the per-predictor predictions through the selected
//! combination policy.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::combiner::{Combiner, MeritocracyCombiner};
use crate::registry::PredictorRegistry;
use crate::suggestion::{Prediction, SuggestionError};
use crate::{CharacterFilter, PredictorError};

/// Error types for prediction rounds
#[derive(Debug, Clone, PartialEq)]
pub enum ActivatorError {
    /// No combination policy has been selected yet
    CombinerNotSelected,

    /// The requested combination policy is not recognized
    UnknownCombiner(String),

    /// A predictor failed during the round
    Predictor(PredictorError),

    /// Combining produced an out-of-range probability
    Probability(SuggestionError),
}

impl std::fmt::Display for ActivatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivatorError::CombinerNotSelected => {
                write!(f, "No combination policy selected")
            }
            ActivatorError::UnknownCombiner(name) => {
                write!(f, "Unknown combination policy: {}", name)
            }
            ActivatorError::Predictor(e) => write!(f, "Predictor failed: {}", e),
            ActivatorError::Probability(e) => write!(f, "Combination failed: {}", e),
        }
    }
}

impl std::error::Error for ActivatorError {}

impl From<PredictorError> for ActivatorError {
    fn from(error: PredictorError) -> Self {
        ActivatorError::Predictor(error)
    }
}

impl From<SuggestionError> for ActivatorError {
    fn from(error: SuggestionError) -> Self {
        ActivatorError::Probability(error)
    }
}

/// Runs prediction rounds against a registry and combines the results
pub struct PredictorActivator {
    max_partial_prediction_size: usize,
    predict_time: Option<Duration>,
    combination_policy: Option<String>,
    combiner: Option<Box<dyn Combiner>>,
}

impl PredictorActivator {
    /// Create an activator with no combination policy selected
    pub fn new(max_partial_prediction_size: usize, predict_time: Option<Duration>) -> Self {
        Self {
            max_partial_prediction_size,
            predict_time,
            combination_policy: None,
            combiner: None,
        }
    }

    /// Per-predictor suggestion cap for a multiplier of one
    pub fn max_partial_prediction_size(&self) -> usize {
        self.max_partial_prediction_size
    }

    /// Soft per-predictor deadline, if any
    pub fn predict_time(&self) -> Option<Duration> {
        self.predict_time
    }

    /// The currently selected combination policy name, if any
    pub fn combination_policy(&self) -> Option<&str> {
        self.combination_policy.as_deref()
    }

    /// Select the combination policy by name (case-insensitive)
    ///
    /// An unknown name returns an error and leaves any previously selected
    /// policy in place.
    pub fn set_combination_policy(&mut self, policy: &str) -> Result<(), ActivatorError> {
        match policy.to_ascii_lowercase().as_str() {
            "meritocracy" => {
                self.combination_policy = Some(policy.to_string());
                self.combiner = Some(Box::new(MeritocracyCombiner));
                Ok(())
            }
            _ => Err(ActivatorError::UnknownCombiner(policy.to_string())),
        }
    }

    /// Run one prediction round
    ///
    /// Each predictor is queried for up to `max_partial_prediction_size *
    /// multiplier` suggestions (a zero multiplier counts as one). When a
    /// deadline is configured, predictors whose turn comes after it has
    /// passed are skipped with a warning rather than aborting the round. A
    /// predictor error aborts the round.
    pub fn predict(
        &self,
        registry: &PredictorRegistry,
        multiplier: usize,
        filter: Option<&CharacterFilter>,
    ) -> Result<Prediction, ActivatorError> {
        let combiner = self
            .combiner
            .as_ref()
            .ok_or(ActivatorError::CombinerNotSelected)?;

        let budget = self.max_partial_prediction_size * multiplier.max(1);
        let deadline = self.predict_time.map(|limit| Instant::now() + limit);

        let mut predictions = Vec::with_capacity(registry.len());
        for predictor in registry.predictors() {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    warn!(
                        predictor = predictor.name(),
                        "prediction deadline passed, skipping"
                    );
                    continue;
                }
            }
            let prediction = predictor.predict(budget, filter)?;
            debug!(
                predictor = predictor.name(),
                suggestions = prediction.len(),
                "predictor round complete"
            );
            predictions.push(prediction);
        }

        Ok(combiner.combine(&predictions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_policy() {
        let activator = PredictorActivator::new(10, None);
        assert!(activator.combination_policy().is_none());
    }

    #[test]
    fn selects_meritocracy_case_insensitively() {
        let mut activator = PredictorActivator::new(10, None);
        activator.set_combination_policy("Meritocracy").unwrap();
        assert_eq!(activator.combination_policy(), Some("Meritocracy"));
    }

    #[test]
    fn unknown_policy_keeps_previous_selection() {
        let mut activator = PredictorActivator::new(10, None);
        activator.set_combination_policy("meritocracy").unwrap();
        let result = activator.set_combination_policy("oligarchy");
        assert_eq!(
            result,
            Err(ActivatorError::UnknownCombiner("oligarchy".to_string()))
        );
        assert_eq!(activator.combination_policy(), Some("meritocracy"));
    }
}

//! Meritocracy merge policy
//!
//! The default combiner: every suggestion from every partial prediction is
//! pooled, duplicate words collapse by summing their probabilities, and the
//! pooled suggestions are re-inserted in rank order. The result depends only
//! on the multiset of suggestions, not on the order the partial predictions
//! arrive in.

use std::collections::BTreeMap;

use crate::suggestion::{Prediction, Suggestion, SuggestionError};

use super::Combiner;

/// Order-insensitive sum-of-probabilities merge
#[derive(Debug, Clone, Copy, Default)]
pub struct MeritocracyCombiner;

impl MeritocracyCombiner {
    /// Create the combiner
    pub fn new() -> Self {
        Self
    }
}

impl Combiner for MeritocracyCombiner {
    fn name(&self) -> &'static str {
        "meritocracy"
    }

    fn combine(&self, predictions: &[Prediction]) -> Result<Prediction, SuggestionError> {
        // BTreeMap keeps accumulation order deterministic
        let mut pooled: BTreeMap<String, f64> = BTreeMap::new();
        for prediction in predictions {
            for suggestion in prediction {
                *pooled.entry(suggestion.word().to_string()).or_insert(0.0) +=
                    suggestion.probability();
            }
        }

        let mut combined = Prediction::new();
        for (word, probability) in pooled {
            combined.add_suggestion(Suggestion::new(word, probability)?);
        }
        Ok(combined)
    }
}

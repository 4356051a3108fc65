//! Smoothed n-gram predictor implementation
//!
//! One prediction round runs in three stages:
//!
//! 1. Build a reverse-indexed token window of length `cardinality` from the
//!    context tracker; the last slot holds the word being typed (possibly
//!    empty at a word boundary).
//! 2. Gather completion candidates, longest context first, capped so the
//!    candidate count never exceeds the suggestion budget. A word already
//!    collected under a longer context is not re-added from a shorter one.
//! 3. Score each candidate by interpolating relative frequencies across all
//!    n-gram orders and insert the positive-probability ones into the
//!    prediction in rank order.

use std::sync::Arc;

use tracing::debug;

use crate::context::ContextTracker;
use crate::store::{CountStore, StoreCatalog};
use crate::suggestion::{Prediction, Suggestion};
use crate::{CharacterFilter, Predictor, PredictorError};

use super::config::NgramPredictorConfig;
use super::error::NgramError;

/// Statistical next-word predictor over an n-gram count store
pub struct SmoothedNgramPredictor {
    config: NgramPredictorConfig,
    tracker: Arc<dyn ContextTracker>,
    store: Arc<dyn CountStore>,
}

impl SmoothedNgramPredictor {
    /// Build a predictor from validated configuration, binding it to the
    /// shared context tracker and opening its count store
    ///
    /// This is the single finalize-configuration step: the store connection
    /// is only opened once every configuration facet is known, and a
    /// constructed predictor is always fully configured.
    pub fn new(
        config: NgramPredictorConfig,
        tracker: Arc<dyn ContextTracker>,
        catalog: &dyn StoreCatalog,
    ) -> Result<Self, NgramError> {
        config.validate()?;
        let store = catalog.open(&config.store_name, config.cardinality())?;
        debug!(
            predictor = %config.name,
            store = %config.store_name,
            cardinality = config.cardinality(),
            "smoothed n-gram predictor ready"
        );
        Ok(Self {
            config,
            tracker,
            store,
        })
    }

    /// The n-gram order this predictor models
    pub fn cardinality(&self) -> usize {
        self.config.cardinality()
    }

    /// The interpolation weights, unigram order first
    pub fn deltas(&self) -> &[f64] {
        &self.config.deltas
    }

    /// The predictor's configuration
    pub fn config(&self) -> &NgramPredictorConfig {
        &self.config
    }

    /// Reverse-indexed context window: slot `cardinality - 1 - i` holds the
    /// token `i` positions back from the cursor
    fn context_window(&self) -> Vec<String> {
        let cardinality = self.cardinality();
        let mut window = vec![String::new(); cardinality];
        for offset in 0..cardinality {
            window[cardinality - 1 - offset] = self.tracker.token(offset);
        }
        window
    }

    /// Collect completion candidates, longest context first, never exceeding
    /// `budget` candidates in total
    fn gather_candidates(
        &self,
        window: &[String],
        budget: usize,
        filter: Option<&CharacterFilter>,
    ) -> Result<Vec<String>, PredictorError> {
        let cardinality = self.cardinality();
        let mut candidates: Vec<String> = Vec::new();

        for context_len in (0..cardinality).rev() {
            if candidates.len() >= budget {
                break;
            }
            let prefix = &window[cardinality - 1 - context_len..];
            let remaining = budget - candidates.len();
            let rows = match filter {
                None => self.store.ngram_like_table(prefix, remaining)?,
                Some(filter) => {
                    self.store
                        .ngram_like_table_filtered(prefix, filter, remaining)?
                }
            };
            for row in rows {
                if candidates.len() >= budget {
                    break;
                }
                if !candidates.iter().any(|c| *c == row.token) {
                    candidates.push(row.token);
                }
            }
        }

        Ok(candidates)
    }

    /// Interpolated probability of the candidate occupying the window's last
    /// slot
    ///
    /// freq_k = count(trailing k+1 tokens) / count(k tokens of left context),
    /// with the store-wide unigram total as the k = 0 denominator. A zero
    /// numerator contributes zero without any division.
    fn interpolated_probability(
        &self,
        window: &[String],
        unigram_total: u64,
    ) -> Result<f64, PredictorError> {
        let cardinality = self.cardinality();
        let mut probability = 0.0;

        for k in 0..cardinality {
            let numerator = self.store.ngram_count(&window[cardinality - 1 - k..])?;
            let mut frequency = 0.0;
            if numerator > 0 {
                let denominator = if k == 0 {
                    unigram_total
                } else {
                    self.store
                        .ngram_count(&window[cardinality - 1 - k..cardinality - 1])?
                };
                if denominator > 0 {
                    frequency = numerator as f64 / denominator as f64;
                }
            }
            probability += self.config.deltas[k] * frequency;
        }

        Ok(probability)
    }
}

impl Predictor for SmoothedNgramPredictor {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn predict(
        &self,
        max_partial_prediction_size: usize,
        filter: Option<&CharacterFilter>,
    ) -> Result<Prediction, PredictorError> {
        let cardinality = self.cardinality();
        let mut window = self.context_window();

        let candidates = self.gather_candidates(&window, max_partial_prediction_size, filter)?;
        debug!(
            predictor = %self.config.name,
            candidates = candidates.len(),
            budget = max_partial_prediction_size,
            "candidate generation complete"
        );

        let unigram_total = self.store.unigram_counts_sum()?;
        let mut prediction = Prediction::new();
        for candidate in candidates {
            window[cardinality - 1] = candidate;
            let probability = self.interpolated_probability(&window, unigram_total)?;
            if probability > 0.0 {
                prediction
                    .add_suggestion(Suggestion::new(window[cardinality - 1].clone(), probability)?);
            }
        }

        Ok(prediction)
    }
}

//! Prediction combiner contract
//!
//! A combiner merges the partial predictions of every active predictor into
//! the single ranked prediction handed back to the caller. The contract is
//! deliberately small so alternative merge policies can be plugged into the
//! activator; `meritocracy` holds the default policy.

pub mod meritocracy;

use crate::suggestion::{Prediction, SuggestionError};

pub use meritocracy::MeritocracyCombiner;

/// Merge N partial predictions into one ranked prediction
pub trait Combiner: Send + Sync {
    /// Policy name this combiner is selected by
    fn name(&self) -> &'static str;

    /// Merge the partial predictions
    ///
    /// Merging may push a word's combined probability outside [0,1] when the
    /// configured smoothing weights misbehave; that surfaces as the
    /// suggestion range error rather than being clamped.
    fn combine(&self, predictions: &[Prediction]) -> Result<Prediction, SuggestionError>;
}

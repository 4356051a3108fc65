//! Ranked suggestion data structures
//!
//! A `Suggestion` pairs a word with a calibrated probability; a `Prediction`
//! is the rank-descending sequence of suggestions one prediction round
//! produces. Suggestions carry a total order (probability first, then word)
//! so that insertion into a prediction is deterministic even across
//! predictors that emit equal probabilities.

use serde::Serialize;

use crate::constants::{MAX_PROBABILITY, MIN_PROBABILITY};

/// Error types for suggestion construction and mutation
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionError {
    /// Probability outside [0,1] (or not a number)
    InvalidProbability { word: String, probability: f64 },
}

impl std::fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionError::InvalidProbability { word, probability } => {
                write!(
                    f,
                    "Invalid probability {} for word \"{}\" (must be in [{}, {}])",
                    probability, word, MIN_PROBABILITY, MAX_PROBABILITY
                )
            }
        }
    }
}

impl std::error::Error for SuggestionError {}

/// A single suggested word with its probability
///
/// Immutable after construction except through the validated
/// `set_probability` setter. Two suggestions are equal only when both the
/// word and the probability match exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    word: String,
    probability: f64,
}

impl Suggestion {
    /// Create a new suggestion, validating the probability range
    pub fn new(word: impl Into<String>, probability: f64) -> Result<Self, SuggestionError> {
        let word = word.into();
        let probability = Self::checked_probability(&word, probability)?;
        Ok(Self { word, probability })
    }

    /// The suggested word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The probability assigned to this suggestion
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Replace the probability, validating the range
    pub fn set_probability(&mut self, probability: f64) -> Result<(), SuggestionError> {
        self.probability = Self::checked_probability(&self.word, probability)?;
        Ok(())
    }

    fn checked_probability(word: &str, probability: f64) -> Result<f64, SuggestionError> {
        // contains() is false for NaN, so NaN is rejected here as well
        if !(MIN_PROBABILITY..=MAX_PROBABILITY).contains(&probability) {
            return Err(SuggestionError::InvalidProbability {
                word: word.to_string(),
                probability,
            });
        }
        // Normalize -0.0 so total_cmp-based Ord agrees with PartialEq
        Ok(if probability == 0.0 { 0.0 } else { probability })
    }
}

// Probabilities are validated finite, so exact f64 equality is an equivalence
impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word: {} - Probability: {}", self.word, self.probability)
    }
}

/// Ranked set of suggestions produced by one prediction round
///
/// Suggestions are kept in descending rank order (highest probability first,
/// ties broken by the suggestion total order). Word uniqueness is maintained
/// by the producers: the n-gram predictor deduplicates its candidates and
/// the combiner collapses duplicates across partial predictions.
///
/// Equality is order-sensitive: two predictions are equal only when they
/// hold the same suggestions at the same positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Prediction {
    suggestions: Vec<Suggestion>,
}

impl Prediction {
    /// Create an empty prediction
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of suggestions
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Whether the prediction holds no suggestions
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// The highest-ranked suggestion, if any
    pub fn first(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }

    /// Iterate suggestions in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.suggestions.iter()
    }

    /// Find the suggestion for a word, if present
    pub fn suggestion_for_token(&self, token: &str) -> Option<&Suggestion> {
        self.suggestions.iter().find(|s| s.word() == token)
    }

    /// Insert a suggestion at its rank position
    ///
    /// The suggestion lands immediately before the first existing entry it
    /// is not less than, keeping the sequence sorted in descending order.
    /// O(k) in the current length, which is bounded by the configured
    /// suggestion budget.
    pub fn add_suggestion(&mut self, suggestion: Suggestion) {
        let position = self
            .suggestions
            .iter()
            .position(|existing| suggestion >= *existing)
            .unwrap_or(self.suggestions.len());
        self.suggestions.insert(position, suggestion);
    }
}

impl Eq for Prediction {}

impl<'a> IntoIterator for &'a Prediction {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.iter()
    }
}

impl IntoIterator for Prediction {
    type Item = Suggestion;
    type IntoIter = std::vec::IntoIter<Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_probability_below_range() {
        let result = Suggestion::new("word", -0.1);
        assert!(matches!(
            result,
            Err(SuggestionError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn rejects_probability_above_range() {
        let result = Suggestion::new("word", 1.1);
        assert!(matches!(
            result,
            Err(SuggestionError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn rejects_nan_probability() {
        assert!(Suggestion::new("word", f64::NAN).is_err());
    }

    #[test]
    fn setter_validates_range() {
        let mut suggestion = Suggestion::new("word", 0.5).unwrap();
        assert!(suggestion.set_probability(1.5).is_err());
        assert_eq!(suggestion.probability(), 0.5);

        suggestion.set_probability(0.25).unwrap();
        assert_eq!(suggestion.probability(), 0.25);
    }

    #[test]
    fn negative_zero_equals_zero() {
        let a = Suggestion::new("w", -0.0).unwrap();
        let b = Suggestion::new("w", 0.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    }

    #[test]
    fn display_format() {
        let s = Suggestion::new("hello", 0.25).unwrap();
        assert_eq!(s.to_string(), "Word: hello - Probability: 0.25");
    }
}

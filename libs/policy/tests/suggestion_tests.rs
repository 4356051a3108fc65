use policy::suggestion::{Prediction, Suggestion, SuggestionError};

#[test]
fn test_suggestion_creation() {
    let suggestion = Suggestion::new("hello", 0.25).unwrap();
    assert_eq!(suggestion.word(), "hello");
    assert_eq!(suggestion.probability(), 0.25);
}

#[test]
fn test_probability_bounds() {
    assert!(Suggestion::new("w", 0.0).is_ok());
    assert!(Suggestion::new("w", 1.0).is_ok());
    assert!(matches!(
        Suggestion::new("w", -0.1),
        Err(SuggestionError::InvalidProbability { .. })
    ));
    assert!(matches!(
        Suggestion::new("w", 1.1),
        Err(SuggestionError::InvalidProbability { .. })
    ));
    assert!(matches!(
        Suggestion::new("w", f64::NAN),
        Err(SuggestionError::InvalidProbability { .. })
    ));
}

#[test]
fn test_set_probability_revalidates() {
    let mut suggestion = Suggestion::new("w", 0.5).unwrap();
    suggestion.set_probability(0.75).unwrap();
    assert_eq!(suggestion.probability(), 0.75);

    let result = suggestion.set_probability(2.0);
    assert!(result.is_err());
    // Failed update leaves the previous value in place
    assert_eq!(suggestion.probability(), 0.75);
}

#[test]
fn test_ordering_by_probability_then_word() {
    let low = Suggestion::new("zebra", 0.1).unwrap();
    let high = Suggestion::new("apple", 0.9).unwrap();
    assert!(high > low);

    let a = Suggestion::new("apple", 0.5).unwrap();
    let b = Suggestion::new("banana", 0.5).unwrap();
    assert!(b > a); // equal probability, later word ranks higher
}

#[test]
fn test_display_format() {
    let suggestion = Suggestion::new("hello", 0.25).unwrap();
    assert_eq!(suggestion.to_string(), "Word: hello - Probability: 0.25");
}

#[test]
fn test_prediction_keeps_descending_order() {
    let mut prediction = Prediction::new();
    prediction.add_suggestion(Suggestion::new("mid", 0.5).unwrap());
    prediction.add_suggestion(Suggestion::new("high", 0.9).unwrap());
    prediction.add_suggestion(Suggestion::new("low", 0.1).unwrap());

    let words: Vec<&str> = prediction.iter().map(|s| s.word()).collect();
    assert_eq!(words, vec!["high", "mid", "low"]);
    assert_eq!(prediction.first().unwrap().word(), "high");
}

#[test]
fn test_suggestion_for_token() {
    let mut prediction = Prediction::new();
    prediction.add_suggestion(Suggestion::new("hello", 0.6).unwrap());
    prediction.add_suggestion(Suggestion::new("world", 0.4).unwrap());

    assert_eq!(
        prediction.suggestion_for_token("world").unwrap().probability(),
        0.4
    );
    assert!(prediction.suggestion_for_token("missing").is_none());
}

#[test]
fn test_empty_prediction() {
    let prediction = Prediction::new();
    assert!(prediction.is_empty());
    assert_eq!(prediction.len(), 0);
    assert!(prediction.first().is_none());
}

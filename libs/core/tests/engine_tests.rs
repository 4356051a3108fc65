use std::sync::Arc;

use policy::activator::ActivatorError;
use policy::registry::RegistryError;
use policy::store::memory::{MemoryCountStore, MemoryStoreCatalog};
use typeahead::{Config, EngineError, PredictiveEngine};

const SAMPLE_CONFIG: &str = "
[PredictorRegistry]
predictors = ngram_bigram ngram_unigram

[ngram_bigram]
predictor_class = SmoothedNgramPredictor
dbfilename = corpus.db
deltas = 0.2 0.8
learn = false

[ngram_unigram]
predictor_class = SmoothedNgramPredictor
dbfilename = corpus.db
deltas = 0.5
learn = false

[PredictorActivator]
combination_policy = meritocracy
max_partial_prediction_size = 10

[ContextTracker]
sliding_window_size = 16
";

fn sample_catalog() -> Arc<MemoryStoreCatalog> {
    let mut store = MemoryCountStore::new();
    store.insert_ngram(&["moon"], 40);
    store.insert_ngram(&["bright"], 50);
    store.insert_ngram(&["filler"], 910);
    store.insert_ngram(&["moon", "bright"], 10);
    let mut catalog = MemoryStoreCatalog::new();
    catalog.register("corpus.db", Arc::new(store));
    Arc::new(catalog)
}

fn sample_engine() -> PredictiveEngine {
    let config = Arc::new(Config::from_ini_str(SAMPLE_CONFIG).unwrap());
    PredictiveEngine::new(config, sample_catalog()).unwrap()
}

#[test]
fn test_engine_construction() {
    let engine = sample_engine();
    assert_eq!(engine.predictor_count(), 2);
    assert_eq!(engine.tracker().capacity(), 16);
}

#[test]
fn test_end_to_end_prediction() {
    let mut engine = sample_engine();
    engine.push_token("moon");
    engine.set_current("bri");

    let prediction = engine.predict(1, None).unwrap();
    assert_eq!(prediction.len(), 1);

    // Bigram order contributes 0.8 * 10/40, unigram orders 0.2 * 50/1000
    // and 0.5 * 50/1000, summed across both predictors.
    let suggestion = prediction.first().unwrap();
    assert_eq!(suggestion.word(), "bright");
    assert!((suggestion.probability() - 0.235).abs() < 1e-12);
}

#[test]
fn test_clearing_context_resets_prediction() {
    let mut engine = sample_engine();
    engine.push_token("moon");
    engine.set_current("bri");
    engine.predict(1, None).unwrap();

    engine.clear_context();
    let prediction = engine.predict(1, None).unwrap();

    // Without context every unigram competes, ranked by corpus frequency
    let words: Vec<&str> = prediction.iter().map(|s| s.word()).collect();
    assert_eq!(words, vec!["filler", "bright", "moon"]);
}

#[test]
fn test_defaults_without_activator_section() {
    let config_text = "
[PredictorRegistry]
predictors = ngram_unigram

[ngram_unigram]
predictor_class = SmoothedNgramPredictor
dbfilename = corpus.db
deltas = 0.5
learn = false
";
    let config = Arc::new(Config::from_ini_str(config_text).unwrap());
    let mut engine = PredictiveEngine::new(config, sample_catalog()).unwrap();

    engine.set_current("bri");
    let prediction = engine.predict(1, None).unwrap();
    assert_eq!(prediction.first().unwrap().word(), "bright");
}

#[test]
fn test_missing_registry_section_fails_construction() {
    let config = Arc::new(Config::new());
    let result = PredictiveEngine::new(config, sample_catalog());
    assert!(matches!(
        result,
        Err(EngineError::Registry(RegistryError::Config(_)))
    ));
}

#[test]
fn test_unknown_combination_policy_fails_construction() {
    let mut config = Config::from_ini_str(SAMPLE_CONFIG).unwrap();
    config.set("PredictorActivator", "combination_policy", "oligarchy");

    let result = PredictiveEngine::new(Arc::new(config), sample_catalog());
    assert!(matches!(
        result,
        Err(EngineError::Round(ActivatorError::UnknownCombiner(_)))
    ));
}

#[test]
fn test_window_capacity_limits_history() {
    let engine = sample_engine();
    for i in 0..32 {
        engine.push_token(format!("token{}", i));
    }
    assert_eq!(engine.tracker().history_len(), 16);
}

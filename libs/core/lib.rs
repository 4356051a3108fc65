//! Core library module for the predictive text engine
//!
//! This library assembles the policy layer's predictors into a runnable
//! engine: a sliding-window context tracker feeds configured n-gram
//! predictors, and their merged suggestions come back as one ranked
//! prediction per round.

// Module declarations
pub mod engine;
pub mod tracker;

pub use engine::{EngineError, PredictiveEngine};
pub use tracker::SlidingWindowTracker;

// Policy types that appear in the engine API
pub use policy::config::Config;
pub use policy::suggestion::{Prediction, Suggestion};
pub use policy::CharacterFilter;

//! Predictive engine
//!
//! The engine wires the context tracker, the predictor registry and the
//! activator together behind a small session-facing API.

pub mod manager;

pub use manager::{EngineError, PredictiveEngine};

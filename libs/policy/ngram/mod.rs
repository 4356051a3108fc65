//! Smoothed n-gram predictor module
//!
//! This module implements the statistical n-gram predictor that turns a
//! token-count store into calibrated next-word probabilities via
//! interpolated (Jelinek-Mercer style) backoff smoothing:
//!
//! ```text
//! p(w | context) = Σ_{k=0}^{n-1} delta[k] · freq_k(w)
//! freq_k(w) = count(context[-k:], w) / count(context[-k:])
//! ```
//!
//! where the denominator for k = 0 is the store-wide unigram total. Each
//! order's relative-frequency estimate is weighted by its delta and summed,
//! so higher orders dominate where data exists and lower orders fill in for
//! sparse contexts.
//!
//! It provides:
//!
//! - config::NgramPredictorConfig: validated configuration (store name,
//!   deltas, learn mode); the predictor's n-gram order equals the number of
//!   deltas
//! - error::NgramError: construction and configuration error handling
//! - predictor::SmoothedNgramPredictor: the predictor itself

pub mod config;
pub mod error;
pub mod predictor;

pub use config::NgramPredictorConfig;
pub use error::NgramError;
pub use predictor::SmoothedNgramPredictor;

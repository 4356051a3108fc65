//! Count store contract
//!
//! The n-gram predictor reads token frequencies from a count store. The
//! store is an external collaborator reached through the `CountStore` trait;
//! `StoreCatalog` is the open-by-name boundary the registry uses to bind a
//! predictor to its configured store. An in-memory backend lives in
//! `memory` and backs the test suites.

pub mod memory;

use std::sync::Arc;

use crate::CharacterFilter;

pub use memory::{MemoryCountStore, MemoryStoreCatalog};

/// Error types for count store access
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store could not be opened
    Unavailable { name: String, reason: String },

    /// A query against an open store failed
    QueryFailed { reason: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable { name, reason } => {
                write!(f, "Count store \"{}\" unavailable: {}", name, reason)
            }
            StoreError::QueryFailed { reason } => {
                write!(f, "Count store query failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// One completion returned by a prefix query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRow {
    /// The completed word
    pub token: String,
    /// Corpus count of the n-gram ending in that word
    pub count: u64,
}

/// Read-only n-gram frequency queries
///
/// Prefix queries treat the final component of `prefix` as the partially
/// typed word: the preceding components must match exactly, and returned
/// rows complete the final component. Rows are ranked by descending count,
/// ties broken lexicographically, and capped at `limit`.
pub trait CountStore: Send + Sync {
    /// Exact corpus count of an n-gram, zero when unseen
    fn ngram_count(&self, ngram: &[String]) -> Result<u64, StoreError>;

    /// Total token occurrences across the corpus (the global unigram
    /// normalizer)
    fn unigram_counts_sum(&self) -> Result<u64, StoreError>;

    /// Distinct completions of `prefix` with nonzero count
    fn ngram_like_table(
        &self,
        prefix: &[String],
        limit: usize,
    ) -> Result<Vec<CompletionRow>, StoreError>;

    /// Like `ngram_like_table`, additionally restricted to completions whose
    /// next character after the typed prefix is in `filter`
    fn ngram_like_table_filtered(
        &self,
        prefix: &[String],
        filter: &CharacterFilter,
        limit: usize,
    ) -> Result<Vec<CompletionRow>, StoreError>;
}

/// Open count stores by configured name
///
/// A store may require its n-gram order up front (per-order tables), so the
/// predictor's cardinality is passed along with the name.
pub trait StoreCatalog: Send + Sync {
    /// Open the store registered under `name` for a predictor of the given
    /// n-gram order
    fn open(&self, name: &str, cardinality: usize) -> Result<Arc<dyn CountStore>, StoreError>;
}

//! In-memory count store
//!
//! A `BTreeMap`-backed n-gram table used by the test suites and as the
//! default catalog backend. Iteration order is deterministic, which keeps
//! completion ranking stable across runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::CharacterFilter;

use super::{CompletionRow, CountStore, StoreCatalog, StoreError};

/// In-memory n-gram count table
#[derive(Debug, Clone, Default)]
pub struct MemoryCountStore {
    ngrams: BTreeMap<Vec<String>, u64>,
}

impl MemoryCountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count of an n-gram
    pub fn insert_ngram(&mut self, ngram: &[&str], count: u64) {
        let key: Vec<String> = ngram.iter().map(|t| t.to_string()).collect();
        self.ngrams.insert(key, count);
    }

    /// Number of distinct n-grams held
    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    /// Whether the store holds no n-grams
    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }

    fn completions(
        &self,
        prefix: &[String],
        limit: usize,
        accept: impl Fn(&str) -> bool,
    ) -> Vec<CompletionRow> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let context = &prefix[..prefix.len() - 1];
        let partial = &prefix[prefix.len() - 1];

        let mut rows: Vec<CompletionRow> = self
            .ngrams
            .iter()
            .filter(|(ngram, count)| {
                **count > 0
                    && ngram.len() == prefix.len()
                    && ngram[..context.len()] == *context
                    && ngram[context.len()].starts_with(partial.as_str())
                    && accept(&ngram[context.len()])
            })
            .map(|(ngram, count)| CompletionRow {
                token: ngram[context.len()].clone(),
                count: *count,
            })
            .collect();

        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
        rows.truncate(limit);
        rows
    }
}

impl CountStore for MemoryCountStore {
    fn ngram_count(&self, ngram: &[String]) -> Result<u64, StoreError> {
        Ok(self.ngrams.get(ngram).copied().unwrap_or(0))
    }

    fn unigram_counts_sum(&self) -> Result<u64, StoreError> {
        Ok(self
            .ngrams
            .iter()
            .filter(|(ngram, _)| ngram.len() == 1)
            .map(|(_, count)| *count)
            .sum())
    }

    fn ngram_like_table(
        &self,
        prefix: &[String],
        limit: usize,
    ) -> Result<Vec<CompletionRow>, StoreError> {
        Ok(self.completions(prefix, limit, |_| true))
    }

    fn ngram_like_table_filtered(
        &self,
        prefix: &[String],
        filter: &CharacterFilter,
        limit: usize,
    ) -> Result<Vec<CompletionRow>, StoreError> {
        let Some(partial) = prefix.last().cloned() else {
            return Ok(Vec::new());
        };
        Ok(self.completions(prefix, limit, |token| {
            filter.matches_completion(&partial, token)
        }))
    }
}

/// Catalog of named in-memory stores
#[derive(Debug, Clone, Default)]
pub struct MemoryStoreCatalog {
    stores: BTreeMap<String, Arc<MemoryCountStore>>,
}

impl MemoryStoreCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a store under a name, replacing any previous registration
    pub fn register(&mut self, name: impl Into<String>, store: Arc<MemoryCountStore>) {
        self.stores.insert(name.into(), store);
    }
}

impl StoreCatalog for MemoryStoreCatalog {
    fn open(&self, name: &str, _cardinality: usize) -> Result<Arc<dyn CountStore>, StoreError> {
        self.stores
            .get(name)
            .cloned()
            .map(|store| store as Arc<dyn CountStore>)
            .ok_or_else(|| StoreError::Unavailable {
                name: name.to_string(),
                reason: "not registered in catalog".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> MemoryCountStore {
        let mut store = MemoryCountStore::new();
        store.insert_ngram(&["the"], 100);
        store.insert_ngram(&["there"], 40);
        store.insert_ngram(&["this"], 60);
        store.insert_ngram(&["world"], 30);
        store.insert_ngram(&["hello", "world"], 20);
        store.insert_ngram(&["hello", "there"], 10);
        store
    }

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn exact_counts() {
        let store = sample_store();
        assert_eq!(store.ngram_count(&tokens(&["the"])).unwrap(), 100);
        assert_eq!(store.ngram_count(&tokens(&["hello", "world"])).unwrap(), 20);
        assert_eq!(store.ngram_count(&tokens(&["unseen"])).unwrap(), 0);
    }

    #[test]
    fn unigram_sum_covers_only_unigrams() {
        let store = sample_store();
        assert_eq!(store.unigram_counts_sum().unwrap(), 230);
    }

    #[test]
    fn completions_ranked_by_count_then_token() {
        let store = sample_store();
        let rows = store.ngram_like_table(&tokens(&["th"]), 10).unwrap();
        let words: Vec<&str> = rows.iter().map(|r| r.token.as_str()).collect();
        assert_eq!(words, vec!["the", "this", "there"]);
    }

    #[test]
    fn completions_respect_limit() {
        let store = sample_store();
        let rows = store.ngram_like_table(&tokens(&["th"]), 2).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].token, "the");
    }

    #[test]
    fn bigram_completions_match_context_exactly() {
        let store = sample_store();
        let rows = store.ngram_like_table(&tokens(&["hello", ""]), 10).unwrap();
        let words: Vec<&str> = rows.iter().map(|r| r.token.as_str()).collect();
        assert_eq!(words, vec!["world", "there"]);
    }

    #[test]
    fn filtered_completions_need_next_character_in_set() {
        let store = sample_store();
        let filter = CharacterFilter::new(['i']);
        let rows = store
            .ngram_like_table_filtered(&tokens(&["th"]), &filter, 10)
            .unwrap();
        let words: Vec<&str> = rows.iter().map(|r| r.token.as_str()).collect();
        assert_eq!(words, vec!["this"]);
    }

    #[test]
    fn catalog_opens_registered_store_only() {
        let mut catalog = MemoryStoreCatalog::new();
        catalog.register("corpus.db", Arc::new(sample_store()));

        assert!(catalog.open("corpus.db", 2).is_ok());
        assert!(matches!(
            catalog.open("missing.db", 2),
            Err(StoreError::Unavailable { .. })
        ));
    }
}

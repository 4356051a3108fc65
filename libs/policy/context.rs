//! Context tracker contract
//!
//! The context tracker is an external collaborator: it owns the stream of
//! tokens the user has typed and exposes them relative to the cursor. The
//! policy layer only ever reads from it.

/// Read access to the recent token history, addressed backwards from the
/// cursor
///
/// Offset 0 is the token at the cursor: the word currently being entered,
/// which is empty immediately after a word boundary. Offset 1 is the last
/// completed token, offset 2 the one before it, and so on. Offsets past the
/// start of the tracked history yield the empty token, so that a predictor
/// built for a longer context than the history can still form its window.
pub trait ContextTracker: Send + Sync {
    /// Token `offset` positions back from the cursor
    fn token(&self, offset: usize) -> String;
}

//! Sliding-window context tracker
//!
//! Tracks the stream of tokens the user types and exposes it to the policy
//! layer through the `ContextTracker` trait. The tracker distinguishes the
//! word currently being entered from completed history, and keeps only a
//! bounded window of history so memory stays flat over long sessions.

use std::collections::VecDeque;
use std::sync::RwLock;

use policy::context::ContextTracker;

/// Default number of completed tokens kept in the window
pub const DEFAULT_WINDOW_CAPACITY: usize = 80;

struct WindowState {
    history: VecDeque<String>,
    current: String,
}

/// Bounded token history with an in-progress word at the cursor
pub struct SlidingWindowTracker {
    state: RwLock<WindowState>,
    capacity: usize,
}

impl SlidingWindowTracker {
    /// Create an empty tracker keeping at most `capacity` completed tokens;
    /// a zero capacity keeps the default
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_WINDOW_CAPACITY
        } else {
            capacity
        };
        Self {
            state: RwLock::new(WindowState {
                history: VecDeque::with_capacity(capacity),
                current: String::new(),
            }),
            capacity,
        }
    }

    /// Replace the word currently being entered
    pub fn set_current(&self, partial: impl Into<String>) {
        let mut state = self.state.write().unwrap();
        state.current = partial.into();
    }

    /// Complete the current word as `token` and move the cursor past it
    ///
    /// The oldest history entry is dropped once the window is full.
    pub fn push_token(&self, token: impl Into<String>) {
        let mut state = self.state.write().unwrap();
        if state.history.len() == self.capacity {
            state.history.pop_front();
        }
        state.history.push_back(token.into());
        state.current.clear();
    }

    /// Forget all history and the current word
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap();
        state.history.clear();
        state.current.clear();
    }

    /// Number of completed tokens currently tracked
    pub fn history_len(&self) -> usize {
        self.state.read().unwrap().history.len()
    }

    /// Maximum number of completed tokens kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl ContextTracker for SlidingWindowTracker {
    fn token(&self, offset: usize) -> String {
        let state = self.state.read().unwrap();
        if offset == 0 {
            return state.current.clone();
        }
        let history = &state.history;
        if offset > history.len() {
            return String::new();
        }
        history[history.len() - offset].clone()
    }
}

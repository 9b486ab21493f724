//! LRU Tracker Module
//!
//! Recency order of cache keys, used to pick an eviction victim when the
//! backing store is full.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Front = most recently used, back = least recently used.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `key` to the most-recent position, inserting it if unseen.
    pub fn touch(&mut self, key: &str) {
        self.forget(key);
        self.order.push_front(key.to_string());
    }

    /// Stops tracking `key`; unknown keys are ignored.
    pub fn forget(&mut self, key: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
        }
    }

    /// Pops the least recently used key.
    pub fn pop_victim(&mut self) -> Option<String> {
        self.order.pop_back()
    }
}

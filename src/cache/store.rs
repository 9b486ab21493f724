//! Memory Cache Module
//!
//! In-process byte-blob store with LRU eviction and optional TTL. This is the
//! default provider behind [`CacheBackend`](crate::cache::CacheBackend);
//! eviction is entirely its own business.

use std::collections::HashMap;

use crate::cache::{BackendStats, CacheEntry, LruTracker, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::CacheError;

// == Memory Cache ==
#[derive(Debug)]
pub struct MemoryCache {
    entries: HashMap<String, CacheEntry>,
    lru: LruTracker,
    /// Entries dropped to make room
    evictions: u64,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Lifetime applied to every entry, None = never expire
    ttl: Option<u64>,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `max_entries` blobs.
    ///
    /// A `ttl` of `Some(0)` is treated like `None`.
    pub fn new(max_entries: usize, ttl: Option<u64>) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            evictions: 0,
            max_entries: max_entries.max(1),
            ttl: ttl.filter(|secs| *secs > 0),
        }
    }

    // == Set ==
    /// Stores `value` under `key`, overwriting and refreshing any prior entry.
    ///
    /// Inserting a new key at capacity evicts the least recently used one.
    pub fn set(&mut self, key: String, value: Vec<u8>) -> Result<(), CacheError> {
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidKey(key));
        }
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::ValueTooLarge {
                key,
                size: value.len(),
            });
        }

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            if let Some(victim) = self.lru.pop_victim() {
                self.entries.remove(&victim);
                self.evictions += 1;
            }
        }

        self.entries
            .insert(key.clone(), CacheEntry::new(value, self.ttl));
        self.lru.touch(&key);

        Ok(())
    }

    // == Get ==
    /// Returns a copy of the blob under `key`; expired entries are dropped
    /// and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                self.lru.touch(key);
                Some(value)
            }
            Some(_) => {
                self.drop_key(key);
                None
            }
            None => None,
        }
    }

    // == Remove ==
    /// Removes `key`; returns whether anything was there.
    pub fn remove(&mut self, key: &str) -> bool {
        self.drop_key(key)
    }

    fn drop_key(&mut self, key: &str) -> bool {
        let existed = self.entries.remove(key).is_some();
        if existed {
            self.lru.forget(key);
        }
        existed
    }

    // == Stats ==
    pub fn stats(&self) -> BackendStats {
        BackendStats {
            evictions: self.evictions,
            total_entries: self.entries.len(),
        }
    }

    // == Cleanup Expired ==
    /// Drops every expired entry and returns how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.drop_key(key);
        }
        expired.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

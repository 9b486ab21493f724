//! Cache Statistics Module
//!
//! Lookup counters kept by the gateway, split by key class, combined with
//! the backing store's own occupancy figures.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::cache::ALL_PRODUCTS_KEY;

// == Key Class ==
/// Which of the two catalog key families a cache key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// The `AllProducts` list entry
    List,
    /// A single product keyed by id
    Item,
}

impl KeyClass {
    pub fn of(key: &str) -> Self {
        if key == ALL_PRODUCTS_KEY {
            KeyClass::List
        } else {
            KeyClass::Item
        }
    }
}

// == Backend Stats ==
/// What a backing store reports about itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BackendStats {
    /// Entries dropped by the provider's eviction policy
    pub evictions: u64,
    /// Current number of entries
    pub total_entries: usize,
}

// == Cache Counters ==
/// Lock-free hit/miss tallies shared by every request.
#[derive(Debug, Default)]
pub struct CacheCounters {
    list_hits: AtomicU64,
    list_misses: AtomicU64,
    item_hits: AtomicU64,
    item_misses: AtomicU64,
    decode_failures: AtomicU64,
}

impl CacheCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self, class: KeyClass) {
        match class {
            KeyClass::List => self.list_hits.fetch_add(1, Ordering::Relaxed),
            KeyClass::Item => self.item_hits.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn record_miss(&self, class: KeyClass) {
        match class {
            KeyClass::List => self.list_misses.fetch_add(1, Ordering::Relaxed),
            KeyClass::Item => self.item_misses.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// A blob was present but could not be decoded.
    pub fn record_decode_failure(&self) {
        self.decode_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, backend: BackendStats) -> CacheStats {
        CacheStats {
            list_hits: self.list_hits.load(Ordering::Relaxed),
            list_misses: self.list_misses.load(Ordering::Relaxed),
            item_hits: self.item_hits.load(Ordering::Relaxed),
            item_misses: self.item_misses.load(Ordering::Relaxed),
            decode_failures: self.decode_failures.load(Ordering::Relaxed),
            evictions: backend.evictions,
            total_entries: backend.total_entries,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of the product cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub list_hits: u64,
    pub list_misses: u64,
    pub item_hits: u64,
    pub item_misses: u64,
    pub decode_failures: u64,
    pub evictions: u64,
    pub total_entries: usize,
}

impl CacheStats {
    pub fn hits(&self) -> u64 {
        self.list_hits + self.item_hits
    }

    pub fn misses(&self) -> u64 {
        self.list_misses + self.item_misses
    }

    /// Returns hits / (hits + misses), or 0.0 if nothing has been looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses();
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_class() {
        assert_eq!(KeyClass::of("AllProducts"), KeyClass::List);
        assert_eq!(KeyClass::of("42"), KeyClass::Item);
    }

    #[test]
    fn test_counters_split_by_class() {
        let counters = CacheCounters::new();
        counters.record_hit(KeyClass::List);
        counters.record_miss(KeyClass::List);
        counters.record_hit(KeyClass::Item);
        counters.record_hit(KeyClass::Item);
        counters.record_decode_failure();

        let stats = counters.snapshot(BackendStats {
            evictions: 2,
            total_entries: 5,
        });
        assert_eq!(stats.list_hits, 1);
        assert_eq!(stats.list_misses, 1);
        assert_eq!(stats.item_hits, 2);
        assert_eq!(stats.item_misses, 0);
        assert_eq!(stats.decode_failures, 1);
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.total_entries, 5);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}

//! Cache Module
//!
//! The cache gateway used by the catalog service, the backing store
//! contract it talks to, and the default in-memory provider with TTL
//! expiration and LRU eviction.

mod backend;
mod entry;
mod gateway;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use backend::{CacheBackend, SharedMemoryCache};
pub use entry::CacheEntry;
pub use gateway::{product_key, CacheGateway, ALL_PRODUCTS_KEY};
pub use lru::LruTracker;
pub use stats::{BackendStats, CacheCounters, CacheStats, KeyClass};
pub use store::MemoryCache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

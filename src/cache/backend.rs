//! Cache Backend Module
//!
//! The key/value byte-store contract the gateway talks to, and its
//! implementation for the shared in-memory cache.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{BackendStats, MemoryCache};
use crate::error::CacheError;

/// Handle to the in-memory cache shared between requests and the cleanup task.
pub type SharedMemoryCache = Arc<RwLock<MemoryCache>>;

// == Cache Backend ==
/// Generic byte-blob store. No ordering across keys, no multi-key atomicity.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), CacheError>;

    /// Removes `key`, reporting whether it was present. Absent keys are not an error.
    async fn remove(&self, key: &str) -> Result<bool, CacheError>;

    /// Provider occupancy, if the provider reports any.
    async fn stats(&self) -> BackendStats {
        BackendStats::default()
    }
}

#[async_trait]
impl CacheBackend for RwLock<MemoryCache> {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.write().await.get(key))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), CacheError> {
        self.write().await.set(key.to_string(), value)
    }

    async fn remove(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.write().await.remove(key))
    }

    async fn stats(&self) -> BackendStats {
        self.read().await.stats()
    }
}

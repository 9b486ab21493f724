//! Cache Gateway Module
//!
//! Typed read-through / write-invalidate access to a [`CacheBackend`].
//!
//! # Keys
//! - `AllProducts` - the full product list
//! - `<id>` - a single product, keyed by its decimal id
//!
//! Every backend failure is absorbed here: failed reads and undecodable
//! blobs are misses, failed writes and removals are logged and skipped.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::{CacheBackend, CacheCounters, CacheStats, KeyClass};
use crate::catalog::Product;

/// Key holding the serialized full product list.
pub const ALL_PRODUCTS_KEY: &str = "AllProducts";

/// Key holding the serialized product with `id`.
pub fn product_key(id: i64) -> String {
    id.to_string()
}

// == Cache Gateway ==
pub struct CacheGateway {
    backend: Arc<dyn CacheBackend>,
    counters: CacheCounters,
}

impl CacheGateway {
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend,
            counters: CacheCounters::new(),
        }
    }

    // == List Entry ==
    pub async fn try_get_list(&self) -> Option<Vec<Product>> {
        self.read(ALL_PRODUCTS_KEY).await
    }

    /// Overwrites the cached list, empty lists included.
    pub async fn put_list(&self, products: &[Product]) {
        self.write(ALL_PRODUCTS_KEY, products).await;
    }

    pub async fn invalidate_list(&self) {
        self.invalidate(ALL_PRODUCTS_KEY).await;
    }

    // == Item Entries ==
    pub async fn try_get_one(&self, id: i64) -> Option<Product> {
        self.read(&product_key(id)).await
    }

    pub async fn put_one(&self, id: i64, product: &Product) {
        self.write(&product_key(id), product).await;
    }

    pub async fn invalidate_one(&self, id: i64) {
        self.invalidate(&product_key(id)).await;
    }

    // == Stats ==
    pub async fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.backend.stats().await)
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let class = KeyClass::of(key);
        let blob = match self.backend.get(key).await {
            Ok(Some(blob)) if !blob.is_empty() => blob,
            Ok(_) => {
                self.counters.record_miss(class);
                debug!(key, "cache miss");
                return None;
            }
            Err(err) => {
                self.counters.record_miss(class);
                warn!(key, error = %err, "cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_slice(&blob) {
            Ok(value) => {
                self.counters.record_hit(class);
                debug!(key, "cache hit");
                Some(value)
            }
            Err(err) => {
                self.counters.record_miss(class);
                self.counters.record_decode_failure();
                warn!(key, error = %err, "corrupt cache entry, treating as miss");
                self.invalidate(key).await;
                None
            }
        }
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let blob = match serde_json::to_vec(value) {
            Ok(blob) => blob,
            Err(err) => {
                warn!(key, error = %err, "could not serialize cache entry");
                return;
            }
        };

        if let Err(err) = self.backend.set(key, blob).await {
            warn!(key, error = %err, "cache write failed");
        }
    }

    async fn invalidate(&self, key: &str) {
        match self.backend.remove(key).await {
            Ok(removed) => debug!(key, removed, "cache entry invalidated"),
            Err(err) => warn!(key, error = %err, "cache invalidation failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use tokio::sync::RwLock;

    use crate::cache::{MemoryCache, SharedMemoryCache};
    use crate::error::CacheError;

    fn product(id: i64) -> Product {
        Product {
            id,
            name: None,
            price: Decimal::new(1999, 2),
            brand: Some("Acme".to_string()),
            image: Some("/img/widget.png".to_string()),
            category: None,
        }
    }

    fn setup() -> (CacheGateway, SharedMemoryCache) {
        let cache: SharedMemoryCache = Arc::new(RwLock::new(MemoryCache::new(100, None)));
        (CacheGateway::new(cache.clone()), cache)
    }

    struct DownBackend;

    #[async_trait]
    impl CacheBackend for DownBackend {
        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Err(CacheError::Unavailable("connection refused".to_string()))
        }

        async fn set(&self, _key: &str, _value: Vec<u8>) -> Result<(), CacheError> {
            Err(CacheError::Unavailable("connection refused".to_string()))
        }

        async fn remove(&self, _key: &str) -> Result<bool, CacheError> {
            Err(CacheError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_list_round_trip() {
        let (gateway, cache) = setup();
        assert_eq!(gateway.try_get_list().await, None);

        let products = vec![product(1), product(2)];
        gateway.put_list(&products).await;

        assert_eq!(gateway.try_get_list().await, Some(products));
        assert!(cache.write().await.get(ALL_PRODUCTS_KEY).is_some());
    }

    #[tokio::test]
    async fn test_empty_list_is_cached() {
        let (gateway, _) = setup();
        gateway.put_list(&[]).await;
        assert_eq!(gateway.try_get_list().await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_item_stored_under_id_key() {
        let (gateway, cache) = setup();
        gateway.put_one(7, &product(7)).await;

        assert!(cache.write().await.get("7").is_some());
        assert_eq!(gateway.try_get_one(7).await, Some(product(7)));
        assert_eq!(gateway.try_get_one(8).await, None);
    }

    #[tokio::test]
    async fn test_invalidation_is_idempotent() {
        let (gateway, cache) = setup();
        gateway.put_one(1, &product(1)).await;
        gateway.put_list(&[product(1)]).await;

        gateway.invalidate_one(1).await;
        gateway.invalidate_one(1).await;
        gateway.invalidate_list().await;
        gateway.invalidate_list().await;
        gateway.invalidate_one(404).await;

        assert!(cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_blob_is_miss() {
        let (gateway, cache) = setup();
        cache.write().await.set("1".to_string(), Vec::new()).unwrap();

        assert_eq!(gateway.try_get_one(1).await, None);
        assert_eq!(gateway.stats().await.decode_failures, 0);
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_miss_and_dropped() {
        let (gateway, cache) = setup();
        cache
            .write()
            .await
            .set(ALL_PRODUCTS_KEY.to_string(), b"{not json".to_vec())
            .unwrap();

        assert_eq!(gateway.try_get_list().await, None);
        assert_eq!(gateway.stats().await.decode_failures, 1);
        assert!(cache.write().await.get(ALL_PRODUCTS_KEY).is_none());
    }

    #[tokio::test]
    async fn test_stats_split_list_and_item_lookups() {
        let (gateway, _) = setup();
        gateway.try_get_list().await;
        gateway.put_list(&[product(1)]).await;
        gateway.try_get_list().await;
        gateway.try_get_one(1).await;

        let stats = gateway.stats().await;
        assert_eq!((stats.list_hits, stats.list_misses), (1, 1));
        assert_eq!((stats.item_hits, stats.item_misses), (0, 1));
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_unavailable_backend_degrades_to_miss() {
        let gateway = CacheGateway::new(Arc::new(DownBackend));

        gateway.put_list(&[product(1)]).await;
        gateway.put_one(1, &product(1)).await;
        gateway.invalidate_list().await;
        gateway.invalidate_one(1).await;

        assert_eq!(gateway.try_get_list().await, None);
        assert_eq!(gateway.try_get_one(1).await, None);

        let stats = gateway.stats().await;
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.list_misses, 1);
        assert_eq!(stats.item_misses, 1);
    }
}

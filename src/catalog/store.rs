//! Data Store Module
//!
//! The authoritative product store contract and its in-memory implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::Product;
use crate::error::StoreError;

// == Data Store ==
/// Persistent product storage keyed by integer id.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// All products, in ascending id order.
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// Stores `product` under a freshly assigned id and returns that id.
    async fn insert(&self, product: Product) -> Result<i64, StoreError>;

    /// Replaces the row for `product.id`.
    ///
    /// Fails with [`StoreError::ConcurrencyConflict`] when that row is no
    /// longer there to update.
    async fn update(&self, product: &Product) -> Result<(), StoreError>;

    /// Deletes the row for `id`; absent ids are a no-op.
    async fn remove(&self, id: i64) -> Result<(), StoreError>;

    async fn exists(&self, id: i64) -> Result<bool, StoreError>;
}

// == Memory Data Store ==
#[derive(Debug)]
struct Rows {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

/// Process-local [`DataStore`]. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct MemoryDataStore {
    rows: RwLock<Rows>,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryDataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataStore for MemoryDataStore {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.rows.read().await.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        Ok(self.rows.read().await.products.get(&id).cloned())
    }

    async fn insert(&self, mut product: Product) -> Result<i64, StoreError> {
        let mut rows = self.rows.write().await;
        let id = rows.next_id;
        rows.next_id += 1;
        product.id = id;
        rows.products.insert(id, product);
        Ok(id)
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        match rows.products.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(())
            }
            None => Err(StoreError::ConcurrencyConflict { id: product.id }),
        }
    }

    async fn remove(&self, id: i64) -> Result<(), StoreError> {
        self.rows.write().await.products.remove(&id);
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.rows.read().await.products.contains_key(&id))
    }
}

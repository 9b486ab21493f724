//! Catalog Service Module
//!
//! Each use-case as a fixed protocol over the data store and the cache
//! gateway. Reads go through the cache, writes invalidate it after the
//! store has accepted them. The service keeps no state of its own.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::cache::CacheGateway;
use crate::catalog::{DataStore, Product};
use crate::error::{CatalogError, Result, StoreError};

// == Catalog Service ==
pub struct CatalogService {
    store: Arc<dyn DataStore>,
    cache: CacheGateway,
}

impl CatalogService {
    pub fn new(store: Arc<dyn DataStore>, cache: CacheGateway) -> Self {
        Self { store, cache }
    }

    pub fn cache(&self) -> &CacheGateway {
        &self.cache
    }

    // == List ==
    /// Returns every product, from the cache when present.
    pub async fn list(&self) -> Result<Vec<Product>> {
        if let Some(products) = self.cache.try_get_list().await {
            return Ok(products);
        }

        let products = self.store.list_all().await.map_err(store_failure)?;
        self.cache.put_list(&products).await;
        Ok(products)
    }

    // == Get ==
    /// Returns one product, populating its cache entry on a miss.
    pub async fn get(&self, id: Option<i64>) -> Result<Product> {
        let id = id.ok_or_else(|| CatalogError::NotFound("no id given".to_string()))?;

        if let Some(product) = self.cache.try_get_one(id).await {
            return Ok(product);
        }

        match self.store.get_by_id(id).await.map_err(store_failure)? {
            Some(product) => {
                self.cache.put_one(id, &product).await;
                Ok(product)
            }
            None => Err(not_found(id)),
        }
    }

    // == Load Uncached ==
    /// Reads straight from the store without touching the cache, for
    /// edit forms and delete confirmations.
    pub async fn load_uncached(&self, id: i64) -> Result<Product> {
        self.store
            .get_by_id(id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| not_found(id))
    }

    // == Create ==
    /// Validates and stores a new product, returning it with its assigned id.
    ///
    /// The item entry is left to be filled by the next `get`.
    pub async fn create(&self, mut product: Product) -> Result<Product> {
        product.validate()?;

        let id = self
            .store
            .insert(product.clone())
            .await
            .map_err(store_failure)?;
        product.id = id;

        self.cache.invalidate_list().await;
        info!(id, "product created");
        Ok(product)
    }

    // == Update ==
    /// Replaces product `id` with `product`.
    ///
    /// A path/payload id mismatch is reported as not found. A concurrency
    /// conflict on a row that has since disappeared is also not found; on a
    /// row that still exists it is fatal.
    pub async fn update(&self, id: i64, product: Product) -> Result<Product> {
        if id != product.id {
            debug!(path_id = id, payload_id = product.id, "update id mismatch");
            return Err(not_found(id));
        }

        product.validate()?;

        match self.store.update(&product).await {
            Ok(()) => {
                self.cache.invalidate_list().await;
                self.cache.invalidate_one(id).await;
                info!(id, "product updated");
                Ok(product)
            }
            Err(StoreError::ConcurrencyConflict { .. }) => {
                if self.store.exists(id).await.map_err(store_failure)? {
                    error!(id, "unresolvable concurrency conflict");
                    Err(CatalogError::Fatal(format!(
                        "unresolved concurrency conflict on product {id}"
                    )))
                } else {
                    warn!(id, "product vanished during update");
                    Err(not_found(id))
                }
            }
            Err(err) => Err(store_failure(err)),
        }
    }

    // == Delete ==
    /// Removes product `id` if present. Deleting a missing id succeeds.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let existing = self.store.get_by_id(id).await.map_err(store_failure)?;
        if existing.is_some() {
            self.store.remove(id).await.map_err(store_failure)?;
        }

        self.cache.invalidate_list().await;
        self.cache.invalidate_one(id).await;
        info!(id, existed = existing.is_some(), "product deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> CatalogError {
    CatalogError::NotFound(id.to_string())
}

fn store_failure(err: StoreError) -> CatalogError {
    error!(error = %err, "data store operation failed");
    CatalogError::from(err)
}

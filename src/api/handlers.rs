//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint. They only translate
//! between HTTP and [`CatalogService`] calls.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tokio::sync::RwLock;

use crate::cache::{CacheGateway, MemoryCache, SharedMemoryCache};
use crate::catalog::{CatalogService, DataStore, MemoryDataStore, Product};
use crate::error::Result;
use crate::models::{DeleteResponse, HealthResponse, ProductRequest, StatsResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    /// Backing store of the product cache, swept by the cleanup task
    pub cache: SharedMemoryCache,
}

impl AppState {
    /// Wires a catalog service over `store`, caching through `cache`.
    pub fn new(store: Arc<dyn DataStore>, cache: SharedMemoryCache) -> Self {
        let gateway = CacheGateway::new(cache.clone());
        Self {
            catalog: Arc::new(CatalogService::new(store, gateway)),
            cache,
        }
    }

    /// Creates an AppState with an in-memory data store and a cache sized
    /// from the Config.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = MemoryCache::new(config.cache_max_entries, config.cache_ttl());
        Self::new(
            Arc::new(MemoryDataStore::new()),
            Arc::new(RwLock::new(cache)),
        )
    }
}

/// Handler for GET /products
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog.list().await?))
}

/// Handler for GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    Ok(Json(state.catalog.get(Some(id)).await?))
}

/// Handler for GET /products/:id/edit
///
/// Authoritative copy for edit and delete-confirmation screens.
pub async fn edit_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    Ok(Json(state.catalog.load_uncached(id).await?))
}

/// Handler for POST /products
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.catalog.create(req.into_new_product()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT /products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<Product>> {
    Ok(Json(state.catalog.update(id, req.into_update()).await?))
}

/// Handler for DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    state.catalog.delete(id).await?;
    Ok(Json(DeleteResponse::new(id)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.catalog.cache().stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::CatalogError;
    use rust_decimal::Decimal;

    fn request(id: Option<i64>, price: Decimal) -> ProductRequest {
        ProductRequest {
            id,
            name: Some("Widget".to_string()),
            price,
            brand: Some("Acme".to_string()),
            image: None,
            category: Some("tools".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let state = AppState::from_config(&Config::default());

        let (status, created) =
            create_product(State(state.clone()), Json(request(None, Decimal::new(1999, 2))))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let fetched = get_product(State(state), Path(created.id)).await.unwrap();
        assert_eq!(fetched.0, created.0);
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let state = AppState::from_config(&Config::default());

        let result = get_product(State(state), Path(999)).await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let state = AppState::from_config(&Config::default());
        let (_, created) =
            create_product(State(state.clone()), Json(request(None, Decimal::TEN)))
                .await
                .unwrap();

        let updated = update_product(
            State(state.clone()),
            Path(created.id),
            Json(request(Some(created.id), Decimal::from(20))),
        )
        .await
        .unwrap();
        assert_eq!(updated.price, Decimal::from(20));

        delete_product(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        let listed = list_products(State(state)).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::from_config(&Config::default());
        list_products(State(state.clone())).await.unwrap();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.misses, 1);
        assert_eq!(response.detail.total_entries, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}

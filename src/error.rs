//! Error types for the catalog service
//!
//! One enum per layer: the service taxonomy callers see, the data store
//! contract failures, and cache backing store failures (which never leave
//! the cache gateway).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

// == Field Error ==
/// A single failed constraint on a product field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn describe_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

// == Catalog Error Enum ==
/// Errors reported by the catalog service to the presentation layer.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Requested id has no corresponding record
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Entity failed its declared constraints
    #[error("Validation failed: {}", describe_fields(.0))]
    ValidationFailed(Vec<FieldError>),

    /// Stale write that could not be resolved to "not found"
    #[error("Concurrent modification of product {0}")]
    ConcurrencyConflict(i64),

    /// Storage failure not classified above
    #[error("Internal error: {0}")]
    Fatal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::ConcurrencyConflict(_) => StatusCode::CONFLICT,
            CatalogError::Fatal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            CatalogError::ValidationFailed(fields) => Json(json!({
                "error": self.to_string(),
                "fields": fields,
            })),
            _ => Json(json!({
                "error": self.to_string()
            })),
        };

        (status, body).into_response()
    }
}

// == Store Error Enum ==
/// Failures signalled by a [`DataStore`](crate::catalog::DataStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The row changed or vanished since it was read
    #[error("Concurrency conflict on product {id}")]
    ConcurrencyConflict { id: i64 },

    /// Storage could not be reached or refused the operation
    #[error("Data store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConcurrencyConflict { id } => CatalogError::ConcurrencyConflict(id),
            StoreError::Unavailable(msg) => CatalogError::Fatal(msg),
        }
    }
}

// == Cache Error Enum ==
/// Failures of the cache backing store. The gateway downgrades all of
/// these to misses or skipped writes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Invalid cache key: {0:?}")]
    InvalidKey(String),

    #[error("Value for key {key} is {size} bytes, over the limit")]
    ValueTooLarge { key: String, size: usize },

    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),
}

// == Result Type Alias ==
/// Convenience Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

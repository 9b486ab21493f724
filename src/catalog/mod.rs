//! Catalog Module
//!
//! The product entity, the authoritative data store, and the service that
//! runs each use-case against the store and the cache gateway.

mod product;
mod service;
mod store;


pub use product::{Product, MAX_BRAND_LENGTH, MAX_PRICE, MIN_BRAND_LENGTH, MIN_PRICE};
pub use service::CatalogService;
pub use store::{DataStore, MemoryDataStore};

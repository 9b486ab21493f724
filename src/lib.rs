//! Products Catalog - product browsing service with a read-through cache
//!
//! Lists, shows, creates, edits and deletes products. Reads are served from
//! a byte-blob cache when possible; every successful write drops the cache
//! entries it made stale.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use catalog::{CatalogService, DataStore, Product};
pub use config::Config;
pub use tasks::spawn_cleanup_task;

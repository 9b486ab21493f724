//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /products` - List all products
//! - `POST /products` - Create a product
//! - `GET /products/:id` - Fetch one product
//! - `PUT /products/:id` - Update a product
//! - `DELETE /products/:id` - Delete a product
//! - `GET /products/:id/edit` - Fetch one product, bypassing the cache
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

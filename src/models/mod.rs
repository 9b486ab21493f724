//! Request and Response models for the catalog API
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ProductRequest;
pub use responses::{DeleteResponse, HealthResponse, StatsResponse};

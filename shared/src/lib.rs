//! Shared types for the Posada booking client
//!
//! Data models, the API response envelope, and auth DTOs used by both
//! the HTTP client and the application layer. Everything here mirrors
//! the backend's JSON wire format (camelCase fields).

pub mod client;
pub mod models;
pub mod response;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};

//! Data models
//!
//! Shared between the HTTP client and the view-model layer.
//! Field names serialize as the backend's camelCase; all IDs are opaque
//! strings owned by the backend.

pub mod hotel;
pub mod reservation;
pub mod room;

// Re-exports
pub use hotel::*;
pub use reservation::*;
pub use room::*;

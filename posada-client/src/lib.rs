//! Posada Client - HTTP client for the booking API
//!
//! Provides typed network calls to the hotel booking backend: public
//! catalog reads, authenticated reservation operations, and the admin
//! CRUD surface. All endpoints answer with the shared
//! [`ApiResponse`](shared::ApiResponse) envelope.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, GENERIC_ERROR_MESSAGE};
pub use http::HttpClient;
pub use session::{Session, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginRequest, LoginResponse, SignupRequest};

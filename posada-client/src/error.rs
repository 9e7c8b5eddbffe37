//! Client error types

use thiserror::Error;

/// Fallback shown to the user when the server gives no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error inesperado. Reintente";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (transport, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response arrived but did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (HTTP 401)
    #[error("Authentication required")]
    Unauthorized,

    /// Server-reported business failure (`success: false` in the envelope)
    #[error("{message}")]
    Api { message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// User-facing notification text for this error
    ///
    /// Server-reported failures surface the server's own message;
    /// everything else collapses to the generic retry message.
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::Api { message } => message,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_keep_the_server_message() {
        let err = ClientError::Api {
            message: "La habitación no existe".to_string(),
        };
        assert_eq!(err.user_message(), "La habitación no existe");
    }

    #[test]
    fn other_errors_fall_back_to_the_generic_message() {
        let err = ClientError::InvalidResponse("missing data".to_string());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(ClientError::Unauthorized.user_message(), GENERIC_ERROR_MESSAGE);
    }
}

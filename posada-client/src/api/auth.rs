//! Auth API

use crate::{ClientError, ClientResult, HttpClient};
use shared::client::{LoginRequest, LoginResponse, SignupRequest};

impl HttpClient {
    /// Login with email and password
    ///
    /// Returns the bearer token and admin flag. The caller decides where
    /// to keep them (see [`SessionStore`](crate::SessionStore)).
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.post::<LoginResponse, _>("auth/login", &request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing login data".to_string()))
    }

    /// Register a new user account
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<()> {
        self.post::<serde_json::Value, _>("auth/signup", request)
            .await?;
        Ok(())
    }
}

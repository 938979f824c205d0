//! Authentication endpoints.

use approval_core::{RegisterRequest, User};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::users::UserEnvelope;
use crate::{ApiClient, ApiError, Method, Transport};

/// Answer of `/auth/login` and `/auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl<T: Transport> ApiClient<T> {
    /// Log in and keep the returned token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let data: AuthResponse = self
            .post("/auth/login", &LoginRequest { email, password })
            .await?;
        self.capture_token(&data);
        Ok(data)
    }

    /// Create an account and keep the returned token.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let data: AuthResponse = self.post("/auth/register", request).await?;
        self.capture_token(&data);
        Ok(data)
    }

    /// End the session.
    ///
    /// The local token is cleared whatever the server says; the server's
    /// outcome is still returned so callers can log it.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self
            .request::<JsonValue>(Method::Post, "/auth/logout", &[], None)
            .await;
        self.set_token(None);
        result.map(|_| ())
    }

    /// The user owning the current token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let data: UserEnvelope = self.get("/auth/me", &[]).await?;
        Ok(data.user)
    }

    fn capture_token(&self, data: &AuthResponse) {
        if let Some(token) = data.token.as_deref().filter(|t| !t.is_empty()) {
            self.set_token(Some(token));
        }
    }
}

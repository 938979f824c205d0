//! Error type shared by every API call.

use thiserror::Error;

/// Message used when a failed response carries no message of its own.
pub const GENERIC_ERROR: &str = "Erro na requisição";

/// Errors surfaced by [`ApiClient`](crate::ApiClient).
///
/// `Display` yields the human-readable message the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),

    /// The request body could not be serialised.
    #[error("Falha ao montar a requisição: {0}")]
    Encode(String),

    #[error("URL inválida: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Pick the server-supplied message out of an error body.
pub(crate) fn error_message(body: &serde_json::Value) -> String {
    ["error", "message"]
        .iter()
        .find_map(|field| body.get(field).and_then(|v| v.as_str()))
        .filter(|message| !message.is_empty())
        .unwrap_or(GENERIC_ERROR)
        .to_string()
}

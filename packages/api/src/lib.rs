//! REST client for the content approval backend.
//!
//! This crate contains the typed client used by every front end:
//! - Authentication (login, register, logout, current user)
//! - Content card management (list, get, create, update, approve, delete)
//! - Comments on cards
//! - User management (list, search, update, password change)
//!
//! The client is an explicit value built once at startup and injected where
//! needed. Its transport is pluggable so tests can script the backend.

mod auth;
mod cards;
mod client;
mod comments;
mod config;
mod error;
mod transport;
mod users;

#[cfg(any(test, feature = "test-util"))]
mod mock;

pub use auth::AuthResponse;
pub use cards::ReviewOutcome;
pub use client::{ApiClient, MessageResponse, Params};
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, GENERIC_ERROR};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};

#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTransport;

// Re-export core types for convenience
pub use approval_core::{
    CardId, CardQuery, CardStatus, Comment, ContentCard, ContentCardUpdate, ContentType,
    NewComment, NewContentCard, RegisterRequest, Role, User, UserId, UserQuery, UserUpdate,
};
pub use storage::{CredentialStore, StorageConfig};

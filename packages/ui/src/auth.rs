//! Session context shared by every page.

use api::{ApiClient, ApiError, ClientConfig, CredentialStore, Transport};
use approval_core::{Capabilities, User};
use dioxus::prelude::*;

/// The API client plus the signed-in user.
///
/// Provided once at the root with [`use_auth_provider`] and read anywhere
/// below it with [`use_auth`].
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub client: ApiClient,
    pub user: Signal<Option<User>>,
    /// True until the stored session has been checked.
    pub checking: Signal<bool>,
}

impl AuthContext {
    pub fn current_user(&self) -> Option<User> {
        self.user.read().clone()
    }

    /// Capabilities of the current user; nothing is allowed when signed out.
    pub fn capabilities(&self) -> Capabilities {
        self.user
            .read()
            .as_ref()
            .map(User::capabilities)
            .unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.user.read().as_ref().is_some_and(User::is_admin)
    }

    pub fn is_checking(&self) -> bool {
        *self.checking.read()
    }

    /// Sign in and publish the user.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let response = self.client.login(email, password).await?;
        let user = match response.user {
            Some(user) => user,
            None => self.client.current_user().await?,
        };
        tracing::info!(user = %user.id, role = %user.role, "Signed in");
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Sign out. The local session ends even when the server call fails.
    pub async fn logout(&self) {
        end_session(&self.client).await;
        self.set_user(None);
    }

    pub fn set_user(&self, user: Option<User>) {
        let mut signal = self.user;
        signal.set(user);
    }

    async fn restore_session(&self) {
        if let Some(user) = resume_session(&self.client).await {
            self.set_user(Some(user));
        }
        let mut checking = self.checking;
        checking.set(false);
    }
}

/// Resolve the stored token into a user.
///
/// A token the server rejects is dropped. Other failures keep it so the
/// next start can try again.
pub async fn resume_session<T: Transport>(client: &ApiClient<T>) -> Option<User> {
    if !client.is_authenticated() {
        return None;
    }
    match client.current_user().await {
        Ok(user) => {
            tracing::info!(user = %user.id, "Restored session");
            Some(user)
        }
        Err(e) if e.is_unauthorized() => {
            tracing::info!("Stored session expired");
            client.set_token(None);
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not restore session");
            None
        }
    }
}

/// Log out on the server. Failures are logged; the token is cleared either way.
pub async fn end_session<T: Transport>(client: &ApiClient<T>) {
    if let Err(e) = client.logout().await {
        tracing::warn!(error = %e, "Logout request failed");
    }
}

/// Client built from the environment, falling back to an in-memory token
/// store when the configured one is unusable.
pub fn default_client() -> ApiClient {
    let store = match CredentialStore::from_env() {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "Token storage unavailable, using memory");
            CredentialStore::memory()
        }
    };
    ApiClient::new(ClientConfig::from_env(), store)
}

/// Provide the session context and start restoring any stored session.
pub fn use_auth_provider(init: impl FnOnce() -> ApiClient) -> AuthContext {
    let auth = use_context_provider(|| AuthContext {
        client: init(),
        user: Signal::new(None),
        checking: Signal::new(true),
    });

    let restoring = auth.clone();
    use_hook(move || {
        spawn(async move {
            restoring.restore_session().await;
        })
    });

    auth
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

//! The API client: token handling, header building and the request pipeline.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use storage::CredentialStore;

use crate::error::error_message;
use crate::{ApiError, ClientConfig, HttpRequest, HttpTransport, Method, Transport};

/// Query parameters as `(name, value)` pairs.
pub type Params<'a> = &'a [(&'static str, String)];

struct Inner<T> {
    config: ClientConfig,
    transport: T,
    store: CredentialStore,
    token: RwLock<Option<String>>,
}

/// Single point of contact with the backend.
///
/// Built once at startup and shared by cloning; clones share the same token.
/// Every method issues exactly one request: no retries, timeouts or caching.
pub struct ApiClient<T: Transport = HttpTransport> {
    inner: Arc<Inner<T>>,
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Transport> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.config.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl ApiClient<HttpTransport> {
    /// Client talking HTTP through reqwest.
    pub fn new(config: ClientConfig, store: CredentialStore) -> Self {
        Self::with_transport(config, store, HttpTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    /// Client over an explicit transport.
    ///
    /// The stored token is read once, here.
    pub fn with_transport(config: ClientConfig, store: CredentialStore, transport: T) -> Self {
        let token = match store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session token");
                None
            }
        };

        tracing::debug!(
            base_url = %config.base_url,
            storage = store.kind_str(),
            authenticated = token.is_some(),
            "API client ready"
        );

        Self {
            inner: Arc::new(Inner {
                config,
                transport,
                store,
                token: RwLock::new(token),
            }),
        }
    }

    /// Store or clear the session token.
    ///
    /// Persistence failures are logged; the in-memory token is always updated.
    pub fn set_token(&self, token: Option<&str>) {
        let token = token.filter(|t| !t.is_empty());
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token.map(str::to_string);

        let persisted = match token {
            Some(token) => self.inner.store.save(token),
            None => self.inner.store.clear(),
        };
        if let Err(e) = persisted {
            tracing::warn!(error = %e, "Failed to persist session token");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        headers
    }

    /// Absolute URL for an endpoint plus query parameters.
    pub fn url(&self, endpoint: &str, params: Params<'_>) -> Result<String, ApiError> {
        let raw = format!("{}{}", self.inner.config.base_url, endpoint);
        let mut url =
            reqwest::Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url.into())
    }

    /// Issue one request and decode the JSON answer.
    ///
    /// The body is parsed whatever the status. A non-success status becomes
    /// [`ApiError::Status`] carrying the server's message. Every failure is
    /// logged before it is returned.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: Params<'_>,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let result = self
            .dispatch(method, endpoint, params, body)
            .await
            .and_then(|data| {
                serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
            });

        if let Err(error) = &result {
            tracing::error!(%method, endpoint, %error, "API request failed");
        }
        result
    }

    async fn dispatch(
        &self,
        method: Method,
        endpoint: &str,
        params: Params<'_>,
        body: Option<String>,
    ) -> Result<JsonValue, ApiError> {
        let request = HttpRequest {
            method,
            url: self.url(endpoint, params)?,
            headers: self.headers(),
            body,
        };

        let response = self.inner.transport.send(request).await?;

        let data = if response.body.trim().is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?
        };

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: error_message(&data),
            });
        }

        Ok(data)
    }

    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Params<'_>,
    ) -> Result<R, ApiError> {
        self.request(Method::Get, endpoint, params, None).await
    }

    pub(crate) async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(Method::Post, endpoint, &[], Some(encode(body)?))
            .await
    }

    pub(crate) async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.request(Method::Put, endpoint, &[], Some(encode(body)?))
            .await
    }

    pub(crate) async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(Method::Delete, endpoint, &[], None).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Generic acknowledgement body.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

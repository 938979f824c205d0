//! Client configuration.

/// Default backend URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Environment variable overriding the backend URL.
pub const BASE_URL_ENV: &str = "APPROVAL_API_URL";

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin plus path prefix, without a trailing slash.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build a config from the environment.
    ///
    /// Native builds read `APPROVAL_API_URL` at runtime. The web build has no
    /// process environment, so the variable is captured at compile time.
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        let configured = option_env!("APPROVAL_API_URL").map(str::to_string);

        #[cfg(not(target_arch = "wasm32"))]
        let configured = std::env::var(BASE_URL_ENV).ok();

        match configured.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }
}

//! Durable storage for the session token.
//!
//! Goal:
//! - Browser `localStorage` in the web build
//! - A file in the platform data directory for native builds
//! - In-memory storage for tests
//!
//! The token lives under a single key (`token` by default). Absence of the
//! key means the user is not logged in.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Key the session token is stored under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Browser,
    Filesystem,
    Memory,
}

impl StorageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Browser => "browser",
            StorageKind::Filesystem => "filesystem",
            StorageKind::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone)]
pub enum StorageBackendConfig {
    Browser,
    Filesystem { root: PathBuf },
    Memory,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackendConfig,
    /// Key (or file name) the token is stored under.
    pub key: String,
}

impl StorageConfig {
    pub fn memory() -> Self {
        Self {
            backend: StorageBackendConfig::Memory,
            key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }

    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackendConfig::Filesystem { root: root.into() },
            key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }

    pub fn browser() -> Self {
        Self {
            backend: StorageBackendConfig::Browser,
            key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Build a config from environment variables.
    ///
    /// Selection rules:
    /// - If `TOKEN_STORAGE_BACKEND` is set: use it (`browser`, `filesystem`, `memory`)
    /// - Otherwise: `browser` on wasm32, filesystem everywhere else
    ///
    /// Filesystem env vars:
    /// - `TOKEN_STORAGE_DIR` (default: the platform data directory, or `./data`)
    pub fn from_env() -> Result<Self, StorageError> {
        let backend = std::env::var("TOKEN_STORAGE_BACKEND")
            .ok()
            .and_then(non_empty);

        let cfg = match backend.as_deref() {
            Some("browser") => Self::browser(),
            Some("filesystem") | Some("fs") => Self::filesystem(filesystem_root()),
            Some("memory") | Some("mem") => Self::memory(),
            Some(other) => {
                return Err(StorageError::InvalidConfig(format!(
                    "unsupported TOKEN_STORAGE_BACKEND={other} (expected browser|filesystem|memory)"
                )));
            }
            None if cfg!(target_arch = "wasm32") => Self::browser(),
            None => Self::filesystem(filesystem_root()),
        };

        Ok(cfg)
    }
}

/// Where a backend actually keeps the value.
trait TokenBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Default)]
struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.values
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl TokenBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values()?.remove(key);
        Ok(())
    }
}

struct FileBackend {
    root: PathBuf,
}

impl TokenBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.root.join(key)) {
            Ok(contents) => Ok(non_empty(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.root.join(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.root.join(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct BrowserBackend;

#[cfg(target_arch = "wasm32")]
impl BrowserBackend {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".to_string()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenBackend for BrowserBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable(format!("failed reading {key}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable(format!("failed writing {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Unavailable(format!("failed removing {key}")))
    }
}

/// The single durable slot holding the session token.
#[derive(Clone)]
pub struct CredentialStore {
    kind: StorageKind,
    backend: Arc<dyn TokenBackend>,
    key: String,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .finish()
    }
}

impl CredentialStore {
    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    pub fn kind_str(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn new(cfg: StorageConfig) -> Result<Self, StorageError> {
        if cfg.key.trim().is_empty() {
            return Err(StorageError::InvalidConfig(
                "storage key must not be empty".to_string(),
            ));
        }

        let (kind, backend): (StorageKind, Arc<dyn TokenBackend>) = match cfg.backend {
            StorageBackendConfig::Browser => (StorageKind::Browser, browser_backend()?),
            StorageBackendConfig::Filesystem { root } => {
                (StorageKind::Filesystem, Arc::new(FileBackend { root }))
            }
            StorageBackendConfig::Memory => {
                (StorageKind::Memory, Arc::new(MemoryBackend::default()))
            }
        };

        tracing::debug!(backend = kind.as_str(), key = %cfg.key, "Credential store ready");

        Ok(Self {
            kind,
            backend,
            key: cfg.key,
        })
    }

    pub fn from_env() -> Result<Self, StorageError> {
        Self::new(StorageConfig::from_env()?)
    }

    /// In-memory store, for tests and previews.
    pub fn memory() -> Self {
        Self {
            kind: StorageKind::Memory,
            backend: Arc::new(MemoryBackend::default()),
            key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }

    /// Read the stored token, if any.
    pub fn load(&self) -> Result<Option<String>, StorageError> {
        self.backend.read(&self.key)
    }

    pub fn save(&self, token: &str) -> Result<(), StorageError> {
        self.backend.write(&self.key, token)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.backend.remove(&self.key)
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_backend() -> Result<Arc<dyn TokenBackend>, StorageError> {
    Ok(Arc::new(BrowserBackend))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_backend() -> Result<Arc<dyn TokenBackend>, StorageError> {
    Err(StorageError::InvalidConfig(
        "browser storage is only available in the web build".to_string(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn filesystem_root() -> PathBuf {
    std::env::var("TOKEN_STORAGE_DIR")
        .ok()
        .and_then(non_empty)
        .map(PathBuf::from)
        .or_else(|| {
            directories::ProjectDirs::from("br", "approval", "content-approval")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from("./data"))
}

#[cfg(target_arch = "wasm32")]
fn filesystem_root() -> PathBuf {
    PathBuf::from("./data")
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn memory_round_trip() -> Result<(), StorageError> {
        let store = CredentialStore::new(StorageConfig::memory())?;
        assert_eq!(store.load()?, None);

        store.save("abc")?;
        assert_eq!(store.load()?.as_deref(), Some("abc"));

        store.clear()?;
        assert_eq!(store.load()?, None);
        Ok(())
    }

    #[test]
    fn filesystem_survives_a_new_store() -> Result<(), StorageError> {
        let dir = tempfile::tempdir()?;
        let cfg = StorageConfig::filesystem(dir.path().join("session"));

        CredentialStore::new(cfg.clone())?.save("jwt-1")?;

        let reopened = CredentialStore::new(cfg)?;
        assert_eq!(reopened.kind(), StorageKind::Filesystem);
        assert_eq!(reopened.load()?.as_deref(), Some("jwt-1"));

        reopened.clear()?;
        reopened.clear()?;
        assert_eq!(reopened.load()?, None);
        Ok(())
    }

    #[test]
    fn clones_share_the_slot() -> Result<(), StorageError> {
        let store = CredentialStore::memory();
        let other = store.clone();
        store.save("shared")?;
        assert_eq!(other.load()?.as_deref(), Some("shared"));
        Ok(())
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = CredentialStore::new(StorageConfig::memory().with_key(" ")).unwrap_err();
        assert!(matches!(err, StorageError::InvalidConfig(_)));
    }

    #[test]
    fn browser_backend_is_web_only() {
        let err = CredentialStore::new(StorageConfig::browser()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidConfig(_)));
    }
}

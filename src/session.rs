//! Session Store
//!
//! Owns the bearer credential. The slot itself sits behind [`TokenStorage`]
//! so the browser's localStorage can be swapped for memory in tests.
//! Subscribers are told when the credential appears, is cleared, or expires.

#[cfg(test)]
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use gloo_storage::{LocalStorage, Storage};

/// Opaque bearer token
pub type Credential = String;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable key-value slot for the credential
pub trait TokenStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, raw string values
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

/// Process-local storage for host tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        match self.slots.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
impl TokenStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots().remove(key);
        Ok(())
    }
}

/// Session lifecycle notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    /// The server rejected the credential (HTTP 401)
    Expired,
}

type Listener = Arc<dyn Fn(SessionEvent) + Send + Sync>;

struct SessionInner {
    key: String,
    storage: Box<dyn TokenStorage>,
    listeners: Mutex<Vec<Listener>>,
}

/// Injectable handle to the credential slot; clones share state
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("key", &self.inner.key)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(storage: impl TokenStorage + 'static, key: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                key: key.into(),
                storage: Box::new(storage),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default(), crate::config::DEFAULT_TOKEN_KEY)
    }

    /// Current credential; unreadable storage and empty values count as absent
    pub fn get(&self) -> Option<Credential> {
        match self.inner.storage.load(&self.inner.key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read credential");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    /// Store a credential. Empty tokens are rejected.
    pub fn set(&self, token: Credential) -> bool {
        if token.is_empty() {
            tracing::warn!("refusing to store empty credential");
            return false;
        }
        if let Err(e) = self.inner.storage.store(&self.inner.key, &token) {
            tracing::error!(error = %e, "failed to persist credential");
            return false;
        }
        tracing::info!("session started");
        self.emit(SessionEvent::SignedIn);
        true
    }

    /// Drop the credential (explicit logout)
    pub fn clear(&self) {
        self.remove_token();
        tracing::info!("session cleared");
        self.emit(SessionEvent::SignedOut);
    }

    /// Drop the credential after the server rejected it
    pub fn expire(&self) {
        self.remove_token();
        tracing::warn!("session expired");
        self.emit(SessionEvent::Expired);
    }

    pub fn subscribe(&self, listener: impl Fn(SessionEvent) + Send + Sync + 'static) {
        self.listeners().push(Arc::new(listener));
    }

    fn remove_token(&self) {
        if let Err(e) = self.inner.storage.remove(&self.inner.key) {
            tracing::error!(error = %e, "failed to remove credential");
        }
    }

    fn emit(&self, event: SessionEvent) {
        // Listeners may call back into the session.
        let listeners: Vec<Listener> = self.listeners().clone();
        for listener in listeners {
            listener(event);
        }
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<Listener>> {
        match self.inner.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

//! Credential record and the storage port it persists through.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Persisted credential record.
///
/// Written as a whole on login/refresh success and deleted as a whole on
/// logout, so a concurrent reader never observes a partially written record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user_id: String,
    pub need_phone_verification: bool,
}

impl Credential {
    /// Bearer-authorization header value for this credential.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Storage port for the persisted credential.
///
/// One interface, one concrete implementation per platform, selected at
/// startup. `save` must persist all fields as a single record.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Option<Credential>, StorageError>;
    fn save(&self, credential: &Credential) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;

    /// CSRF token paired with the session cookie, when the platform has one.
    fn csrf_token(&self) -> Option<String> {
        None
    }
}

/// Shared handle to the platform's credential store.
pub type SharedStore = Arc<dyn CredentialStore>;

/// Build the bearer-authorization header from the currently stored access
/// token. Returns `None` when no credential exists; storage failures are
/// logged and degrade to `None`.
pub fn auth_header(store: &dyn CredentialStore) -> Option<String> {
    match store.load() {
        Ok(Some(credential)) => Some(credential.bearer()),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("credential storage read failed: {e}");
            None
        }
    }
}

/// In-memory credential store, used by tests and as an in-process fallback
/// when no platform storage is configured.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Option<Credential>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Option<Credential>, StorageError> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| StorageError::Unavailable("credential lock poisoned".into()))
    }

    fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StorageError::Unavailable("credential lock poisoned".into()))?;
        *guard = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| StorageError::Unavailable("credential lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(user_id: &str) -> Credential {
        Credential {
            access_token: "a1".to_string(),
            refresh_token: Some("r1".to_string()),
            user_id: user_id.to_string(),
            need_phone_verification: false,
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        store.save(&credential("42")).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, Some(credential("42")));
    }

    #[test]
    fn test_clear_removes_every_field() {
        let store = MemoryStore::new();
        store.save(&credential("42")).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
        assert_eq!(auth_header(&store), None);
    }

    #[test]
    fn test_auth_header_from_stored_token() {
        let store = MemoryStore::new();
        assert_eq!(auth_header(&store), None);

        store.save(&credential("42")).unwrap();
        assert_eq!(auth_header(&store), Some("Bearer a1".to_string()));
    }
}

//! Credential persistence in browser local storage.
//!
//! The whole record lives under a single key, so a save is one `setItem`
//! call and a reader never observes a partial credential.

use wasm_bindgen::JsCast;
use waypoint_api::{Credential, CredentialStore, StorageError};

const STORAGE_KEY: &str = "waypoint_credential";
const CSRF_COOKIE: &str = "XSRF-TOKEN";

/// Browser local storage implementation of the storage port.
pub struct BrowserStore;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable("localStorage not available".to_string()))
}

impl CredentialStore for BrowserStore {
    fn load(&self) -> Result<Option<Credential>, StorageError> {
        let storage = local_storage()?;
        let raw = storage
            .get_item(STORAGE_KEY)
            .map_err(|_| StorageError::Unavailable("localStorage read rejected".to_string()))?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        let storage = local_storage()?;
        let raw = serde_json::to_string(credential)?;
        storage
            .set_item(STORAGE_KEY, &raw)
            .map_err(|_| StorageError::Unavailable("localStorage write rejected".to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = local_storage()?;
        storage
            .remove_item(STORAGE_KEY)
            .map_err(|_| StorageError::Unavailable("localStorage remove rejected".to_string()))
    }

    /// CSRF token from the `XSRF-TOKEN` cookie the backend pairs with the
    /// session cookie.
    fn csrf_token(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = document.cookie().ok()?;
        cookies
            .split(';')
            .map(str::trim)
            .find_map(|cookie| cookie.strip_prefix(CSRF_COOKIE)?.strip_prefix('='))
            .map(str::to_string)
    }
}

//! Credential persistence on device.
//!
//! A JSON file under the platform config directory stands in for the mobile
//! secure keystore. Saves go through a temp-file rename, so a concurrent
//! reader sees the old record or the new one, never a torn write.

use std::fs;
use std::path::PathBuf;

use waypoint_api::{Credential, CredentialStore, StorageError};

/// On-device file implementation of the storage port.
pub struct DeviceStore {
    path: PathBuf,
}

impl DeviceStore {
    pub fn new() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("com", "Waypoint", "waypoint")
            .ok_or_else(|| StorageError::Unavailable("no home directory".to_string()))?;
        let dir = dirs.config_dir().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join("credential.json"),
        })
    }

    #[cfg(test)]
    fn at_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for DeviceStore {
    fn load(&self) -> Result<Option<Credential>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        let raw = serde_json::to_string(credential)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> DeviceStore {
        let path = std::env::temp_dir().join(format!("waypoint-test-{}.json", uuid::Uuid::new_v4()));
        DeviceStore::at_path(path)
    }

    fn credential() -> Credential {
        Credential {
            access_token: "a1".to_string(),
            refresh_token: Some("r1".to_string()),
            user_id: "42".to_string(),
            need_phone_verification: false,
        }
    }

    #[test]
    fn test_round_trip() {
        let store = temp_store();
        assert!(store.load().unwrap().is_none());

        store.save(&credential()).unwrap();
        assert_eq!(store.load().unwrap(), Some(credential()));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_when_nothing_stored_is_ok() {
        let store = temp_store();
        store.clear().unwrap();
    }
}

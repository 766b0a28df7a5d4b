/**
 * Credential Store
 *
 * Durable key-value persistence for the current session: the session token
 * and the cached user object. Values live in one JSON file under the
 * platform data directory and survive app restarts; `clear` removes both on
 * logout.
 *
 * The store is accessed from a single foreground flow; there is no
 * cross-process locking.
 */

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::shared::user::UserProfile;

/// Key under which the session token is stored
const TOKEN_KEY: &str = "auth_token";

/// Key under which the serialized user is stored
const USER_KEY: &str = "auth_user";

/// Errors from the credential store
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    #[error("no platform data directory available")]
    NoDataDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// File-backed key-value store for session credentials
pub struct CredentialStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl CredentialStore {
    /// Open the store at its default platform location
    pub fn open() -> Result<Self, CredentialStoreError> {
        let dir = dirs::data_dir()
            .ok_or(CredentialStoreError::NoDataDir)?
            .join("motalk");
        Self::with_path(dir.join("credentials.json"))
    }

    /// Open a store at an explicit path
    pub fn with_path(path: PathBuf) -> Result<Self, CredentialStoreError> {
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a value and persist
    pub fn set(&mut self, key: &str, value: String) -> Result<(), CredentialStoreError> {
        self.values.insert(key.to_string(), value);
        self.persist()
    }

    /// Remove a value and persist
    pub fn remove(&mut self, key: &str) -> Result<(), CredentialStoreError> {
        self.values.remove(key);
        self.persist()
    }

    /// Persist the token and user of a fresh session
    pub fn store_session(
        &mut self,
        token: &str,
        user: &UserProfile,
    ) -> Result<(), CredentialStoreError> {
        self.values
            .insert(TOKEN_KEY.to_string(), token.to_string());
        self.values
            .insert(USER_KEY.to_string(), serde_json::to_string(user)?);
        self.persist()
    }

    /// The persisted session token, if any
    pub fn token(&self) -> Option<String> {
        self.values.get(TOKEN_KEY).cloned()
    }

    /// The persisted user, if present and decodable
    pub fn user(&self) -> Option<UserProfile> {
        self.values
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    /// Drop both session keys (logout / expiry)
    pub fn clear(&mut self) -> Result<(), CredentialStoreError> {
        self.values.remove(TOKEN_KEY);
        self.values.remove(USER_KEY);
        self.persist()
    }

    fn persist(&self) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

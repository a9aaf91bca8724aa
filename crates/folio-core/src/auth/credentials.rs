use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;

use super::store::KeyValueStore;
use crate::models::User;

/// Storage key for the raw bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key for the JSON-serialized user record
pub const USER_KEY: &str = "user";

/// Snapshot of what is persisted. The two halves are read independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredCredentials {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// The persisted `token` / `user` pair.
/// Clone is cheap - the backend is shared.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Read both keys. An unreadable user record reads as absent.
    pub fn get(&self) -> Result<StoredCredentials> {
        let token = self.token()?;
        let user = match self.backend.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Stored user record is unreadable, ignoring it");
                    None
                }
            },
            None => None,
        };
        Ok(StoredCredentials { token, user })
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.backend.get(TOKEN_KEY).context("Failed to read stored token")
    }

    /// Write the token, or delete it when `None`.
    pub fn set_token(&self, token: Option<&str>) -> Result<()> {
        let result = match token {
            Some(token) => self.backend.set(TOKEN_KEY, token),
            None => self.backend.remove(TOKEN_KEY),
        };
        result.context("Failed to update stored token")
    }

    /// Write the user record, or delete it when `None`.
    pub fn set_user(&self, user: Option<&User>) -> Result<()> {
        let result = match user {
            Some(user) => {
                let json = serde_json::to_string(user)?;
                self.backend.set(USER_KEY, &json)
            }
            None => self.backend.remove(USER_KEY),
        };
        result.context("Failed to update stored user")
    }

    pub fn clear(&self) -> Result<()> {
        let token = self.set_token(None);
        let user = self.set_user(None);
        token.and(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStore;

    fn user() -> User {
        serde_json::from_str(r#"{"id":"u1","name":"Ada","email":"a@b.com"}"#).unwrap()
    }

    #[test]
    fn test_empty_store_reads_nothing() {
        let store = CredentialStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(store.get().unwrap(), StoredCredentials::default());
    }

    #[test]
    fn test_set_and_get() {
        let store = CredentialStore::new(Arc::new(MemoryStore::new()));
        store.set_token(Some("abc")).unwrap();
        store.set_user(Some(&user())).unwrap();

        let stored = store.get().unwrap();
        assert_eq!(stored.token.as_deref(), Some("abc"));
        assert_eq!(stored.user, Some(user()));
    }

    #[test]
    fn test_keys_are_independent() {
        let store = CredentialStore::new(Arc::new(MemoryStore::new()));
        store.set_token(Some("abc")).unwrap();
        store.set_user(Some(&user())).unwrap();
        store.set_token(None).unwrap();

        let stored = store.get().unwrap();
        assert_eq!(stored.token, None);
        assert!(stored.user.is_some());
    }

    #[test]
    fn test_clear_removes_both() {
        let backend = Arc::new(MemoryStore::new());
        let store = CredentialStore::new(backend.clone());
        store.set_token(Some("abc")).unwrap();
        store.set_user(Some(&user())).unwrap();
        store.clear().unwrap();
        assert!(backend.is_empty());
    }

    #[test]
    fn test_unreadable_user_reads_as_absent() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(USER_KEY, "{broken").unwrap();
        backend.set(TOKEN_KEY, "abc").unwrap();

        let stored = CredentialStore::new(backend).get().unwrap();
        assert_eq!(stored.token.as_deref(), Some("abc"));
        assert_eq!(stored.user, None);
    }

    #[test]
    fn test_user_is_stored_as_json() {
        let backend = Arc::new(MemoryStore::new());
        CredentialStore::new(backend.clone())
            .set_user(Some(&user()))
            .unwrap();
        let raw = backend.get(USER_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"id":"u1","name":"Ada","email":"a@b.com"}"#);
    }
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::CredentialStore;
use crate::models::User;
use crate::routes::{Navigator, Route};

/// An authenticated session. Token and user only ever travel together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Hydration from storage has not completed; defer access decisions.
    Loading,
    Unauthenticated,
    Authenticated,
}

enum Phase {
    Hydrating,
    Ready(Option<SessionData>),
}

/// Process-wide authentication state, constructed explicitly and shared as
/// `Arc<Session>` between the API client and whatever drives the UI.
pub struct Session {
    credentials: CredentialStore,
    navigator: Arc<dyn Navigator>,
    phase: Mutex<Phase>,
}

impl Session {
    /// Create a session in the loading state. Call [`Session::hydrate`] once
    /// before making access decisions.
    pub fn new(credentials: CredentialStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            credentials,
            navigator,
            phase: Mutex::new(Phase::Hydrating),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the persisted session. Only the first call reads storage.
    ///
    /// A stored token without a user (or the reverse) is a torn session; it
    /// is discarded and removed from storage. A storage failure still ends
    /// hydration, leaving the session unauthenticated.
    pub fn hydrate(&self) -> Result<()> {
        let mut phase = self.lock();
        if !matches!(*phase, Phase::Hydrating) {
            return Ok(());
        }

        let stored = match self.credentials.get() {
            Ok(stored) => stored,
            Err(e) => {
                *phase = Phase::Ready(None);
                return Err(e).context("Failed to hydrate session");
            }
        };

        let data = match (stored.token, stored.user) {
            (Some(token), Some(user)) => Some(SessionData { token, user }),
            (None, None) => None,
            (token, user) => {
                warn!(
                    has_token = token.is_some(),
                    has_user = user.is_some(),
                    "Discarding incomplete stored session"
                );
                if let Err(e) = self.credentials.clear() {
                    warn!(error = %e, "Failed to clear incomplete session");
                }
                None
            }
        };

        debug!(authenticated = data.is_some(), "Session hydrated");
        *phase = Phase::Ready(data);
        Ok(())
    }

    pub fn status(&self) -> SessionStatus {
        match &*self.lock() {
            Phase::Hydrating => SessionStatus::Loading,
            Phase::Ready(None) => SessionStatus::Unauthenticated,
            Phase::Ready(Some(_)) => SessionStatus::Authenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status() == SessionStatus::Loading
    }

    /// True iff an in-memory token is present.
    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn data(&self) -> Option<SessionData> {
        match &*self.lock() {
            Phase::Ready(Some(data)) => Some(data.clone()),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.data().map(|d| d.token)
    }

    pub fn user(&self) -> Option<User> {
        self.data().map(|d| d.user)
    }

    /// Token to attach to outgoing requests: the in-memory token, falling
    /// back to persistent storage.
    pub fn bearer_token(&self) -> Option<String> {
        if let Some(token) = self.token() {
            return Some(token);
        }
        match self.credentials.token() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to read stored token");
                None
            }
        }
    }

    /// Persist and adopt a new session.
    ///
    /// If persisting fails, storage is cleared and the session ends up
    /// unauthenticated rather than half written.
    pub fn login(&self, token: impl Into<String>, user: User) -> Result<()> {
        let token = token.into();
        let mut phase = self.lock();

        let persisted = self
            .credentials
            .set_token(Some(&token))
            .and_then(|()| self.credentials.set_user(Some(&user)));

        if let Err(e) = persisted {
            if let Err(clear_err) = self.credentials.clear() {
                warn!(error = %clear_err, "Failed to roll back partial login");
            }
            *phase = Phase::Ready(None);
            return Err(e).context("Failed to persist session");
        }

        info!(user_id = %user.id, email = %user.email, "Logged in");
        *phase = Phase::Ready(Some(SessionData { token, user }));
        Ok(())
    }

    /// Sign out and send the user to the login view.
    pub fn logout(&self) -> Result<()> {
        info!("Logging out");
        self.sign_out()
    }

    /// The server rejected the token. Same transition as `logout`.
    pub fn expire(&self) -> Result<()> {
        warn!("Session rejected by server, signing out");
        self.sign_out()
    }

    fn sign_out(&self) -> Result<()> {
        let cleared = {
            let mut phase = self.lock();
            *phase = Phase::Ready(None);
            self.credentials.clear()
        };
        // Outside the lock: a navigator may read the session.
        self.navigator.navigate(&Route::Login);
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{KeyValueStore, MemoryStore, StoredCredentials};
    use crate::routes::RecordingNavigator;

    fn user() -> User {
        serde_json::from_str(r#"{"id":"u1","name":"Ada","email":"a@b.com"}"#).unwrap()
    }

    fn setup() -> (Session, Arc<MemoryStore>, Arc<RecordingNavigator>) {
        let backend = Arc::new(MemoryStore::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let session = Session::new(CredentialStore::new(backend.clone()), navigator.clone());
        (session, backend, navigator)
    }

    #[test]
    fn test_loading_until_hydrated() {
        let (session, _, _) = setup();
        assert_eq!(session.status(), SessionStatus::Loading);
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        session.hydrate().unwrap();
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_hydrate_restores_stored_session() {
        let (session, backend, _) = setup();
        let store = CredentialStore::new(backend);
        store.set_token(Some("abc")).unwrap();
        store.set_user(Some(&user())).unwrap();

        session.hydrate().unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.user(), Some(user()));
    }

    #[test]
    fn test_hydrate_discards_lone_token() {
        let (session, backend, _) = setup();
        backend.set("token", "abc").unwrap();

        session.hydrate().unwrap();
        assert!(!session.is_authenticated());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_hydrate_discards_lone_user() {
        let (session, backend, _) = setup();
        CredentialStore::new(backend.clone())
            .set_user(Some(&user()))
            .unwrap();

        session.hydrate().unwrap();
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_hydrate_runs_once() {
        let (session, backend, _) = setup();
        session.hydrate().unwrap();

        let store = CredentialStore::new(backend);
        store.set_token(Some("late")).unwrap();
        store.set_user(Some(&user())).unwrap();
        session.hydrate().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_then_get() {
        let (session, backend, _) = setup();
        session.hydrate().unwrap();
        session.login("abc", user()).unwrap();

        assert!(session.is_authenticated());
        let stored = CredentialStore::new(backend).get().unwrap();
        assert_eq!(stored.token.as_deref(), Some("abc"));
        assert_eq!(stored.user, Some(user()));
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let (session, backend, navigator) = setup();
        session.hydrate().unwrap();
        session.login("abc", user()).unwrap();
        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(
            CredentialStore::new(backend).get().unwrap(),
            StoredCredentials::default()
        );
        assert_eq!(navigator.history(), vec![Route::Login]);
    }

    #[test]
    fn test_bearer_token_falls_back_to_storage() {
        let (session, backend, _) = setup();
        backend.set("token", "stored").unwrap();
        // Not hydrated yet: no in-memory token.
        assert_eq!(session.token(), None);
        assert_eq!(session.bearer_token().as_deref(), Some("stored"));
    }

    struct FailingUserStore(MemoryStore);

    impl KeyValueStore for FailingUserStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<()> {
            if key == "user" {
                anyhow::bail!("disk full");
            }
            self.0.set(key, value)
        }
        fn remove(&self, key: &str) -> Result<()> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_failed_login_leaves_nothing_behind() {
        let backend = Arc::new(FailingUserStore(MemoryStore::new()));
        let session = Session::new(
            CredentialStore::new(backend.clone()),
            Arc::new(RecordingNavigator::new()),
        );
        session.hydrate().unwrap();

        assert!(session.login("abc", user()).is_err());
        assert!(!session.is_authenticated());
        assert!(backend.0.is_empty());
    }
}

//! Authentication module for the admin session.
//!
//! This module provides:
//! - `KeyValueStore`: persistent string storage (file, OS keychain, memory)
//! - `CredentialStore`: the `token` / `user` pair kept in that storage
//! - `Session`: the in-memory session state machine with a one-time
//!   hydration step
//!
//! There is no client-side expiry. A rejected token is discovered when the
//! backend answers 401, at which point the API client expires the session.

pub mod credentials;
pub mod session;
pub mod store;

pub use credentials::{CredentialStore, StoredCredentials};
pub use session::{Session, SessionData, SessionStatus};
pub use store::{FileStore, KeyValueStore, KeyringStore, MemoryStore};

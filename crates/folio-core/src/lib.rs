//! Client library for a portfolio site's admin backend.
//!
//! The pieces, leaf first:
//!
//! - [`auth`]: persisted credentials and the session state machine
//! - [`routes`]: admin routes, the navigator seam and the route guard
//! - [`api`]: the HTTP client pipeline and typed endpoint methods
//! - [`forms`]: login/project/blog forms with local validation
//! - [`collection`]: list state for fetched collections
//!
//! A typical front end builds one [`Session`](auth::Session), hydrates it,
//! and shares it with an [`ApiClient`](api::ApiClient):
//!
//! ```no_run
//! use std::sync::Arc;
//! use folio_core::auth::{CredentialStore, Session};
//! use folio_core::routes::RecordingNavigator;
//! use folio_core::{api::ApiClient, config::Config};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let credentials = CredentialStore::new(config.credential_backend(None)?);
//! let session = Arc::new(Session::new(credentials, Arc::new(RecordingNavigator::new())));
//! session.hydrate()?;
//! let api = ApiClient::with_timeout(&config.api_base_url(), config.request_timeout(), session)?;
//! # let _ = api;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod collection;
pub mod config;
pub mod forms;
pub mod models;
pub mod routes;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use auth::{Session, SessionData, SessionStatus};
pub use collection::Collection;
pub use config::Config;
pub use forms::{BlogForm, LoginForm, ProjectForm, ValidationError};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{envelope, ApiClient, ApiError};
use crate::auth::SessionData;
use crate::forms::LoginForm;
use crate::models::User;

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: User,
}

/// The login endpoint answers `{ token, user }`, sometimes inside `data`.
fn parse_auth_response(body: Value) -> Result<AuthResponse, ApiError> {
    if body.get("token").is_some() {
        serde_json::from_value(body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })
    } else {
        envelope::extract(body, "session")
    }
}

impl ApiClient {
    /// Authenticate and adopt the returned session.
    ///
    /// An invalid form is rejected before any request is made.
    pub async fn login(&self, form: &LoginForm) -> Result<SessionData> {
        form.validate()?;

        let body = self.post_json("/auth/login", form).await?;
        let auth = parse_auth_response(body)?;

        self.session()
            .login(auth.token.clone(), auth.user.clone())
            .context("Failed to save session")?;
        info!(email = %auth.user.email, "Authenticated");

        Ok(SessionData {
            token: auth.token,
            user: auth.user,
        })
    }

    pub fn logout(&self) -> Result<()> {
        self.session().logout()
    }
}

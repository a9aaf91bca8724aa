use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Normalized API failure. `Display` is the human-readable message, taken
/// from the response body's `message` field when the backend sent one.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    AccessDenied(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("{0}")]
    ServerError(String),

    /// Transport failure. The reqwest error is the source, not part of the
    /// message, so `{:#}` chains print it once.
    #[error("Network error")]
    NetworkError(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidResponse(String),
}

/// Maximum length for response bodies echoed into logs
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    /// The backend's own message, if the body is a JSON object carrying one.
    pub fn extract_message(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .message
            .or(parsed.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }

    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = Self::extract_message(body);
        let or_default = |default: String| message.clone().unwrap_or(default);

        match status.as_u16() {
            401 => ApiError::Unauthorized(or_default(
                "Unauthorized - token may be expired".to_string(),
            )),
            403 => ApiError::AccessDenied(or_default("Access denied".to_string())),
            404 => ApiError::NotFound(or_default("Resource not found".to_string())),
            429 => ApiError::RateLimited(or_default(
                "Rate limited - please wait before retrying".to_string(),
            )),
            500..=599 => ApiError::ServerError(or_default(format!("Server error ({})", status))),
            _ => ApiError::InvalidResponse(or_default(format!(
                "Request failed with status {}",
                status
            ))),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

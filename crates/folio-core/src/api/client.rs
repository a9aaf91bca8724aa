//! API client for the portfolio backend.
//!
//! Every call goes through one pipeline: [`ApiClient::request`] attaches the
//! bearer token, [`ApiClient::execute`] sends the request and either unwraps
//! the JSON body or turns the failure into an [`ApiError`]. A 401 from any
//! endpoint expires the shared [`Session`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, multipart, Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::ApiError;
use crate::auth::Session;

/// Overall HTTP request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// API client bound to one session.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a new API client with the default timeout
    pub fn new(base_url: &str, session: Arc<Session>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(REQUEST_TIMEOUT_SECS), session)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration, session: Arc<Session>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.session.bearer_token() {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .context("Stored token is not a valid header value")?,
            );
        }
        Ok(headers)
    }

    /// Start a request with the bearer token attached when one is available.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path);
        debug!(%method, url = %url, "Sending request");
        Ok(self.client.request(method, url).headers(self.auth_headers()?))
    }

    /// Send a request and unwrap the response body.
    ///
    /// Success returns the parsed JSON body (`null` when empty). A 401
    /// expires the session before the error is returned. Nothing is retried.
    async fn execute(&self, request: RequestBuilder) -> Result<Value> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Request failed");
                return Err(ApiError::NetworkError(e).into());
            }
        };

        let status = response.status();
        let url = response.url().to_string();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(ApiError::NetworkError)?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Value::Null);
            }
            return serde_json::from_slice(&bytes).map_err(|e| {
                ApiError::InvalidResponse(format!(
                    "Failed to parse JSON response from {}: {}",
                    url, e
                ))
                .into()
            });
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            status = status.as_u16(),
            url = %url,
            body = %ApiError::truncate_body(&body),
            "Request rejected"
        );

        let error = ApiError::from_status(status, &body);
        if error.is_unauthorized() {
            if let Err(e) = self.session.expire() {
                warn!(error = %e, "Failed to clear stored credentials");
            }
        }
        Err(error.into())
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.execute(self.request(Method::GET, path)?).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.execute(self.request(Method::POST, path)?.json(body))
            .await
    }

    pub async fn post_multipart(&self, path: &str, form: multipart::Form) -> Result<Value> {
        self.execute(self.request(Method::POST, path)?.multipart(form))
            .await
    }

    pub async fn put_multipart(&self, path: &str, form: multipart::Form) -> Result<Value> {
        self.execute(self.request(Method::PUT, path)?.multipart(form))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(self.request(Method::DELETE, path)?).await
    }
}

//! List state for a fetched collection: items, a loading flag and the last
//! error.

use std::future::Future;

use anyhow::Result;
use tracing::error;

#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark a fetch as started.
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result. On failure the previous items are kept.
    pub fn finish(&mut self, result: Result<Vec<T>>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                error!(error = %e, "Failed to load collection");
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    /// Run `fetch` and apply its result.
    pub async fn refresh<F>(&mut self, fetch: F) -> &Self
    where
        F: Future<Output = Result<Vec<T>>>,
    {
        self.begin();
        let result = fetch.await;
        self.finish(result);
        self
    }
}

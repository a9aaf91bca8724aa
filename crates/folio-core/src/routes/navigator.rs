use std::sync::{Mutex, PoisonError};

use tracing::debug;

use super::Route;

/// Where forced redirects go. A front end decides what "navigating" means.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}

/// Keeps the navigation history so the caller can react to a redirect
/// after the fact.
#[derive(Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of redirects to the login route so far
    pub fn login_redirects(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| **r == Route::Login)
            .count()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        debug!(route = %route, "Navigating");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.clone());
    }
}

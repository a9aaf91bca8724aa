use super::Route;
use crate::auth::{Session, SessionStatus};

/// Outcome of passing a view through the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    /// Session still hydrating; show a waiting indicator.
    Waiting,
    Render(V),
    Redirect(Route),
}

impl<V> Guarded<V> {
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Guarded<U> {
        match self {
            Guarded::Waiting => Guarded::Waiting,
            Guarded::Render(view) => Guarded::Render(f(view)),
            Guarded::Redirect(route) => Guarded::Redirect(route),
        }
    }
}

/// Admit `view` only for an authenticated session.
pub fn guard<V>(session: &Session, view: V) -> Guarded<V> {
    match session.status() {
        SessionStatus::Loading => Guarded::Waiting,
        SessionStatus::Authenticated => Guarded::Render(view),
        SessionStatus::Unauthenticated => Guarded::Redirect(Route::Login),
    }
}

/// Guard protected routes; public routes always render.
pub fn resolve(session: &Session, route: Route) -> Guarded<Route> {
    if route.requires_auth() {
        guard(session, route)
    } else {
        Guarded::Render(route)
    }
}

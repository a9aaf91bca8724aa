//! Routes of the admin console and the guard in front of them.
//!
//! Only the routing facts the session flow depends on live here: which
//! paths exist, which require authentication, and where a redirect goes.

pub mod guard;
pub mod navigator;

pub use guard::{guard, resolve, Guarded};
pub use navigator::{Navigator, RecordingNavigator};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    ProjectDetail(String),
    Blogs,
    BlogDetail(String),
    Contact,
    Github,
    Login,
    Dashboard,
    ManageProjects,
    ManageBlogs,
    ManageContact,
    NotFound,
}

impl Route {
    /// Map a URL path to a route. Trailing slashes and query strings are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["projects"] => Route::Projects,
            ["projects", id] => Route::ProjectDetail((*id).to_string()),
            ["blogs"] => Route::Blogs,
            ["blogs", id] => Route::BlogDetail((*id).to_string()),
            ["contact"] => Route::Contact,
            ["github"] => Route::Github,
            ["login"] => Route::Login,
            ["dashboard"] => Route::Dashboard,
            ["dashboard", "projects"] => Route::ManageProjects,
            ["dashboard", "blogs"] => Route::ManageBlogs,
            ["dashboard", "contact"] => Route::ManageContact,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{}", id),
            Route::Blogs => "/blogs".to_string(),
            Route::BlogDetail(id) => format!("/blogs/{}", id),
            Route::Contact => "/contact".to_string(),
            Route::Github => "/github".to_string(),
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::ManageProjects => "/dashboard/projects".to_string(),
            Route::ManageBlogs => "/dashboard/blogs".to_string(),
            Route::ManageContact => "/dashboard/contact".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Everything under `/dashboard` is admin-only.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::ManageProjects | Route::ManageBlogs | Route::ManageContact
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

//! REST API client module for the portfolio backend.
//!
//! This module provides the `ApiClient` for authenticating the admin and
//! reading or editing projects, blog posts and dashboard data.
//!
//! Requests carry a JWT bearer token taken from the shared session. The
//! backend's response envelopes are normalized in [`envelope`].

pub mod auth;
pub mod blogs;
pub mod client;
pub mod dashboard;
pub mod envelope;
pub mod error;
pub mod projects;

pub use client::ApiClient;
pub use dashboard::DashboardOverview;
pub use error::ApiError;

//! Data models for portfolio entities.
//!
//! This module contains the data structures exchanged with the backend:
//!
//! - `User`: the authenticated administrator
//! - `Project`, `Blog`: portfolio content with an uploaded cover image
//! - Dashboard types: `DashboardData`, `DashboardStats`, `GithubStats`,
//!   `Contact`, `RecentActivity`
//!
//! Wire names are camelCase; MongoDB-style `_id` keys map to `id`.

pub mod blog;
pub mod dashboard;
pub mod project;
pub mod user;

pub use blog::Blog;
pub use dashboard::{
    ActivityType, Contact, DashboardData, DashboardStats, GithubStats, RecentActivity,
};
pub use project::{ImageRef, Project};
pub use user::User;

//! Utility functions for formatting values in listings.

pub mod format;

pub use format::{format_date, format_optional, truncate};

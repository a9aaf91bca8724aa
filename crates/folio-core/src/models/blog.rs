use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ImageRef;

/// A blog post hosted on an external platform (Medium, dev.to, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub platform: String,
    #[serde(rename = "imageURL", default)]
    pub image: ImageRef,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_published() -> bool {
    true
}

//! Portfolio project model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Reference to an image hosted by the backend's media store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub public_id: Option<String>,
}

impl ImageRef {
    pub fn is_empty(&self) -> bool {
        self.url.as_deref().map_or(true, str::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_tech_stack")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_url: String,
    #[serde(rename = "liveURL", default)]
    pub live_url: String,
    #[serde(rename = "imageURL", default)]
    pub image: ImageRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Tech stack joined for display and for the multipart `techStack` field
    pub fn tech_stack_display(&self) -> String {
        self.tech_stack.join(", ")
    }
}

/// Split a comma-separated tech list, trimming entries and dropping empties.
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The backend stores `techStack` as a string on some records and as an
/// array on others.
fn deserialize_tech_stack<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TechStackWire {
        Text(String),
        List(Vec<String>),
    }

    Ok(match Option::<TechStackWire>::deserialize(deserializer)? {
        Some(TechStackWire::Text(s)) => parse_tech_stack(&s),
        Some(TechStackWire::List(list)) => list
            .iter()
            .flat_map(|entry| parse_tech_stack(entry))
            .collect(),
        None => Vec::new(),
    })
}

//! Dashboard aggregates and GitHub profile statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Blog, Project};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubStats {
    pub username: String,
    #[serde(default)]
    pub total_repos: u64,
    #[serde(default)]
    pub total_stars: u64,
    #[serde(default)]
    pub total_forks: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_projects: u64,
    pub total_blogs: u64,
    pub total_contacts: u64,
    pub total_skills: u64,
    pub published_projects: u64,
    pub published_blogs: u64,
    pub unread_contacts: u64,
    pub github: Option<GithubStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub github: Option<GithubStats>,
    pub projects: Vec<Project>,
    pub blogs: Vec<Blog>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Project,
    Blog,
    Contact,
    Github,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Project => "project",
            ActivityType::Blog => "blog",
            ActivityType::Contact => "contact",
            ActivityType::Github => "github",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RecentActivity {
    /// Best available one-line summary: title, then sender name, then message
    pub fn summary(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .or(self.message.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_without_timestamp_still_parses() {
        let json = r#"[
            {"id":"1","type":"blog","title":"Post"},
            {"id":"2","type":"contact","name":"Grace","createdAt":"2024-06-01T12:00:00Z"}
        ]"#;
        let activity: Vec<RecentActivity> = serde_json::from_str(json).unwrap();
        assert_eq!(activity.len(), 2);
        assert!(activity[0].created_at.is_none());
        assert_eq!(activity[0].summary(), "Post");
        assert!(activity[1].created_at.is_some());
        assert_eq!(activity[1].summary(), "Grace");
    }

    #[test]
    fn test_parse_dashboard_data_partial() {
        let json = r#"{"stats":{"totalProjects":3,"unreadContacts":1},"github":null,"projects":[]}"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.stats.total_projects, 3);
        assert_eq!(data.stats.unread_contacts, 1);
        assert_eq!(data.stats.total_blogs, 0);
        assert!(data.github.is_none());
        assert!(data.contacts.is_empty());
    }

    #[test]
    fn test_parse_recent_activity() {
        let json = r#"[
            {"id":"1","type":"contact","createdAt":"2024-01-01T00:00:00Z","name":"Grace","message":"Hi"},
            {"id":"2","type":"project","createdAt":"2024-01-02T00:00:00Z","title":"CLI"}
        ]"#;
        let items: Vec<RecentActivity> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].kind, ActivityType::Contact);
        assert_eq!(items[0].summary(), "Grace");
        assert_eq!(items[1].summary(), "CLI");
        assert_eq!(items[1].kind.label(), "project");
    }
}

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

use super::{envelope, ApiClient};
use crate::models::{DashboardData, DashboardStats, GithubStats, RecentActivity};

/// Dashboard data plus GitHub stats, which are fetched separately and may
/// be missing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardOverview {
    pub data: DashboardData,
    pub github: Option<GithubStats>,
}

impl ApiClient {
    pub async fn fetch_dashboard(&self) -> Result<DashboardData> {
        let body = self.get("/dashboard").await?;
        Ok(envelope::extract(body, "dashboard")?)
    }

    /// Dashboard including every project, blog and contact
    pub async fn fetch_full_dashboard(&self) -> Result<DashboardData> {
        let body = self.get("/dashboard/full").await?;
        Ok(envelope::extract(body, "dashboard")?)
    }

    pub async fn fetch_dashboard_stats(&self) -> Result<DashboardStats> {
        let body = self.get("/dashboard/stats").await?;
        Ok(envelope::extract(body, "stats")?)
    }

    pub async fn fetch_recent_activity(&self, limit: Option<u32>) -> Result<Vec<RecentActivity>> {
        let path = match limit {
            Some(limit) => format!("/dashboard/recent?limit={}", limit),
            None => "/dashboard/recent".to_string(),
        };
        let body = self.get(&path).await?;
        Ok(envelope::extract_list(body, "activity")?)
    }

    pub async fn fetch_github_stats(&self) -> Result<GithubStats> {
        let body = self.get("/github").await?;
        Ok(envelope::extract(body, "github")?)
    }

    /// Load the dashboard, then GitHub stats. A GitHub failure is logged and
    /// the overview is returned without them.
    pub async fn load_dashboard_overview(&self) -> Result<DashboardOverview> {
        let data = self.fetch_dashboard().await?;

        let github = match self.fetch_github_stats().await {
            Ok(stats) => {
                debug!(username = %stats.username, "GitHub stats loaded");
                Some(stats)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch GitHub stats, continuing without them");
                data.github.clone().or_else(|| data.stats.github.clone())
            }
        };

        Ok(DashboardOverview { data, github })
    }
}

use anyhow::Result;
use tracing::info;

use super::{envelope, ApiClient};
use crate::forms::ProjectForm;
use crate::models::Project;

impl ApiClient {
    /// Fetch all projects
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let body = self.get("/projects").await?;
        Ok(envelope::extract_list(body, "projects")?)
    }

    pub async fn fetch_project(&self, id: &str) -> Result<Project> {
        let body = self.get(&format!("/projects/{}", id)).await?;
        Ok(envelope::extract(body, "project")?)
    }

    pub async fn create_project(&self, form: &ProjectForm) -> Result<Project> {
        form.validate()?;
        let body = self.post_multipart("/projects", form.to_multipart().await?).await?;
        let project: Project = envelope::extract(body, "project")?;
        info!(id = %project.id, title = %project.title, "Project created");
        Ok(project)
    }

    pub async fn update_project(&self, id: &str, form: &ProjectForm) -> Result<Project> {
        form.validate()?;
        let body = self
            .put_multipart(&format!("/projects/{}", id), form.to_multipart().await?)
            .await?;
        let project: Project = envelope::extract(body, "project")?;
        info!(id = %project.id, "Project updated");
        Ok(project)
    }

    /// Create or update depending on the form's mode.
    pub async fn save_project(&self, form: &ProjectForm) -> Result<Project> {
        match form.id.as_deref().filter(|_| form.is_edit()) {
            Some(id) => self.update_project(id, form).await,
            None => self.create_project(form).await,
        }
    }

    /// Delete a project, returning it when the backend echoes it back.
    pub async fn delete_project(&self, id: &str) -> Result<Option<Project>> {
        let body = self.delete(&format!("/projects/{}", id)).await?;
        info!(
            id,
            message = envelope::message(&body).unwrap_or_default(),
            "Project deleted"
        );
        Ok(envelope::extract_optional(body, "project")?)
    }
}

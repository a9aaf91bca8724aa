use anyhow::Result;
use reqwest::multipart::Form;

use super::{multipart_form, ImageUpload, ValidationError};
use crate::models::Project;

/// Create/edit form for a project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    /// Set when editing an existing project.
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub category: Option<String>,
    pub year_built: Option<i32>,
    /// New image to upload; `None` keeps the current one.
    pub image: Option<ImageUpload>,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `project`. No image is selected, so saving keeps the
    /// existing one unless a new file is chosen.
    pub fn edit(project: &Project) -> Self {
        Self {
            id: Some(project.id.clone()),
            title: project.title.clone(),
            description: project.description.clone(),
            tech_stack: project.tech_stack.clone(),
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
            category: project.category.clone(),
            year_built: project.year_built,
            image: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        Ok(())
    }

    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("techStack", self.tech_stack.join(", ")),
            ("githubUrl", self.github_url.clone()),
            ("liveURL", self.live_url.clone()),
        ];
        if let Some(category) = self.category.as_ref().filter(|c| !c.is_empty()) {
            fields.push(("category", category.clone()));
        }
        if let Some(year) = self.year_built {
            fields.push(("yearBuilt", year.to_string()));
        }
        fields
    }

    pub async fn to_multipart(&self) -> Result<Form> {
        multipart_form(self.fields(), self.image.as_ref()).await
    }
}

use anyhow::Result;
use reqwest::multipart::Form;

use super::{multipart_form, ImageUpload, ValidationError};
use crate::models::Blog;

/// Create/edit form for a blog post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogForm {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub url: String,
    pub platform: String,
    pub image: Option<ImageUpload>,
}

impl BlogForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(blog: &Blog) -> Self {
        Self {
            id: Some(blog.id.clone()),
            title: blog.title.clone(),
            description: blog.description.clone(),
            url: blog.url.clone(),
            platform: blog.platform.clone(),
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
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("platform", self.platform.clone()),
            ("url", self.url.clone()),
        ]
    }

    pub async fn to_multipart(&self) -> Result<Form> {
        multipart_form(self.fields(), self.image.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_and_fields() {
        let mut form = BlogForm::new();
        assert_eq!(form.validate(), Err(ValidationError::TitleRequired));

        form.title = "Lifetimes".to_string();
        form.platform = "dev.to".to_string();
        assert!(form.validate().is_ok());
        assert_eq!(form.fields()[2], ("platform", "dev.to".to_string()));
    }

    #[test]
    fn test_edit_mode() {
        let blog: Blog = serde_json::from_str(r#"{"_id":"b1","title":"Post"}"#).unwrap();
        let form = BlogForm::edit(&blog);
        assert!(form.is_edit());
        assert_eq!(form.id.as_deref(), Some("b1"));

        let mut blank = BlogForm::new();
        blank.id = Some(String::new());
        assert!(!blank.is_edit());
    }
}

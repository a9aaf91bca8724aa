//! Admin forms and their local validation.
//!
//! Validation runs before anything touches the network: a form that fails
//! [`validate`](ProjectForm::validate) is never submitted. Content forms are
//! sent as `multipart/form-data` so a cover image can ride along.

pub mod blog;
pub mod login;
pub mod project;

pub use blog::BlogForm;
pub use login::LoginForm;
pub use project::ProjectForm;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use thiserror::Error;

/// Multipart field carrying a newly chosen image
pub const IMAGE_FIELD: &str = "imageURL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Password is required")]
    PasswordRequired,
}

/// An image file chosen for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    path: PathBuf,
}

impl ImageUpload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string())
    }

    /// MIME type guessed from the file extension
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            "avif" => "image/avif",
            _ => "application/octet-stream",
        }
    }

    async fn into_part(&self) -> Result<Part> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read image {}", self.path.display()))?;
        Part::bytes(bytes)
            .file_name(self.file_name())
            .mime_str(self.mime_type())
            .context("Invalid image MIME type")
    }
}

/// Build the multipart body. Without a new image the backend keeps the
/// existing one.
pub(crate) async fn multipart_form(
    fields: Vec<(&'static str, String)>,
    image: Option<&ImageUpload>,
) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    if let Some(image) = image {
        form = form.part(IMAGE_FIELD, image.into_part().await?);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(ImageUpload::new("cover.PNG").mime_type(), "image/png");
        assert_eq!(ImageUpload::new("a/b/photo.jpeg").mime_type(), "image/jpeg");
        assert_eq!(ImageUpload::new("noext").mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(ImageUpload::new("/tmp/shots/cover.webp").file_name(), "cover.webp");
    }

    #[tokio::test]
    async fn test_missing_image_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let image = ImageUpload::new(dir.path().join("missing.png"));
        let err = multipart_form(vec![("title", "x".to_string())], Some(&image))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read image"));
    }

    #[tokio::test]
    async fn test_image_is_attached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let form = multipart_form(vec![], Some(&ImageUpload::new(&path)))
            .await
            .unwrap();
        assert!(!form.boundary().is_empty());
    }
}

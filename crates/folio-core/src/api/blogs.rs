use anyhow::Result;
use tracing::info;

use super::{envelope, ApiClient};
use crate::forms::BlogForm;
use crate::models::Blog;

impl ApiClient {
    /// Fetch all blog posts
    pub async fn fetch_blogs(&self) -> Result<Vec<Blog>> {
        let body = self.get("/blogs").await?;
        Ok(envelope::extract_list(body, "blogs")?)
    }

    pub async fn fetch_blog(&self, id: &str) -> Result<Blog> {
        let body = self.get(&format!("/blogs/{}", id)).await?;
        Ok(envelope::extract(body, "blog")?)
    }

    pub async fn create_blog(&self, form: &BlogForm) -> Result<Blog> {
        form.validate()?;
        let body = self.post_multipart("/blogs", form.to_multipart().await?).await?;
        let blog: Blog = envelope::extract(body, "blog")?;
        info!(id = %blog.id, title = %blog.title, "Blog created");
        Ok(blog)
    }

    pub async fn update_blog(&self, id: &str, form: &BlogForm) -> Result<Blog> {
        form.validate()?;
        let body = self
            .put_multipart(&format!("/blogs/{}", id), form.to_multipart().await?)
            .await?;
        let blog: Blog = envelope::extract(body, "blog")?;
        info!(id = %blog.id, "Blog updated");
        Ok(blog)
    }

    pub async fn save_blog(&self, form: &BlogForm) -> Result<Blog> {
        match form.id.as_deref().filter(|_| form.is_edit()) {
            Some(id) => self.update_blog(id, form).await,
            None => self.create_blog(form).await,
        }
    }

    pub async fn delete_blog(&self, id: &str) -> Result<()> {
        let body = self.delete(&format!("/blogs/{}", id)).await?;
        info!(
            id,
            message = envelope::message(&body).unwrap_or_default(),
            "Blog deleted"
        );
        Ok(())
    }
}

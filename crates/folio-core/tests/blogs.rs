mod common;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use folio_core::forms::ImageUpload;
use folio_core::{BlogForm, LoginForm, ValidationError};
use serde_json::{json, Value};

use common::{harness, serve, user_json, Recorder};

fn blog_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": "Notes on async Rust",
        "url": "https://dev.to/me/post",
        "platform": "dev.to",
        "imageURL": {"url": "https://cdn.example.com/cover.png", "public_id": "cover"},
        "createdAt": "2024-06-01T12:00:00.000Z"
    })
}

async fn list_blogs(State(rec): State<Arc<Recorder>>, headers: HeaderMap) -> Json<Value> {
    rec.record(&headers);
    Json(json!({"blogs": [blog_json("b1", "Async Rust")]}))
}

async fn update_blog(
    State(rec): State<Arc<Recorder>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    rec.record(&headers);
    let text = String::from_utf8_lossy(&body);
    if !text.contains("name=\"imageURL\"") || !text.contains("filename=\"cover.png\"") {
        let body = Json(json!({"message": "Image missing"}));
        return (StatusCode::BAD_REQUEST, body).into_response();
    }
    let blog = blog_json(&id, "Async Rust, revised");
    Json(json!({"message": "Updated", "data": blog})).into_response()
}

async fn delete_blog(State(rec): State<Arc<Recorder>>, headers: HeaderMap) -> Json<Value> {
    rec.record(&headers);
    Json(json!({"message": "Blog deleted"}))
}

async fn login() -> Json<Value> {
    Json(json!({"data": {"token": "abc", "user": user_json()}}))
}

fn router(rec: Arc<Recorder>) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/blogs", get(list_blogs))
        .route(
            "/api/blogs/{id}",
            put(update_blog).delete(delete_blog),
        )
        .with_state(rec)
}

#[tokio::test]
async fn test_blog_list_reads_named_key() {
    let rec = Arc::new(Recorder::default());
    let base = serve(router(rec.clone())).await;
    let h = harness(&base);

    let blogs = h.api.fetch_blogs().await.unwrap();
    assert_eq!(blogs.len(), 1);
    assert_eq!(blogs[0].platform, "dev.to");
    assert!(blogs[0].published);
}

#[tokio::test]
async fn test_blog_form_without_title_never_hits_network() {
    let rec = Arc::new(Recorder::default());
    let base = serve(router(rec.clone())).await;
    let h = harness(&base);

    let form = BlogForm::new();
    let err = h.api.save_blog(&form).await.unwrap_err();
    assert_eq!(err.to_string(), "Title is required");
    assert_eq!(
        err.downcast_ref::<ValidationError>(),
        Some(&ValidationError::TitleRequired)
    );
    assert_eq!(rec.hits(), 0);
}

#[tokio::test]
async fn test_edit_blog_uploads_new_image() {
    let rec = Arc::new(Recorder::default());
    let base = serve(router(rec.clone())).await;
    let h = harness(&base);
    h.api.login(&LoginForm::new("a@b.com", "x")).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let cover = dir.path().join("cover.png");
    std::fs::write(&cover, b"\x89PNG fake").unwrap();

    let existing = h.api.fetch_blogs().await.unwrap().remove(0);
    let mut form = BlogForm::edit(&existing);
    assert!(form.is_edit());
    form.title = "Async Rust, revised".to_string();
    form.image = Some(ImageUpload::new(cover.clone()));

    let blog = h.api.save_blog(&form).await.unwrap();
    assert_eq!(blog.id, "b1");
    assert_eq!(blog.title, "Async Rust, revised");
    assert_eq!(rec.last_authorization().as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn test_delete_blog_ignores_body() {
    let rec = Arc::new(Recorder::default());
    let base = serve(router(rec.clone())).await;
    let h = harness(&base);
    h.api.login(&LoginForm::new("a@b.com", "x")).await.unwrap();

    h.api.delete_blog("b1").await.unwrap();
    assert_eq!(rec.hits(), 1);
    assert_eq!(rec.last_authorization().as_deref(), Some("Bearer abc"));
}

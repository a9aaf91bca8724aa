#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::HeaderMap;
use axum::Router;
use folio_core::auth::{CredentialStore, KeyValueStore, MemoryStore, Session};
use folio_core::routes::RecordingNavigator;
use folio_core::ApiClient;

/// Serve `router` on an ephemeral port and return the API base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

/// Memory store that counts token removals.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    token_removals: AtomicUsize,
}

impl CountingStore {
    pub fn token_removals(&self) -> usize {
        self.token_removals.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        if key == "token" {
            self.token_removals.fetch_add(1, Ordering::SeqCst);
        }
        self.inner.remove(key)
    }
}

pub struct Harness {
    pub api: ApiClient,
    pub store: Arc<CountingStore>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn harness(base_url: &str) -> Harness {
    let store = Arc::new(CountingStore::default());
    let navigator = Arc::new(RecordingNavigator::new());
    let session = Arc::new(Session::new(
        CredentialStore::new(store.clone()),
        navigator.clone(),
    ));
    session.hydrate().unwrap();
    Harness {
        api: ApiClient::new(base_url, session).unwrap(),
        store,
        navigator,
    }
}

/// Authorization headers seen by the server, in order.
#[derive(Default)]
pub struct Recorder {
    pub hits: AtomicUsize,
    pub authorization: Mutex<Vec<Option<String>>>,
    pub content_types: Mutex<Vec<Option<String>>>,
}

impl Recorder {
    pub fn record(&self, headers: &HeaderMap) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        self.authorization.lock().unwrap().push(header("authorization"));
        self.content_types.lock().unwrap().push(header("content-type"));
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.authorization.lock().unwrap().last().cloned().flatten()
    }
}

pub fn user_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "name": "Ada Lovelace",
        "email": "a@b.com",
        "profileImage": "https://cdn.example.com/ada.png"
    })
}

pub fn project_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "title": title,
        "description": "A project",
        "techStack": "Rust, Tokio",
        "githubUrl": "https://github.com/me/project",
        "liveURL": "https://project.example.com",
        "imageURL": {"url": null, "public_id": null},
        "createdAt": "2024-06-01T12:00:00.000Z",
        "updatedAt": "2024-06-01T12:00:00.000Z"
    })
}

//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::routing::get;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use kgl_procurement::api::handlers::health_check;
use kgl_procurement::domain::RecordIdGenerator;
use kgl_procurement::server::AppState;
use kgl_procurement::store::{FileStore, InMemoryStore, ProcurementStore};

/// Build the full application router around the given store.
pub fn app_with_store(store: Arc<dyn ProcurementStore>) -> axum::Router<()> {
    let state = AppState {
        store,
        record_ids: Arc::new(RecordIdGenerator::new()),
    };

    axum::Router::new()
        .merge(kgl_procurement::api::router())
        .route("/health", get(health_check))
        .with_state::<()>(state)
}

/// Build the application router over an in-memory store.
pub fn in_memory_app() -> axum::Router<()> {
    app_with_store(Arc::new(InMemoryStore::new()))
}

/// Build the application router over a file store in a fresh temp directory.
/// The directory guard must outlive the router.
pub fn file_backed_app() -> (axum::Router<()>, tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    let app = app_with_store(Arc::new(FileStore::new(&path)));
    (app, dir, path)
}

/// Send a request to the test router.
pub async fn send_request(
    app: &axum::Router<()>,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }

    let body = body
        .map(|v| Body::from(serde_json::to_vec(&v).unwrap()))
        .unwrap_or_else(|| Body::from(Vec::new()));

    let response = app
        .clone()
        .into_service::<Body>()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();

    let json = if bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&bytes) }))
    };

    (status, json)
}

/// Send a request with a raw (possibly malformed) body.
pub async fn send_raw_request(
    app: &axum::Router<()>,
    method: Method,
    uri: &str,
    content_type: &str,
    body: &[u8],
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_vec()))
        .unwrap();

    let response = app
        .clone()
        .into_service::<Body>()
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();

    let json = if bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&bytes) }))
    };

    (status, json)
}

/// Create a well-formed creation payload.
pub fn procurement_payload(name: &str, tonnage: f64, cost: f64) -> serde_json::Value {
    json!({
        "produceName": name,
        "tonnage": tonnage,
        "cost": cost,
    })
}

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use filmvault_api::config::ServerConfig;
use filmvault_api::router::build_app_router;
use filmvault_api::state::AppState;
use filmvault_db::store::{CatalogStore, MemoryCatalogStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. No database URL: the in-memory store
/// is used.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        database_max_connections: 5,
    }
}

/// Build the full application router over a fresh, empty in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryCatalogStore::new()))
}

/// Build the full application router over the given store, so a test can
/// seed data directly, inspect it afterwards or inject failures.
///
/// Uses the same [`build_app_router`] as `main.rs`, so integration tests
/// exercise the production middleware stack.
pub fn build_test_app_with(store: Arc<dyn CatalogStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with an arbitrary body and content type.
pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a movie through the API and return its id.
pub async fn create_movie(app: &Router, body: serde_json::Value) -> i64 {
    let response = post_json(app.clone(), "/movie/addMovie", body).await;
    let json = body_json(response).await;
    json["id"].as_i64().unwrap()
}

//! Shared helpers for the HTTP integration tests.
//!
//! Every request is sent through a freshly built app via
//! `tower::ServiceExt::oneshot`; state persists across requests because the
//! apps share one `MemoryStore`.

#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use swapi_api::app::{self, App};
use swapi_api::config::ServerConfig;
use swapi_api::state::AppState;
use swapi_db::{MemoryStore, Store};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        ..ServerConfig::default()
    }
}

/// A fresh, empty store.
pub fn test_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Build the full application service over the given store.
pub fn build_test_app(store: Arc<MemoryStore>) -> App {
    let state = AppState {
        store: store as Arc<dyn Store>,
        config: Arc::new(test_config()),
    };
    app::build_app(state)
}

pub async fn send(store: &Arc<MemoryStore>, request: Request<Body>) -> Response<Body> {
    build_test_app(Arc::clone(store))
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn get(store: &Arc<MemoryStore>, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(store, request).await
}

pub async fn post_json(store: &Arc<MemoryStore>, uri: &str, json: Value) -> Response<Body> {
    post_raw(store, uri, "application/json", json.to_string()).await
}

pub async fn post_raw(
    store: &Arc<MemoryStore>,
    uri: &str,
    content_type: &str,
    body: impl Into<String>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.into()))
        .unwrap();
    send(store, request).await
}

pub async fn delete(store: &Arc<MemoryStore>, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(store, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seeding helpers (through the API, asserting success)
// ---------------------------------------------------------------------------

pub async fn create_planet(store: &Arc<MemoryStore>, json: Value) -> i64 {
    let response = post_json(store, "/planets", json).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn create_species(store: &Arc<MemoryStore>, name: &str, planet_id: i64) -> i64 {
    let response = post_json(
        store,
        "/species",
        serde_json::json!({"name": name, "planet_id": planet_id}),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

pub async fn create_person(
    store: &Arc<MemoryStore>,
    name: &str,
    planet_id: i64,
    species_id: i64,
) -> i64 {
    let response = post_json(
        store,
        "/people",
        serde_json::json!({"name": name, "planet_id": planet_id, "species_id": species_id}),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}

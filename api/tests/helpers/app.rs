use api::state::{AppState, Settings};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use db::Store;
use marker::GradingEngine;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;
use util::notifications::NotificationQueue;

pub const TEST_SEED: u64 = 42;

/// Seeded dataset, fixed random seed, no artificial delays and a long toast TTL.
pub fn test_state() -> AppState {
    state_with(GradingEngine::new(Some(TEST_SEED)), Settings::immediate())
}

pub fn state_with(engine: GradingEngine, settings: Settings) -> AppState {
    AppState::new(
        Store::seeded(),
        engine,
        NotificationQueue::new(Duration::from_secs(60)),
        settings,
    )
}

pub fn make_test_app(state: AppState) -> Router {
    api::app(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Sends one request and decodes the JSON body.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

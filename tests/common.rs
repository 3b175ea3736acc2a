/// Common test utilities for Innkeeper integration tests
///
/// This file contains shared functions for all integration tests,
/// including test application setup and helpers for driving the API
/// and creating common test records.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use innkeeper::{create_app, db::init_pool};
use serde_json::Value;
use std::sync::Arc;
use tower::Service;

/// Creates a test application with an in-memory SQLite database
///
/// Each call uses a unique shared in-memory database so that all pool
/// connections see the same data while tests stay isolated from each
/// other, then runs migrations and builds the router.
///
/// ### Returns
///
/// An Axum Router configured with all routes and connected to an
/// in-memory database
pub fn create_test_app() -> Router {
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:integration_{}?mode=memory&cache=shared", unique_id);
    let pool = Arc::new(init_pool(&database_url));

    let conn = &mut pool.get().unwrap();
    innkeeper::run_migrations(conn);

    create_app(pool)
}

/// Sends a request with an optional JSON body and returns the status and
/// parsed response envelope
pub async fn request(
    app: &mut Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().uri(uri).method(method);

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();

    (status, value)
}

/// Creates a user via the API and returns the created record
#[allow(dead_code)]
pub async fn create_user(app: &mut Router, body: Value) -> Value {
    let (status, envelope) = request(app, "POST", "/users", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(envelope["status"], "success");

    envelope["data"].clone()
}

/// Creates a room via the API and returns the created record
#[allow(dead_code)]
pub async fn create_room(app: &mut Router, body: Value) -> Value {
    let (status, envelope) = request(app, "POST", "/rooms", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(envelope["status"], "success");

    envelope["data"].clone()
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use workout_log::config::Config;
use workout_log::db::Database;
use workout_log::routes::create_router;
use workout_log::AppState;

/// Table names, for row-count assertions.
#[allow(dead_code)]
pub mod tables {
    pub const WORKOUT_SESSIONS: &str = "workout_sessions";
    pub const ACTIVITY_DETAILS: &str = "activity_details";
}

/// Create a fresh in-memory database with the schema applied.
#[allow(dead_code)]
pub async fn test_db() -> Database {
    Database::connect_in_memory()
        .await
        .expect("Failed to open in-memory database")
}

/// Create a test app backed by a private in-memory database.
/// Returns the router and the database so tests can inspect storage.
#[allow(dead_code)]
pub async fn create_test_app() -> (Router, Database) {
    let db = test_db().await;

    let state = Arc::new(AppState {
        config: Config::default(),
        workouts: db.workouts(),
    });

    (create_router(state), db)
}

/// Send a request and decode the JSON response body.
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// POST a workout and return the new id.
#[allow(dead_code)]
pub async fn create_workout(app: &Router, body: Value) -> i64 {
    let (status, json) = send(app, Method::POST, "/workouts", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["id"].as_i64().expect("id in create response")
}

/// Count rows in a table.
#[allow(dead_code)]
pub async fn count_rows(db: &Database, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar(&sql)
        .fetch_one(db.pool())
        .await
        .unwrap()
}

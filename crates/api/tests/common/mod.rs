//! Shared harness for HTTP-level integration tests.
//!
//! Builds the full production router (same middleware stack via
//! [`build_app_router`]) against a per-test database and provides request
//! and seeding helpers. Requests are sent with `tower::ServiceExt::oneshot`
//! -- no TCP listener involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use mentorlink_api::auth::jwt::JwtConfig;
use mentorlink_api::config::ServerConfig;
use mentorlink_api::router::build_app_router;
use mentorlink_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request, optionally with a bearer token and JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: &Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: &Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Register a user via the API, returning `(access_token, user_id)`.
pub async fn register_user(app: &Router, name: &str, email: &str, role: &str) -> (String, String) {
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({
            "name": name,
            "email": email,
            "password": "s3cret-pass",
            "role": role,
            "skills": ["rust", "sql"],
            "experience": "3 years"
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "registration should succeed");
    let body = body_json(response).await;
    let token = body["data"]["token"].as_str().expect("token").to_string();
    let user_id = body["data"]["user"]["id"]
        .as_str()
        .expect("user id")
        .to_string();
    (token, user_id)
}

/// Create a project via the API as the given engineer, returning its id.
pub async fn create_project(app: &Router, token: &str, title: &str) -> String {
    let response = post_json_auth(
        app,
        "/api/v1/projects",
        token,
        json!({
            "title": title,
            "description": "A realistic project description, long enough to validate.",
            "skills": ["rust", "postgres"],
            "difficulty": "intermediate",
            "duration": "3 months"
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "project creation should succeed");
    let body = body_json(response).await;
    body["data"]["id"].as_str().expect("project id").to_string()
}

/// Apply to a project as the given student, returning the new application id.
pub async fn apply_to_project(app: &Router, token: &str, project_id: &str) -> String {
    let response = post_json_auth(
        app,
        &format!("/api/v1/projects/{project_id}/apply"),
        token,
        json!({ "message": "I would love to work on this" }),
    )
    .await;
    assert_eq!(response.status(), 201, "apply should succeed");
    let body = body_json(response).await;
    let applications = body["data"]["applications"]
        .as_array()
        .expect("applications array");
    applications
        .last()
        .expect("at least one application")["id"]
        .as_str()
        .expect("application id")
        .to_string()
}

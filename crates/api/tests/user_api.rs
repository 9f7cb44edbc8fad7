//! HTTP-level integration tests for the `/users` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, put_json_auth, register_user};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(&app, "/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_filters_by_role(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(&app, "Engineer One", "e1@example.com", "engineer").await;
    register_user(&app, "Student One", "s1@example.com", "student").await;
    register_user(&app, "Student Two", "s2@example.com", "student").await;

    let response = get_auth(&app, "/api/v1/users?role=student", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 2);
    for user in body["data"]["data"].as_array().unwrap() {
        assert_eq!(user["role"], "student");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_unknown_user_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(&app, "Someone", "x@example.com", "student").await;
    let missing = Uuid::now_v7();
    let response = get_auth(&app, &format!("/api/v1/users/{missing}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_own_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, id) = register_user(&app, "Before Name", "me@example.com", "engineer").await;

    let response = put_json_auth(
        &app,
        &format!("/api/v1/users/{id}"),
        &token,
        json!({
            "name": "After Name",
            "bio": "I mentor Rust projects",
            "github": "https://github.com/aftername",
            "isAvailable": false
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "After Name");
    assert_eq!(body["data"]["bio"], "I mentor Rust projects");
    assert_eq!(body["data"]["isAvailable"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_other_user_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(&app, "Alice", "alice@example.com", "engineer").await;
    let (_, bob_id) = register_user(&app, "Bob", "bob@example.com", "student").await;

    let response = put_json_auth(
        &app,
        &format!("/api/v1/users/{bob_id}"),
        &token,
        json!({ "name": "Hijacked" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_role_is_immutable_via_update(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, id) = register_user(&app, "Fixed Role", "fixed@example.com", "student").await;

    // The update whitelist has no role field; a submitted one is ignored.
    let response = put_json_auth(
        &app,
        &format!("/api/v1/users/{id}"),
        &token,
        json!({ "role": "engineer", "name": "Still Student" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["role"], "student");
    assert_eq!(body["data"]["name"], "Still Student");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_github_url_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, id) = register_user(&app, "Linker", "linker@example.com", "engineer").await;

    let response = put_json_auth(
        &app,
        &format!("/api/v1/users/{id}"),
        &token,
        json!({ "github": "https://example.com/not-github" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors[0]["field"], "github");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_own_account(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, id) = register_user(&app, "Gone Soon", "gone@example.com", "student").await;
    let (other_token, _) = register_user(&app, "Stays", "stays@example.com", "student").await;

    let response = delete_auth(&app, &format!("/api/v1/users/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["message"], "User deleted successfully");

    let lookup = get_auth(&app, &format!("/api/v1/users/{id}"), &other_token).await;
    assert_eq!(lookup.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_other_account_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, _) = register_user(&app, "Alice", "alice@example.com", "engineer").await;
    let (_, bob_id) = register_user(&app, "Bob", "bob@example.com", "student").await;

    let response = delete_auth(&app, &format!("/api/v1/users/{bob_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

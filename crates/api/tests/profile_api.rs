//! HTTP-level integration tests for the `/profiles` and directory endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    apply_to_project, body_json, create_project, get, put_json_auth, register_user,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_page_shape(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, owner_id) = register_user(&app, "Owner", "owner@example.com", "engineer").await;
    let (student, _) = register_user(&app, "Student", "s@example.com", "student").await;
    let project_id = create_project(&app, &owner, "Profile project").await;
    let a1 = apply_to_project(&app, &student, &project_id).await;
    put_json_auth(
        &app,
        &format!("/api/v1/projects/{project_id}/applications/{a1}"),
        &owner,
        json!({ "action": "accept" }),
    )
    .await;

    let response = get(&app, &format!("/api/v1/profiles/{owner_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["data"]["user"]["id"], owner_id.as_str());
    assert_eq!(body["data"]["statistics"]["owned"], 1);
    assert_eq!(body["data"]["statistics"]["inProgress"], 1);
    assert_eq!(body["data"]["projects"].as_array().unwrap().len(), 1);

    let activity = &body["data"]["recentActivity"][0];
    assert_eq!(activity["type"], "owned");
    assert_eq!(activity["status"], "in-progress");
    assert_eq!(activity["project"]["id"], project_id.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_projects_relation_filter(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com", "engineer").await;
    let (student, student_id) = register_user(&app, "Student", "s@example.com", "student").await;
    let p1 = create_project(&app, &owner, "Assigned project").await;
    create_project(&app, &owner, "Unrelated project").await;
    let a1 = apply_to_project(&app, &student, &p1).await;
    put_json_auth(
        &app,
        &format!("/api/v1/projects/{p1}/applications/{a1}"),
        &owner,
        json!({ "action": "accept" }),
    )
    .await;

    let owned = get(
        &app,
        &format!("/api/v1/profiles/{student_id}/projects?type=owned"),
    )
    .await;
    let owned_body = body_json(owned).await;
    assert_eq!(owned_body["data"]["total"], 0);

    let mentored = get(
        &app,
        &format!("/api/v1/profiles/{student_id}/projects?type=mentored"),
    )
    .await;
    let mentored_body = body_json(mentored).await;
    assert_eq!(mentored_body["data"]["total"], 1);
    assert_eq!(
        mentored_body["data"]["data"][0]["title"],
        "Assigned project"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_stats_endpoint(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, owner_id) = register_user(&app, "Owner", "owner@example.com", "engineer").await;
    create_project(&app, &owner, "Counted project").await;

    let response = get(&app, &format!("/api/v1/profiles/{owner_id}/stats")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["projects"]["owned"], 1);
    assert_eq!(body["data"]["projects"]["mentored"], 0);
    assert_eq!(body["data"]["role"], "engineer");
    assert_eq!(body["data"]["rating"], 0.0);
    assert_eq!(body["data"]["totalReviews"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_avatar_update_self_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (token, id) = register_user(&app, "Pic Haver", "pic@example.com", "student").await;
    let (other_token, _) = register_user(&app, "Other", "other@example.com", "student").await;

    let forbidden = put_json_auth(
        &app,
        &format!("/api/v1/profiles/{id}/avatar"),
        &other_token,
        json!({ "avatar": "https://cdn.example.com/pic.png" }),
    )
    .await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let ok = put_json_auth(
        &app,
        &format!("/api/v1/profiles/{id}/avatar"),
        &token,
        json!({ "avatar": "https://cdn.example.com/pic.png" }),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);
    let body = body_json(ok).await;
    assert_eq!(body["data"]["avatar"], "https://cdn.example.com/pic.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mentor_directory_lists_available_engineers_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (busy_token, busy_id) =
        register_user(&app, "Busy Mentor", "busy@example.com", "engineer").await;
    register_user(&app, "Free Mentor", "free@example.com", "engineer").await;
    register_user(&app, "A Student", "s@example.com", "student").await;

    // Mark one mentor unavailable.
    put_json_auth(
        &app,
        &format!("/api/v1/users/{busy_id}"),
        &busy_token,
        json!({ "isAvailable": false }),
    )
    .await;

    let response = get(&app, "/api/v1/mentors").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["data"][0]["name"], "Free Mentor");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_student_directory(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(&app, "A Student", "s@example.com", "student").await;
    register_user(&app, "An Engineer", "e@example.com", "engineer").await;

    let response = get(&app, "/api/v1/students").await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["data"][0]["name"], "A Student");
}

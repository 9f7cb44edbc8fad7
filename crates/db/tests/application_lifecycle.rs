//! Repository-level tests for the application lifecycle transactions.
//!
//! The HTTP-level suites cover the same flows end to end; these tests pin
//! the outcome enums the repositories report, including the paths a handler
//! maps onto 404/409.

use assert_matches::assert_matches;
use mentorlink_db::models::application::{
    ApplicationStatus, ApplyOutcome, AssignOutcome, DecideAction, DecideOutcome,
};
use mentorlink_db::models::project::{
    CreateProject, Difficulty, Project, ProjectStatus, UpdateProject,
};
use mentorlink_db::models::user::{CreateUser, Role, User};
use mentorlink_db::repositories::{ApplicationRepo, ProjectRepo, UserRepo};
use sqlx::PgPool;
use uuid::Uuid;

async fn seed_user(pool: &PgPool, email: &str, role: Role) -> User {
    let input = CreateUser {
        name: "Seed User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        role,
        skills: vec!["rust".to_string()],
        experience: "2 years".to_string(),
        avatar: "https://ui-avatars.com/api/?name=Seed".to_string(),
    };
    UserRepo::create(pool, &input).await.expect("user insert")
}

async fn seed_project(pool: &PgPool, owner: &User) -> Project {
    let input = CreateProject {
        title: "Seeded project".to_string(),
        description: "A project seeded directly through the repository layer.".to_string(),
        owner_id: owner.id,
        skills: vec!["rust".to_string()],
        difficulty: Difficulty::Intermediate,
        duration: "3 months".to_string(),
        budget: None,
        github_url: None,
        live_url: None,
        images: Vec::new(),
    };
    ProjectRepo::create(pool, &input).await.expect("project insert")
}

#[sqlx::test(migrations = "./migrations")]
async fn test_apply_outcomes(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com", Role::Engineer).await;
    let student = seed_user(&pool, "student@example.com", Role::Student).await;
    let project = seed_project(&pool, &owner).await;

    // Unknown project.
    let outcome = ApplicationRepo::apply(&pool, Uuid::now_v7(), student.id, None)
        .await
        .unwrap();
    assert_matches!(outcome, ApplyOutcome::ProjectNotFound);

    // Happy path: a pending application with the message stored.
    let outcome = ApplicationRepo::apply(&pool, project.id, student.id, Some("hi"))
        .await
        .unwrap();
    let application = assert_matches!(outcome, ApplyOutcome::Applied(a) => a);
    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.message.as_deref(), Some("hi"));

    // Idempotent-apply guard.
    let outcome = ApplicationRepo::apply(&pool, project.id, student.id, None)
        .await
        .unwrap();
    assert_matches!(outcome, ApplyOutcome::AlreadyApplied);

    // Applications only while the project is open.
    let update = UpdateProject {
        status: Some(ProjectStatus::Cancelled),
        ..Default::default()
    };
    ProjectRepo::update(&pool, project.id, &update).await.unwrap();
    let other = seed_user(&pool, "other@example.com", Role::Student).await;
    let outcome = ApplicationRepo::apply(&pool, project.id, other.id, None)
        .await
        .unwrap();
    assert_matches!(outcome, ApplyOutcome::ProjectNotOpen);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_accept_rejects_pending_siblings_only(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com", Role::Engineer).await;
    let s1 = seed_user(&pool, "s1@example.com", Role::Student).await;
    let s2 = seed_user(&pool, "s2@example.com", Role::Student).await;
    let s3 = seed_user(&pool, "s3@example.com", Role::Student).await;
    let project = seed_project(&pool, &owner).await;

    let a1 = assert_matches!(
        ApplicationRepo::apply(&pool, project.id, s1.id, None).await.unwrap(),
        ApplyOutcome::Applied(a) => a
    );
    let a2 = assert_matches!(
        ApplicationRepo::apply(&pool, project.id, s2.id, None).await.unwrap(),
        ApplyOutcome::Applied(a) => a
    );
    let a3 = assert_matches!(
        ApplicationRepo::apply(&pool, project.id, s3.id, None).await.unwrap(),
        ApplyOutcome::Applied(a) => a
    );

    // Reject a2 first; the later accept must leave it untouched.
    let outcome = ApplicationRepo::decide(&pool, project.id, a2.id, DecideAction::Reject)
        .await
        .unwrap();
    assert_matches!(outcome, DecideOutcome::Decided(_));

    let outcome = ApplicationRepo::decide(&pool, project.id, a1.id, DecideAction::Accept)
        .await
        .unwrap();
    let updated = assert_matches!(outcome, DecideOutcome::Decided(p) => p);
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.student_id, Some(s1.id));

    let applications = ApplicationRepo::list_for_project(&pool, project.id)
        .await
        .unwrap();
    let status_of = |id| {
        applications
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.status)
            .unwrap()
    };
    assert_eq!(status_of(a1.id), ApplicationStatus::Accepted);
    assert_eq!(status_of(a2.id), ApplicationStatus::Rejected);
    assert_eq!(status_of(a3.id), ApplicationStatus::Rejected);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_second_accept_reports_already_assigned(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com", Role::Engineer).await;
    let s1 = seed_user(&pool, "s1@example.com", Role::Student).await;
    let s2 = seed_user(&pool, "s2@example.com", Role::Student).await;
    let project = seed_project(&pool, &owner).await;

    let a1 = assert_matches!(
        ApplicationRepo::apply(&pool, project.id, s1.id, None).await.unwrap(),
        ApplyOutcome::Applied(a) => a
    );
    let a2 = assert_matches!(
        ApplicationRepo::apply(&pool, project.id, s2.id, None).await.unwrap(),
        ApplyOutcome::Applied(a) => a
    );

    ApplicationRepo::decide(&pool, project.id, a1.id, DecideAction::Accept)
        .await
        .unwrap();

    let outcome = ApplicationRepo::decide(&pool, project.id, a2.id, DecideAction::Accept)
        .await
        .unwrap();
    // a2 was auto-rejected by the first accept, so the terminal-state guard
    // fires before the assignment check.
    assert_matches!(outcome, DecideOutcome::AlreadyDecided);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_decided_applications_are_terminal(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com", Role::Engineer).await;
    let s1 = seed_user(&pool, "s1@example.com", Role::Student).await;
    let project = seed_project(&pool, &owner).await;

    let a1 = assert_matches!(
        ApplicationRepo::apply(&pool, project.id, s1.id, None).await.unwrap(),
        ApplyOutcome::Applied(a) => a
    );
    ApplicationRepo::decide(&pool, project.id, a1.id, DecideAction::Reject)
        .await
        .unwrap();

    let outcome = ApplicationRepo::decide(&pool, project.id, a1.id, DecideAction::Accept)
        .await
        .unwrap();
    assert_matches!(outcome, DecideOutcome::AlreadyDecided);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_student_outcomes(pool: PgPool) {
    let owner = seed_user(&pool, "owner@example.com", Role::Engineer).await;
    let s1 = seed_user(&pool, "s1@example.com", Role::Student).await;
    let s2 = seed_user(&pool, "s2@example.com", Role::Student).await;
    let project = seed_project(&pool, &owner).await;

    // No application yet: nothing to accept.
    let outcome = ApplicationRepo::assign_student(&pool, project.id, s1.id)
        .await
        .unwrap();
    assert_matches!(outcome, AssignOutcome::NoPendingApplication);

    let a1 = assert_matches!(
        ApplicationRepo::apply(&pool, project.id, s1.id, None).await.unwrap(),
        ApplyOutcome::Applied(a) => a
    );
    ApplicationRepo::apply(&pool, project.id, s2.id, None)
        .await
        .unwrap();

    let outcome = ApplicationRepo::assign_student(&pool, project.id, s1.id)
        .await
        .unwrap();
    let updated = assert_matches!(outcome, AssignOutcome::Assigned(p) => p);
    assert_eq!(updated.student_id, Some(s1.id));
    assert_eq!(updated.status, ProjectStatus::InProgress);

    // The accepted application is the assigned student's.
    let applications = ApplicationRepo::list_for_project(&pool, project.id)
        .await
        .unwrap();
    let accepted: Vec<_> = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Accepted)
        .collect();
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].id, a1.id);

    // A second assignment attempt reports the existing assignment.
    let outcome = ApplicationRepo::assign_student(&pool, project.id, s2.id)
        .await
        .unwrap();
    assert_matches!(outcome, AssignOutcome::StudentAlreadyAssigned);
}

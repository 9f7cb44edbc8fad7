//! Handlers for the application lifecycle: apply, list, decide, and the
//! legacy direct-assign path.
//!
//! The invariant-bearing writes all live in `ApplicationRepo`'s guarded
//! transactions; these handlers do authorization, input validation, and
//! outcome-to-error mapping.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mentorlink_core::error::CoreError;
use mentorlink_core::types::DbId;
use mentorlink_db::models::application::{
    ApplyOutcome, AssignOutcome, DecideAction, DecideOutcome,
};
use mentorlink_db::models::user::{Role, User};
use mentorlink_db::repositories::{ApplicationRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{validate_request, AppError, AppResult, FieldError};
use crate::handlers::project::{ensure_project_exists, load_single_project_view};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::views::{application_view, ApplicationView, ProjectView};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /projects/{id}/apply`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ApplyRequest {
    #[validate(length(max = 500, message = "Message cannot be more than 500 characters"))]
    pub message: Option<String>,
}

/// Request body for `PUT /projects/{id}/applications/{app_id}`.
///
/// The action arrives as a raw string so an unrecognized value surfaces as
/// a field-level validation error rather than a body-rejection.
#[derive(Debug, Deserialize)]
pub struct DecideRequest {
    pub action: String,
}

/// Request body for `PUT /projects/{id}/assign-student`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignStudentRequest {
    pub student_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/{id}/apply
///
/// Submit an application to an open project. Students only.
pub async fn apply(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<ApplyRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProjectView>>)> {
    validate_request(&input)?;

    if auth.role != Role::Student {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only students can apply to projects".into(),
        )));
    }

    let outcome = ApplicationRepo::apply(
        &state.pool,
        project_id,
        auth.user_id,
        input.message.as_deref(),
    )
    .await?;

    match outcome {
        ApplyOutcome::Applied(application) => {
            tracing::info!(
                project_id = %project_id,
                student_id = %auth.user_id,
                application_id = %application.id,
                "Application submitted"
            );
            let project = ensure_project_exists(&state.pool, project_id).await?;
            let view = load_single_project_view(&state.pool, &project).await?;
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::with_message(
                    view,
                    "Application submitted successfully",
                )),
            ))
        }
        ApplyOutcome::ProjectNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })),
        ApplyOutcome::ProjectNotOpen => Err(AppError::Core(CoreError::Conflict(
            "Project is not open for applications".into(),
        ))),
        ApplyOutcome::AlreadyApplied => Err(AppError::Core(CoreError::Conflict(
            "You have already applied to this project".into(),
        ))),
    }
}

/// GET /api/v1/projects/{id}/applications
///
/// The project's application list with applicant detail. Owner only.
pub async fn list_applications(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Vec<ApplicationView>>>> {
    let project = ensure_project_exists(&state.pool, project_id).await?;
    if project.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to view applications for this project".into(),
        )));
    }

    let applications = ApplicationRepo::list_for_project(&state.pool, project_id).await?;
    let student_ids: Vec<DbId> = applications.iter().map(|a| a.student_id).collect();
    let users: HashMap<DbId, User> = UserRepo::find_by_ids(&state.pool, &student_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let views: Vec<ApplicationView> = applications
        .iter()
        .map(|a| application_view(a, &users))
        .collect();
    Ok(Json(ApiResponse::data(views)))
}

/// PUT /api/v1/projects/{id}/applications/{app_id}
///
/// Accept or reject a pending application. Owner only. Accept assigns the
/// student, moves the project to in-progress, and auto-rejects the other
/// pending applications in the same transaction.
pub async fn decide(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((project_id, application_id)): Path<(DbId, DbId)>,
    Json(input): Json<DecideRequest>,
) -> AppResult<Json<ApiResponse<ProjectView>>> {
    let action = parse_action(&input.action)?;

    let project = ensure_project_exists(&state.pool, project_id).await?;
    if project.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to manage applications for this project".into(),
        )));
    }

    let outcome =
        ApplicationRepo::decide(&state.pool, project_id, application_id, action).await?;

    match outcome {
        DecideOutcome::Decided(project) => {
            let (verb, message) = match action {
                DecideAction::Accept => ("accepted", "Application accepted successfully"),
                DecideAction::Reject => ("rejected", "Application rejected successfully"),
            };
            tracing::info!(
                project_id = %project_id,
                application_id = %application_id,
                decision = verb,
                "Application decided"
            );
            let view = load_single_project_view(&state.pool, &project).await?;
            Ok(Json(ApiResponse::with_message(view, message)))
        }
        DecideOutcome::ProjectNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })),
        DecideOutcome::ApplicationNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id: application_id,
        })),
        DecideOutcome::AlreadyDecided => Err(AppError::Core(CoreError::Conflict(
            "Application has already been decided".into(),
        ))),
        DecideOutcome::StudentAlreadyAssigned => Err(AppError::Core(CoreError::Conflict(
            "Project already has a student assigned".into(),
        ))),
    }
}

/// PUT /api/v1/projects/{id}/assign-student
///
/// Legacy direct assignment. Routed through the same guarded accept logic:
/// the named student's pending application is accepted, so the project can
/// never gain an assigned student without an accepted application.
pub async fn assign_student(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<AssignStudentRequest>,
) -> AppResult<Json<ApiResponse<ProjectView>>> {
    let project = ensure_project_exists(&state.pool, project_id).await?;
    if project.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to assign student to this project".into(),
        )));
    }

    UserRepo::find_student(&state.pool, input.student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: input.student_id,
        }))?;

    let outcome =
        ApplicationRepo::assign_student(&state.pool, project_id, input.student_id).await?;

    match outcome {
        AssignOutcome::Assigned(project) => {
            tracing::info!(
                project_id = %project_id,
                student_id = %input.student_id,
                "Student assigned via legacy endpoint"
            );
            let view = load_single_project_view(&state.pool, &project).await?;
            Ok(Json(ApiResponse::data(view)))
        }
        AssignOutcome::ProjectNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })),
        AssignOutcome::NoPendingApplication => Err(AppError::Core(CoreError::Conflict(
            "Student has no pending application on this project".into(),
        ))),
        AssignOutcome::StudentAlreadyAssigned => Err(AppError::Core(CoreError::Conflict(
            "Project already has a student assigned".into(),
        ))),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the decision action, reporting unrecognized values as a
/// field-level validation error.
fn parse_action(raw: &str) -> Result<DecideAction, AppError> {
    match raw {
        "accept" => Ok(DecideAction::Accept),
        "reject" => Ok(DecideAction::Reject),
        _ => Err(AppError::Validation(vec![FieldError {
            field: "action".into(),
            message: "Action must be either accept or reject".into(),
        }])),
    }
}

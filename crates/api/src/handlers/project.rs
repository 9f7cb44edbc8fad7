//! Handlers for the `/projects` resource.

use std::collections::{HashMap, HashSet};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mentorlink_core::error::CoreError;
use mentorlink_core::pagination::{clamp_limit, clamp_page, offset};
use mentorlink_core::types::DbId;
use mentorlink_db::models::project::{
    CreateProject, Difficulty, Project, ProjectFilter, ProjectStatus, UpdateProject,
};
use mentorlink_db::models::user::{Role, User};
use mentorlink_db::repositories::{ApplicationRepo, ProjectRepo, UserRepo};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{validate_request, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::parse_skills;
use crate::response::{ApiResponse, Page};
use crate::state::AppState;
use crate::validation::{GITHUB_REPO_RE, HTTP_URL_RE};
use crate::views::{project_view, ProjectView};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ListProjectsParams {
    pub status: Option<ProjectStatus>,
    pub difficulty: Option<Difficulty>,
    /// Comma-separated skill list; matches on overlap.
    pub skills: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request body for `POST /projects`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 5, max = 100, message = "Title must be between 5 and 100 characters"))]
    pub title: String,
    #[validate(length(
        min = 20,
        max = 2000,
        message = "Description must be between 20 and 2000 characters"
    ))]
    pub description: String,
    #[validate(length(min = 1, message = "Please provide at least one skill"))]
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
    #[validate(length(min = 1, message = "Please specify project duration"))]
    pub duration: String,
    #[validate(range(min = 0.0, message = "Budget cannot be negative"))]
    pub budget: Option<f64>,
    #[validate(regex(path = *GITHUB_REPO_RE, message = "Please add a valid GitHub repository URL"))]
    pub github_url: Option<String>,
    #[validate(regex(path = *HTTP_URL_RE, message = "Please add a valid live URL"))]
    pub live_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Request body for `PUT /projects/{id}`. All fields optional.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(length(min = 5, max = 100, message = "Title must be between 5 and 100 characters"))]
    pub title: Option<String>,
    #[validate(length(
        min = 20,
        max = 2000,
        message = "Description must be between 20 and 2000 characters"
    ))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Please provide at least one skill"))]
    pub skills: Option<Vec<String>>,
    pub difficulty: Option<Difficulty>,
    pub status: Option<ProjectStatus>,
    #[validate(length(min = 1, message = "Please specify project duration"))]
    pub duration: Option<String>,
    #[validate(range(min = 0.0, message = "Budget cannot be negative"))]
    pub budget: Option<f64>,
    #[validate(regex(path = *GITHUB_REPO_RE, message = "Please add a valid GitHub repository URL"))]
    pub github_url: Option<String>,
    #[validate(regex(path = *HTTP_URL_RE, message = "Please add a valid live URL"))]
    pub live_url: Option<String>,
    pub images: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
///
/// Public listing with optional status/difficulty/skills filters,
/// newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsParams>,
) -> AppResult<Json<ApiResponse<Page<ProjectView>>>> {
    let filter = ProjectFilter {
        status: params.status,
        difficulty: params.difficulty,
        skills: parse_skills(params.skills.as_deref()),
    };
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let projects = ProjectRepo::list(&state.pool, &filter, limit, offset(page, limit)).await?;
    let total = ProjectRepo::count(&state.pool, &filter).await?;

    let views = load_project_views(&state.pool, &projects).await?;
    Ok(Json(ApiResponse::data(Page::new(views, total, page, limit))))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ProjectView>>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    let view = load_single_project_view(&state.pool, &project).await?;
    Ok(Json(ApiResponse::data(view)))
}

/// POST /api/v1/projects
///
/// Only engineers may post projects; the acting user becomes the owner.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProjectView>>)> {
    if auth.role != Role::Engineer {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only engineers can create projects".into(),
        )));
    }
    validate_request(&input)?;

    let create = CreateProject {
        title: input.title,
        description: input.description,
        owner_id: auth.user_id,
        skills: input.skills,
        difficulty: input.difficulty,
        duration: input.duration,
        budget: input.budget,
        github_url: input.github_url,
        live_url: input.live_url,
        images: input.images,
    };
    let project = ProjectRepo::create(&state.pool, &create).await?;

    tracing::info!(project_id = %project.id, owner_id = %auth.user_id, "Project created");

    let view = load_single_project_view(&state.pool, &project).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::data(view))))
}

/// PUT /api/v1/projects/{id}
///
/// Owner-only; applies the whitelisted mutable fields.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProjectRequest>,
) -> AppResult<Json<ApiResponse<ProjectView>>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    if project.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to update this project".into(),
        )));
    }
    validate_request(&input)?;

    let update = UpdateProject {
        title: input.title,
        description: input.description,
        skills: input.skills,
        difficulty: input.difficulty,
        status: input.status,
        duration: input.duration,
        budget: input.budget,
        github_url: input.github_url,
        live_url: input.live_url,
        images: input.images,
    };
    let project = ProjectRepo::update(&state.pool, id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = %id, "Project updated");

    let view = load_single_project_view(&state.pool, &project).await?;
    Ok(Json(ApiResponse::data(view)))
}

/// DELETE /api/v1/projects/{id}
///
/// Owner-only; applications cascade with the project row.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    if project.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to delete this project".into(),
        )));
    }

    ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(project_id = %id, "Project deleted");

    Ok(Json(ApiResponse::data(json!({
        "message": "Project deleted successfully"
    }))))
}

// ---------------------------------------------------------------------------
// Helpers shared with the application/profile/dashboard handlers
// ---------------------------------------------------------------------------

/// Verify that a project exists, returning the full row.
pub(crate) async fn ensure_project_exists(pool: &PgPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// Assemble full [`ProjectView`]s for a set of project rows.
///
/// Batch-loads all application rows and every referenced user (owners,
/// assigned students, applicants) in two queries, then shapes in memory.
pub(crate) async fn load_project_views(
    pool: &PgPool,
    projects: &[Project],
) -> AppResult<Vec<ProjectView>> {
    let project_ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
    let applications = ApplicationRepo::list_for_projects(pool, &project_ids).await?;

    let mut user_ids: HashSet<DbId> = HashSet::new();
    for project in projects {
        user_ids.insert(project.owner_id);
        if let Some(student_id) = project.student_id {
            user_ids.insert(student_id);
        }
    }
    for application in &applications {
        user_ids.insert(application.student_id);
    }
    let ids: Vec<DbId> = user_ids.into_iter().collect();
    let users: HashMap<DbId, User> = UserRepo::find_by_ids(pool, &ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let mut by_project: HashMap<DbId, Vec<_>> = HashMap::new();
    for application in applications {
        by_project
            .entry(application.project_id)
            .or_default()
            .push(application);
    }

    Ok(projects
        .iter()
        .map(|p| {
            let apps = by_project.get(&p.id).map(Vec::as_slice).unwrap_or(&[]);
            project_view(p, apps, &users)
        })
        .collect())
}

/// Assemble the [`ProjectView`] of a single project row.
pub(crate) async fn load_single_project_view(
    pool: &PgPool,
    project: &Project,
) -> AppResult<ProjectView> {
    let mut views = load_project_views(pool, std::slice::from_ref(project)).await?;
    views.pop().ok_or_else(|| {
        AppError::InternalError("Project view assembly returned no result".into())
    })
}

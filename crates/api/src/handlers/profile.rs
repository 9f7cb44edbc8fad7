//! Handlers for the `/profiles` resource: public profile pages, profile
//! editing, per-user project listings, and statistics.

use axum::extract::{Path, Query, State};
use axum::Json;
use mentorlink_core::error::CoreError;
use mentorlink_core::pagination::{clamp_limit, clamp_page, offset};
use mentorlink_core::types::DbId;
use mentorlink_db::models::project::ProjectRelation;
use mentorlink_db::models::user::Role;
use mentorlink_db::repositories::{ProjectRepo, StatsRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{validate_request, AppError, AppResult};
use crate::handlers::project::load_project_views;
use crate::handlers::user::UpdateProfileRequest;
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, Page};
use crate::state::AppState;
use crate::validation::HTTP_URL_RE;
use crate::views::{activity_view, ActivityView, ProjectView, PublicUser, StatisticsView};

/// How many related projects a profile page shows.
const PROFILE_RECENT_PROJECTS: i64 = 5;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /profiles/{id}/projects`.
#[derive(Debug, Deserialize)]
pub struct ProfileProjectsParams {
    /// `owned`, `mentored`, or `all` (default).
    #[serde(rename = "type")]
    pub relation: Option<ProjectRelation>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request body for `PUT /profiles/{id}/avatar`.
#[derive(Debug, Deserialize, Validate)]
pub struct AvatarRequest {
    #[validate(regex(path = *HTTP_URL_RE, message = "Please provide a valid URL"))]
    pub avatar: String,
}

/// Payload for `GET /profiles/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub user: PublicUser,
    pub projects: Vec<ProjectView>,
    pub statistics: StatisticsView,
    pub recent_activity: Vec<ActivityView>,
}

/// Payload for `GET /profiles/{id}/stats`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsData {
    pub projects: StatisticsView,
    pub rating: f64,
    pub total_reviews: i32,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/profiles/{id}
///
/// Public profile page: the user, their most recent related projects,
/// statistics, and a recent-activity feed.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ProfileData>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let projects = ProjectRepo::list_for_user(
        &state.pool,
        id,
        ProjectRelation::All,
        PROFILE_RECENT_PROJECTS,
        0,
    )
    .await?;
    let counts = StatsRepo::profile_counts(&state.pool, id).await?;

    let recent_activity: Vec<ActivityView> =
        projects.iter().map(|p| activity_view(p, id)).collect();
    let project_views = load_project_views(&state.pool, &projects).await?;

    Ok(Json(ApiResponse::data(ProfileData {
        user: PublicUser::from(&user),
        projects: project_views,
        statistics: StatisticsView::from(counts),
        recent_activity,
    })))
}

/// PUT /api/v1/profiles/{id}
///
/// Same whitelist and authorization as `PUT /users/{id}`.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    if auth.user_id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to update this profile".into(),
        )));
    }
    validate_request(&input)?;

    let user = UserRepo::update(&state.pool, id, &input.into())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = %id, "Profile updated");
    Ok(Json(ApiResponse::data(PublicUser::from(&user))))
}

/// GET /api/v1/profiles/{id}/projects
///
/// Paginated projects related to the user, filtered by relationship.
pub async fn list_projects(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ProfileProjectsParams>,
) -> AppResult<Json<ApiResponse<Page<ProjectView>>>> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let relation = params.relation.unwrap_or(ProjectRelation::All);
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let projects =
        ProjectRepo::list_for_user(&state.pool, id, relation, limit, offset(page, limit)).await?;
    let total = ProjectRepo::count_for_user(&state.pool, id, relation).await?;

    let views = load_project_views(&state.pool, &projects).await?;
    Ok(Json(ApiResponse::data(Page::new(views, total, page, limit))))
}

/// GET /api/v1/profiles/{id}/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<ProfileStatsData>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let counts = StatsRepo::profile_counts(&state.pool, id).await?;

    Ok(Json(ApiResponse::data(ProfileStatsData {
        projects: StatisticsView::from(counts),
        rating: user.rating,
        total_reviews: user.total_reviews,
        role: user.role,
    })))
}

/// PUT /api/v1/profiles/{id}/avatar
pub async fn update_avatar(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AvatarRequest>,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    if auth.user_id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to update this avatar".into(),
        )));
    }
    validate_request(&input)?;

    let user = UserRepo::update_avatar(&state.pool, id, &input.avatar)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = %id, "Avatar updated");
    Ok(Json(ApiResponse::data(PublicUser::from(&user))))
}

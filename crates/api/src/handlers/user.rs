//! Handlers for the `/users` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use mentorlink_core::error::CoreError;
use mentorlink_core::pagination::{clamp_limit, clamp_page, offset};
use mentorlink_core::types::DbId;
use mentorlink_db::models::user::{Role, UpdateUser, UserFilter};
use mentorlink_db::repositories::UserRepo;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::{validate_request, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::parse_skills;
use crate::response::{ApiResponse, Page};
use crate::state::AppState;
use crate::validation::{GITHUB_PROFILE_RE, HTTP_URL_RE, LINKEDIN_RE};
use crate::views::PublicUser;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /users`.
#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    pub role: Option<Role>,
    /// Comma-separated skill list; matches on overlap.
    pub skills: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request body for profile updates (`PUT /users/{id}` and
/// `PUT /profiles/{id}`). Only these fields are owner-mutable; role,
/// email, and the rating counters have no update path.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "Bio cannot be more than 500 characters"))]
    pub bio: Option<String>,
    pub location: Option<String>,
    #[validate(regex(path = *GITHUB_PROFILE_RE, message = "Please add a valid GitHub URL"))]
    pub github: Option<String>,
    #[validate(regex(path = *LINKEDIN_RE, message = "Please add a valid LinkedIn URL"))]
    pub linkedin: Option<String>,
    #[validate(regex(path = *HTTP_URL_RE, message = "Please add a valid website URL"))]
    pub website: Option<String>,
    pub skills: Option<Vec<String>>,
    #[validate(length(min = 1, message = "Experience cannot be empty"))]
    pub experience: Option<String>,
    pub is_available: Option<bool>,
}

impl From<UpdateProfileRequest> for UpdateUser {
    fn from(input: UpdateProfileRequest) -> Self {
        UpdateUser {
            name: input.name,
            bio: input.bio,
            location: input.location,
            github: input.github,
            linkedin: input.linkedin,
            website: input.website,
            skills: input.skills,
            experience: input.experience,
            is_available: input.is_available,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/users
///
/// Directory listing with optional role/skills filters, newest first.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> AppResult<Json<ApiResponse<Page<PublicUser>>>> {
    let filter = UserFilter {
        role: params.role,
        skills: parse_skills(params.skills.as_deref()),
    };
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let users = UserRepo::list(&state.pool, &filter, limit, offset(page, limit)).await?;
    let total = UserRepo::count(&state.pool, &filter).await?;

    let data: Vec<PublicUser> = users.iter().map(PublicUser::from).collect();
    Ok(Json(ApiResponse::data(Page::new(data, total, page, limit))))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(ApiResponse::data(PublicUser::from(&user))))
}

/// PUT /api/v1/users/{id}
///
/// A user may only update their own record.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    if auth.user_id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to update this user".into(),
        )));
    }
    validate_request(&input)?;

    let user = UserRepo::update(&state.pool, id, &input.into())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = %id, "User profile updated");
    Ok(Json(ApiResponse::data(PublicUser::from(&user))))
}

/// DELETE /api/v1/users/{id}
///
/// A user may only delete their own account. Owned projects cascade.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if auth.user_id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to delete this user".into(),
        )));
    }

    let deleted = UserRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
    }

    tracing::info!(user_id = %id, "User account deleted");
    Ok(Json(ApiResponse::data(json!({
        "message": "User deleted successfully"
    }))))
}

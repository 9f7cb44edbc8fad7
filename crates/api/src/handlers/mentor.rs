//! Handlers for the public `/mentors` directory.

use axum::extract::{Path, Query, State};
use axum::Json;
use mentorlink_core::error::CoreError;
use mentorlink_core::pagination::{clamp_limit, clamp_page, offset};
use mentorlink_core::types::DbId;
use mentorlink_db::models::user::DirectoryFilter;
use mentorlink_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::query::parse_skills;
use crate::response::{ApiResponse, Page};
use crate::state::AppState;
use crate::views::PublicUser;

/// Query parameters for the mentor/student directory listings.
#[derive(Debug, Deserialize)]
pub struct DirectoryParams {
    /// Comma-separated skill list; matches on overlap.
    pub skills: Option<String>,
    /// Case-insensitive substring match on location.
    pub location: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl DirectoryParams {
    pub fn filter(&self) -> DirectoryFilter {
        DirectoryFilter {
            skills: parse_skills(self.skills.as_deref()),
            location: self.location.clone(),
        }
    }
}

/// GET /api/v1/mentors
///
/// Available engineers, best-rated first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DirectoryParams>,
) -> AppResult<Json<ApiResponse<Page<PublicUser>>>> {
    let filter = params.filter();
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let mentors = UserRepo::list_mentors(&state.pool, &filter, limit, offset(page, limit)).await?;
    let total = UserRepo::count_mentors(&state.pool, &filter).await?;

    let data: Vec<PublicUser> = mentors.iter().map(PublicUser::from).collect();
    Ok(Json(ApiResponse::data(Page::new(data, total, page, limit))))
}

/// GET /api/v1/mentors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    let mentor = UserRepo::find_mentor(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mentor",
            id,
        }))?;
    Ok(Json(ApiResponse::data(PublicUser::from(&mentor))))
}

//! Handlers for the public `/students` directory.

use axum::extract::{Path, Query, State};
use axum::Json;
use mentorlink_core::error::CoreError;
use mentorlink_core::pagination::{clamp_limit, clamp_page, offset};
use mentorlink_core::types::DbId;
use mentorlink_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::mentor::DirectoryParams;
use crate::response::{ApiResponse, Page};
use crate::state::AppState;
use crate::views::PublicUser;

/// GET /api/v1/students
///
/// Students, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DirectoryParams>,
) -> AppResult<Json<ApiResponse<Page<PublicUser>>>> {
    let filter = params.filter();
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let students =
        UserRepo::list_students(&state.pool, &filter, limit, offset(page, limit)).await?;
    let total = UserRepo::count_students(&state.pool, &filter).await?;

    let data: Vec<PublicUser> = students.iter().map(PublicUser::from).collect();
    Ok(Json(ApiResponse::data(Page::new(data, total, page, limit))))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    let student = UserRepo::find_student(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(ApiResponse::data(PublicUser::from(&student))))
}

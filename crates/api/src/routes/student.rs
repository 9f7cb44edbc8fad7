//! Route definitions for the public `/students` directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(student::list))
        .route("/{id}", get(student::get_by_id))
}

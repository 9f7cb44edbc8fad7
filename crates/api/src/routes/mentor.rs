//! Route definitions for the public `/mentors` directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::mentor;
use crate::state::AppState;

/// Routes mounted at `/mentors`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mentor::list))
        .route("/{id}", get(mentor::get_by_id))
}

//! Route definitions for the `/projects` resource, including the
//! application lifecycle endpoints scoped under a project.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{application, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// POST   /{id}/apply                        -> apply
/// GET    /{id}/applications                 -> list_applications
/// PUT    /{id}/applications/{app_id}        -> decide
/// PUT    /{id}/assign-student               -> assign_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/apply", post(application::apply))
        .route("/{id}/applications", get(application::list_applications))
        .route("/{id}/applications/{app_id}", put(application::decide))
        .route("/{id}/assign-student", put(application::assign_student))
}

//! Route definitions for the `/profiles` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/{id}/projects", get(profile::list_projects))
        .route("/{id}/stats", get(profile::get_stats))
        .route("/{id}/avatar", put(profile::update_avatar))
}

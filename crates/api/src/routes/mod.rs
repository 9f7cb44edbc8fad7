//! Route definitions, one module per resource.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod mentor;
pub mod profile;
pub mod project;
pub mod student;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                           register (public)
/// /auth/login                              login (public)
/// /auth/refresh                            refresh (public)
/// /auth/logout                             logout (requires auth)
/// /auth/me                                 current user (requires auth)
///
/// /users                                   list (requires auth)
/// /users/{id}                              get, update (self), delete (self)
///
/// /projects                                list (public), create (engineer)
/// /projects/{id}                           get (public), update/delete (owner)
/// /projects/{id}/apply                     submit application (student)
/// /projects/{id}/applications              list applications (owner)
/// /projects/{id}/applications/{app_id}     accept/reject (owner)
/// /projects/{id}/assign-student            legacy direct assign (owner)
///
/// /mentors                                 list (public)
/// /mentors/{id}                            get (public)
/// /students                                list (public)
/// /students/{id}                           get (public)
///
/// /profiles/{id}                           profile page (public), update (self)
/// /profiles/{id}/projects                  related projects (public)
/// /profiles/{id}/stats                     statistics (public)
/// /profiles/{id}/avatar                    update avatar (self)
///
/// /dashboard/home                          homepage content (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/projects", project::router())
        .nest("/mentors", mentor::router())
        .nest("/students", student::router())
        .nest("/profiles", profile::router())
        .nest("/dashboard", dashboard::router())
}

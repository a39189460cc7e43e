//! Route definitions, one module per resource.

pub mod auth;
pub mod health;
pub mod leads;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login         login (public)
/// /auth/verify        token check (requires auth)
/// /auth/register      demo no-op (public)
///
/// /leads              list (requires auth), create (public contact form)
/// /leads/{id}         update status, delete (requires auth)
///
/// /projects           list (public), create (requires auth, multipart)
/// /projects/{id}      update (multipart), delete (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/leads", leads::router())
        .nest("/projects", projects::router())
}

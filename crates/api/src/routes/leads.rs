//! Route definitions for the `/leads` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Routes mounted at `/leads`.
///
/// ```text
/// GET    /      -> paginated list (requires auth)
/// POST   /      -> create (public contact form)
/// PUT    /{id}  -> status transition (requires auth)
/// DELETE /{id}  -> hard delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list).post(leads::create))
        .route("/{id}", put(leads::update_status).delete(leads::delete))
}

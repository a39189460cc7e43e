//! Route definitions for the `/projects` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::Router;

use designmonk_core::ingest::MAX_UPLOAD_BYTES;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /      -> full list, newest first (public)
/// POST   /      -> create with multipart image (requires auth)
/// PUT    /{id}  -> update, optional replacement image (requires auth)
/// DELETE /{id}  -> hard delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route("/{id}", put(projects::update).delete(projects::delete))
        // Axum's default 2 MiB body cap is far below the upload ceiling;
        // raise it here and let ingestion enforce the real limit.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
}

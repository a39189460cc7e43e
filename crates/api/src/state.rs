use std::sync::Arc;

use crate::auth::credentials::CredentialStore;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: designmonk_db::DbPool,
    /// Server configuration (JWT secret, uploads directory, timeouts).
    pub config: Arc<ServerConfig>,
    /// Credential backend checked at login.
    pub credentials: Arc<dyn CredentialStore>,
}

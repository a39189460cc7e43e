//! Handlers for the `/auth` resource (login, verify, register).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use designmonk_core::error::CoreError;

use crate::auth::jwt::generate_token;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The only role the deployment knows.
const ADMIN_ROLE: &str = "admin";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public identity info embedded in auth responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub email: String,
    pub role: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

/// Response for `GET /auth/verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub user: UserInfo,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

/// Response for `POST /auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate against the credential store and issue a signed token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    if !state.credentials.verify(&input.email, &input.password) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_token(&input.email, ADMIN_ROLE, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(email = %input.email, "admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        token,
        user: UserInfo {
            email: input.email,
            role: ADMIN_ROLE.to_string(),
        },
    }))
}

/// GET /api/auth/verify
///
/// Succeeds iff the Bearer token is valid; returns the embedded identity.
pub async fn verify(user: AuthUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        success: true,
        user: UserInfo {
            email: user.email,
            role: user.role,
        },
    })
}

/// POST /api/auth/register
///
/// Demo endpoint: hashes the password and reports success without
/// persisting anything. There is no multi-user model; the endpoint exists
/// for parity with the original deployment.
pub async fn register(Json(input): Json<RegisterRequest>) -> AppResult<Json<RegisterResponse>> {
    hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    Ok(Json(RegisterResponse {
        success: true,
        message: "User created successfully",
        user: UserInfo {
            email: input.email,
            role: input.role.unwrap_or_else(|| ADMIN_ROLE.to_string()),
        },
    }))
}

//! Handlers for the `/leads` resource.
//!
//! Lead creation is public (it backs the site's contact form); listing,
//! status transitions, and deletion require an authenticated admin.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use designmonk_core::error::CoreError;
use designmonk_core::types::DbId;
use designmonk_db::models::lead::{CreateLead, Lead, UpdateLeadStatus};
use designmonk_db::repositories::{clamp_limit, clamp_page, lead_repo, LeadRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::LeadListParams;
use crate::response::{MessageResponse, Pagination};
use crate::state::AppState;

/// Response body for the paginated leads listing.
#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub leads: Vec<Lead>,
    pub pagination: Pagination,
}

/// Deserialize a request body into `T`, mapping failures (missing fields,
/// out-of-enum values) to a uniform 400 validation error instead of axum's
/// default rejection.
fn from_body<T: serde::de::DeserializeOwned>(body: Value) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// GET /api/leads?page=&limit=&sortBy=&sortOrder=
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<LeadListParams>,
) -> AppResult<Json<LeadListResponse>> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    // Unknown sort fields fall back to creation time.
    let sort_col = params
        .sort_by
        .as_deref()
        .and_then(lead_repo::sort_column)
        .unwrap_or("created_at");
    let descending = !matches!(params.sort_order.as_deref(), Some("asc"));

    let (leads, total) = LeadRepo::list_page(&state.pool, page, limit, sort_col, descending).await?;

    Ok(Json(LeadListResponse {
        leads,
        pagination: Pagination::new(page, limit, total),
    }))
}

/// POST /api/leads
///
/// Public contact-form submission. `status` defaults to `new` and `source`
/// to `Contact Form`.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Lead>)> {
    let input: CreateLead = from_body(body)?;

    for (field, value) in [
        ("name", &input.name),
        ("email", &input.email),
        ("phone", &input.phone),
        ("message", &input.message),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{field}' must not be empty"
            ))));
        }
    }

    let lead = LeadRepo::create(&state.pool, &input).await?;
    tracing::info!(lead_id = lead.id, source = %lead.source, "lead created");
    Ok((StatusCode::CREATED, Json(lead)))
}

/// PUT /api/leads/{id}
///
/// Replaces the status; the only mutation leads support.
pub async fn update_status(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<Lead>> {
    let input: UpdateLeadStatus = from_body(body)?;

    let lead = LeadRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;

    Ok(Json(lead))
}

/// DELETE /api/leads/{id}
pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = LeadRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Lead", id }));
    }
    Ok(Json(MessageResponse {
        message: "Lead deleted",
    }))
}

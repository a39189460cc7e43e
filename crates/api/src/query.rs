//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination and sorting parameters for the leads listing
/// (`?page=&limit=&sortBy=&sortOrder=`).
///
/// Values are clamped in the repository layer; `sortBy` is resolved against
/// a column allow-list and falls back to creation time when unknown.
#[derive(Debug, Deserialize)]
pub struct LeadListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default `desc`).
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

//! Shared response types for API handlers.

use serde::Serialize;

/// Pagination metadata attached to paginated listings.
#[derive(Debug, Serialize)]
pub struct Pagination {
    /// 1-based page number that was served.
    pub page: i64,
    /// Page size that was applied (after clamping).
    pub limit: i64,
    /// Total number of records across all pages.
    pub total: i64,
    /// Total number of pages: `ceil(total / limit)`.
    pub pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            pages: (total as u64).div_ceil(limit as u64) as i64,
        }
    }
}

/// Standard `{ "message": ... }` body for delete confirmations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

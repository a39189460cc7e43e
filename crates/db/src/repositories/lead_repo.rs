//! Repository for the `leads` table.

use sqlx::PgPool;

use designmonk_core::types::DbId;

use crate::models::lead::{CreateLead, Lead};
use designmonk_core::lead::{LeadStatus, DEFAULT_SOURCE};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, message, source, status, created_at";

/// Map an API sort-field name to a real column.
///
/// Acts as an allow-list: anything outside it returns `None` and callers
/// fall back to the default ordering, so user input never reaches the
/// ORDER BY clause directly.
pub fn sort_column(field: &str) -> Option<&'static str> {
    match field {
        "createdAt" | "created_at" => Some("created_at"),
        "name" => Some("name"),
        "email" => Some("email"),
        "phone" => Some("phone"),
        "source" => Some("source"),
        "status" => Some("status"),
        _ => None,
    }
}

/// Provides CRUD operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, returning the created row.
    ///
    /// `source` defaults to [`DEFAULT_SOURCE`] and `status` to `new`.
    pub async fn create(pool: &PgPool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, email, phone, message, source, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(input.source.as_deref().unwrap_or(DEFAULT_SOURCE))
            .bind(input.status.unwrap_or(LeadStatus::New).as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a lead by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of leads plus the total row count.
    ///
    /// `sort_col` must come from [`sort_column`]; `page` is 1-based and
    /// both `page` and `limit` are assumed pre-clamped.
    pub async fn list_page(
        pool: &PgPool,
        page: i64,
        limit: i64,
        sort_col: &'static str,
        descending: bool,
    ) -> Result<(Vec<Lead>, i64), sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads")
            .fetch_one(pool)
            .await?;

        let direction = if descending { "DESC" } else { "ASC" };
        // Secondary key keeps the ordering stable when the sort column ties.
        let query = format!(
            "SELECT {COLUMNS} FROM leads
             ORDER BY {sort_col} {direction}, id {direction}
             LIMIT $1 OFFSET $2"
        );
        let leads = sqlx::query_as::<_, Lead>(&query)
            .bind(limit)
            .bind((page - 1) * limit)
            .fetch_all(pool)
            .await?;

        Ok((leads, total))
    }

    /// Replace a lead's status. Returns `None` if no row with `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: LeadStatus,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET status = $2 WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a lead by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

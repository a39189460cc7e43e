//! Lead entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use designmonk_core::lead::LeadStatus;
use designmonk_core::types::{DbId, Timestamp};

/// A row from the `leads` table. Serialized with camelCase wire names to
/// match the public API.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub source: String,
    #[sqlx(try_from = "String")]
    pub status: LeadStatus,
    pub created_at: Timestamp,
}

/// DTO for creating a new lead from a contact-form submission.
///
/// `source` defaults to `"Contact Form"` and `status` to `new` when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub source: Option<String>,
    pub status: Option<LeadStatus>,
}

/// DTO for the admin status transition. Status is the only mutable field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadStatus {
    pub status: LeadStatus,
}

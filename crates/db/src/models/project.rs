//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use designmonk_core::project::{Bhk, Category, Layout, Pricing, PropertyType, SizeBucket, Style};
use designmonk_core::types::{DbId, Timestamp};

/// A row from the `projects` table. Serialized with camelCase wire names to
/// match the public API.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub project_name: String,
    #[sqlx(try_from = "String")]
    pub category: Category,
    #[sqlx(try_from = "String")]
    pub style: Style,
    #[sqlx(try_from = "String")]
    pub layout: Layout,
    pub location: String,
    #[sqlx(try_from = "String")]
    pub pricing: Pricing,
    #[sqlx(try_from = "String")]
    pub bhk: Bhk,
    pub scope: String,
    #[sqlx(try_from = "String")]
    pub property_type: PropertyType,
    #[sqlx(try_from = "String")]
    pub size: SizeBucket,
    pub price_min: i64,
    pub price_max: i64,
    /// Public path of the stored compressed image (`/uploads/<file>`).
    pub image_url: String,
    /// Informational byte counts from the compression pass.
    pub original_size: i64,
    pub compressed_size: i64,
    pub created_at: Timestamp,
}

/// DTO for inserting a project. The image fields are filled in by the
/// handler after a successful ingestion; a project is never created
/// without them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub project_name: String,
    pub category: Category,
    pub style: Style,
    pub layout: Layout,
    pub location: String,
    pub pricing: Pricing,
    pub bhk: Bhk,
    pub scope: String,
    pub property_type: PropertyType,
    pub size: SizeBucket,
    pub price_min: i64,
    pub price_max: i64,
    pub image_url: String,
    pub original_size: i64,
    pub compressed_size: i64,
}

/// DTO for updating a project. Only non-`None` fields are applied; the
/// image trio is set together when a replacement image was ingested.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub project_name: Option<String>,
    pub category: Option<Category>,
    pub style: Option<Style>,
    pub layout: Option<Layout>,
    pub location: Option<String>,
    pub pricing: Option<Pricing>,
    pub bhk: Option<Bhk>,
    pub scope: Option<String>,
    pub property_type: Option<PropertyType>,
    pub size: Option<SizeBucket>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub image_url: Option<String>,
    pub original_size: Option<i64>,
    pub compressed_size: Option<i64>,
}

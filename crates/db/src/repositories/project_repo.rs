//! Repository for the `projects` table.

use sqlx::PgPool;

use designmonk_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, project_name, category, style, layout, location, \
                       pricing, bhk, scope, property_type, size, price_min, price_max, \
                       image_url, original_size, compressed_size, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, project_name, category, style, layout, location, pricing,
                 bhk, scope, property_type, size, price_min, price_max,
                 image_url, original_size, compressed_size)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.project_name)
            .bind(input.category.as_str())
            .bind(input.style.as_str())
            .bind(input.layout.as_str())
            .bind(&input.location)
            .bind(input.pricing.as_str())
            .bind(input.bhk.as_str())
            .bind(&input.scope)
            .bind(input.property_type.as_str())
            .bind(input.size.as_str())
            .bind(input.price_min)
            .bind(input.price_max)
            .bind(&input.image_url)
            .bind(input.original_size)
            .bind(input.compressed_size)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                project_name = COALESCE($3, project_name),
                category = COALESCE($4, category),
                style = COALESCE($5, style),
                layout = COALESCE($6, layout),
                location = COALESCE($7, location),
                pricing = COALESCE($8, pricing),
                bhk = COALESCE($9, bhk),
                scope = COALESCE($10, scope),
                property_type = COALESCE($11, property_type),
                size = COALESCE($12, size),
                price_min = COALESCE($13, price_min),
                price_max = COALESCE($14, price_max),
                image_url = COALESCE($15, image_url),
                original_size = COALESCE($16, original_size),
                compressed_size = COALESCE($17, compressed_size)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.project_name)
            .bind(input.category.map(|v| v.as_str()))
            .bind(input.style.map(|v| v.as_str()))
            .bind(input.layout.map(|v| v.as_str()))
            .bind(&input.location)
            .bind(input.pricing.map(|v| v.as_str()))
            .bind(input.bhk.map(|v| v.as_str()))
            .bind(&input.scope)
            .bind(input.property_type.map(|v| v.as_str()))
            .bind(input.size.map(|v| v.as_str()))
            .bind(input.price_min)
            .bind(input.price_max)
            .bind(&input.image_url)
            .bind(input.original_size)
            .bind(input.compressed_size)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// The stored image file is intentionally left in place; orphaned
    /// uploads are a known, non-fatal cleanup task.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

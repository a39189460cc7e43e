//! Handlers for the `/projects` resource.
//!
//! Create and update take multipart bodies: the scalar fields as text parts
//! plus an `image` file part. The image is compressed and stored before the
//! record is written, so a record never references a file that does not
//! exist. The reverse (an orphaned file when the record write fails) is a
//! known, non-fatal cleanup task.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use designmonk_core::error::CoreError;
use designmonk_core::types::DbId;
use designmonk_db::models::project::{CreateProject, Project, UpdateProject};
use designmonk_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::ingest::{self, StoredImage};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Multipart file part name carrying the project image.
const IMAGE_FIELD: &str = "image";

/// Parsed multipart form: scalar fields as a JSON object plus the ingested
/// image, when one was sent.
struct ProjectForm {
    fields: Map<String, Value>,
    image: Option<StoredImage>,
}

/// Drain a multipart body into a [`ProjectForm`].
///
/// Text parts become JSON strings except `priceMin`/`priceMax`, which are
/// parsed to numbers (multipart carries them as text). The image part is
/// ingested as soon as it is seen.
async fn read_form(state: &AppState, mut multipart: Multipart) -> AppResult<ProjectForm> {
    let mut fields = Map::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let mime = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            image = Some(ingest::store(&state.config.uploads_dir, &mime, &data).await?);
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let value = match name.as_str() {
            "priceMin" | "priceMax" => {
                let number: i64 = text.trim().parse().map_err(|_| {
                    AppError::Core(CoreError::Validation(format!("'{name}' must be a number")))
                })?;
                Value::Number(number.into())
            }
            _ => Value::String(text),
        };
        fields.insert(name, value);
    }

    Ok(ProjectForm { fields, image })
}

/// Deserialize collected form fields into a DTO, mapping failures (missing
/// fields, out-of-enum values) to a uniform 400 validation error.
fn from_fields<T: serde::de::DeserializeOwned>(fields: Map<String, Value>) -> AppResult<T> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}

/// GET /api/projects
///
/// Public full listing, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_all(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
///
/// Requires an image part; the record is only written after the image has
/// been compressed and stored.
pub async fn create(
    _user: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Project>)> {
    let form = read_form(&state, multipart).await?;

    let Some(image) = form.image else {
        return Err(AppError::BadRequest("Image is required".to_string()));
    };

    let mut fields = form.fields;
    fields.insert("imageUrl".to_string(), Value::String(image.url));
    fields.insert(
        "originalSize".to_string(),
        Value::Number(image.original_size.into()),
    );
    fields.insert(
        "compressedSize".to_string(),
        Value::Number(image.compressed_size.into()),
    );

    let input: CreateProject = from_fields(fields)?;

    for (field, value) in [
        ("title", &input.title),
        ("projectName", &input.project_name),
        ("location", &input.location),
        ("scope", &input.scope),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{field}' must not be empty"
            ))));
        }
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, title = %project.title, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
///
/// Patches scalar fields; when a new image part is present the stored image
/// info is replaced as well.
pub async fn update(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<Project>> {
    let form = read_form(&state, multipart).await?;

    let mut patch: UpdateProject = from_fields(form.fields)?;
    if let Some(image) = form.image {
        patch.image_url = Some(image.url);
        patch.original_size = Some(image.original_size);
        patch.compressed_size = Some(image.compressed_size);
    }

    let project = ProjectRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Hard delete; the stored image file is intentionally left in place.
pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }
    Ok(Json(MessageResponse {
        message: "Project deleted",
    }))
}

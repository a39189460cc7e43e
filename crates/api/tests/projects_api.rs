//! HTTP-level integration tests for the `/api/projects` endpoints,
//! including the multipart upload and compression pipeline.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{
    body_json, get, login_admin, multipart_request, png_bytes, project_fields, ImagePart,
};
use sqlx::PgPool;

fn sample_image() -> ImagePart {
    ImagePart {
        filename: "room.png",
        content_type: "image/png",
        bytes: png_bytes(2400, 1600),
    }
}

async fn create_project(app: Router, token: &str) -> serde_json::Value {
    let response = multipart_request(
        app,
        "POST",
        "/api/projects",
        token,
        &project_fields(),
        Some(sample_image()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_compresses_and_stores_the_image(pool: PgPool) {
    let (app, config) = common::build_test_app_with_config(pool);
    let token = login_admin(app.clone()).await;

    let raw = sample_image();
    let raw_len = raw.bytes.len() as i64;

    let response = multipart_request(
        app,
        "POST",
        "/api/projects",
        &token,
        &project_fields(),
        Some(raw),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let project = body_json(response).await;

    // Numeric fields come back as numbers, not strings.
    assert_eq!(project["priceMin"], 150_000);
    assert_eq!(project["priceMax"], 450_000);
    assert_eq!(project["originalSize"], raw_len);
    assert!(project["compressedSize"].as_i64().unwrap() > 0);

    // The stored file exists under the uploads directory.
    let image_url = project["imageUrl"].as_str().unwrap();
    let filename = image_url
        .strip_prefix("/uploads/")
        .expect("imageUrl must live under /uploads/");
    let stored = config.uploads_dir.join(filename);
    assert!(stored.exists(), "compressed file must be on disk");

    // The stored JPEG fits the 1920x1080 bounding box with aspect kept.
    let decoded = image::open(&stored).unwrap();
    assert_eq!(decoded.width(), 1620); // 1080 * 2400/1600
    assert_eq!(decoded.height(), 1080);
}

/// No image part: client error, nothing persisted.
#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_image_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = login_admin(app.clone()).await;

    let response =
        multipart_request(app, "POST", "/api/projects", &token, &project_fields(), None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Image is required");

    let all = designmonk_db::repositories::ProjectRepo::list_all(&pool)
        .await
        .unwrap();
    assert!(all.is_empty(), "no record may be persisted");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_non_image_upload(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = login_admin(app.clone()).await;

    let not_an_image = ImagePart {
        filename: "notes.txt",
        content_type: "text/plain",
        bytes: b"just some text".to_vec(),
    };
    let response = multipart_request(
        app,
        "POST",
        "/api/projects",
        &token,
        &project_fields(),
        Some(not_an_image),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let all = designmonk_db::repositories::ProjectRepo::list_all(&pool)
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_undecodable_image_bytes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = login_admin(app.clone()).await;

    let corrupt = ImagePart {
        filename: "broken.png",
        content_type: "image/png",
        bytes: vec![0u8; 64],
    };
    let response = multipart_request(
        app,
        "POST",
        "/api/projects",
        &token,
        &project_fields(),
        Some(corrupt),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let all = designmonk_db::repositories::ProjectRepo::list_all(&pool)
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_out_of_enum_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = login_admin(app.clone()).await;

    let mut fields = project_fields();
    for field in fields.iter_mut() {
        if field.0 == "category" {
            field.1 = "Bathroom";
        }
    }
    let response = multipart_request(
        app,
        "POST",
        "/api/projects",
        &token,
        &fields,
        Some(sample_image()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let all = designmonk_db::repositories::ProjectRepo::list_all(&pool)
        .await
        .unwrap();
    assert!(all.is_empty());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// The portfolio listing is public and newest-first.
#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_public_and_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let first = create_project(app.clone(), &token).await;
    let second = create_project(app.clone(), &token).await;

    let response = get(app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().expect("response must be a bare array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], second["id"]);
    assert_eq!(items[1]["id"], first["id"]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Scalar-only update keeps the existing image info.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_without_image_keeps_image_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let project = create_project(app.clone(), &token).await;
    let id = project["id"].as_i64().unwrap();

    let response = multipart_request(
        app,
        "PUT",
        &format!("/api/projects/{id}"),
        &token,
        &[("title", "Renamed Penthouse"), ("style", "Traditional")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Renamed Penthouse");
    assert_eq!(updated["style"], "Traditional");
    assert_eq!(updated["imageUrl"], project["imageUrl"]);
    assert_eq!(updated["compressedSize"], project["compressedSize"]);
}

/// Sending a new image replaces imageUrl and both size fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_image_replaces_image_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let project = create_project(app.clone(), &token).await;
    let id = project["id"].as_i64().unwrap();

    let replacement = ImagePart {
        filename: "new.png",
        content_type: "image/png",
        bytes: png_bytes(800, 600),
    };
    let new_len = replacement.bytes.len() as i64;

    let response = multipart_request(
        app,
        "PUT",
        &format!("/api/projects/{id}"),
        &token,
        &[],
        Some(replacement),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_ne!(updated["imageUrl"], project["imageUrl"]);
    assert_eq!(updated["originalSize"], new_len);
    // Scalars untouched.
    assert_eq!(updated["title"], project["title"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_project_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let response = multipart_request(
        app,
        "PUT",
        "/api/projects/999999",
        &token,
        &[("title", "ghost")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_project_but_keeps_file(pool: PgPool) {
    let (app, config) = common::build_test_app_with_config(pool.clone());
    let token = login_admin(app.clone()).await;

    let project = create_project(app.clone(), &token).await;
    let id = project["id"].as_i64().unwrap();
    let filename = project["imageUrl"]
        .as_str()
        .unwrap()
        .strip_prefix("/uploads/")
        .unwrap()
        .to_string();

    let response = common::delete_auth(app, &format!("/api/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project deleted");

    let stored = designmonk_db::repositories::ProjectRepo::find_by_id(&pool, id)
        .await
        .unwrap();
    assert!(stored.is_none());

    // Image cleanup is deliberately out of scope; the file stays behind.
    assert!(config.uploads_dir.join(filename).exists());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_project_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let response = common::delete_auth(app, "/api/projects/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Static serving
// ---------------------------------------------------------------------------

/// The stored compressed image is reachable at its public /uploads path.
#[sqlx::test(migrations = "../db/migrations")]
async fn uploaded_image_is_served_statically(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = login_admin(app.clone()).await;

    let project = create_project(app.clone(), &token).await;
    let image_url = project["imageUrl"].as_str().unwrap();

    let response = get(app, image_url).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#![allow(dead_code)] // Each test binary uses a different subset of helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use designmonk_api::auth::credentials::FixedAdminCredentials;
use designmonk_api::auth::jwt::JwtConfig;
use designmonk_api::config::{AdminConfig, ServerConfig};
use designmonk_api::router::build_app_router;
use designmonk_api::state::AppState;

/// Fixed admin identity used across the integration tests.
pub const ADMIN_EMAIL: &str = "admin@thedesignermonk.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Build a test `ServerConfig` with safe defaults and a fresh per-test
/// uploads directory under the system temp dir.
pub fn test_config() -> ServerConfig {
    let uploads_dir = std::env::temp_dir().join(format!(
        "designmonk-tests-{}",
        uuid::Uuid::new_v4().simple()
    ));
    std::fs::create_dir_all(&uploads_dir).expect("uploads dir must be creatable");

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        uploads_dir,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_hours: 24,
        },
        admin: AdminConfig {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
    }
}

/// Build the full application router plus the config it was built from.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_config(pool: PgPool) -> (Router, ServerConfig) {
    let config = test_config();
    let credentials = Arc::new(FixedAdminCredentials::from_config(&config.admin));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        credentials,
    };

    (build_app_router(state, &config), config)
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool).0
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON request with the given method, optionally authenticated.
pub async fn send_json(
    app: Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an unauthenticated POST with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", path, None, body).await
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Log in as the fixed admin and return the issued token.
pub async fn login_admin(app: Router) -> String {
    let body = serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "designmonk-test-boundary";

/// An image part for [`multipart_request`].
pub struct ImagePart {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Build and send a multipart/form-data request with text fields and an
/// optional image part.
pub async fn multipart_request(
    app: Router,
    method: &str,
    path: &str,
    token: &str,
    fields: &[(&str, &str)],
    image: Option<ImagePart>,
) -> Response<Body> {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some(image) = image {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\n",
                image.filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", image.content_type).as_bytes());
        body.extend_from_slice(&image.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(method)
        .uri(path)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Encode a solid-color RGB image of the given dimensions as PNG bytes.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([90, 140, 200]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("png encode should succeed");
    out.into_inner()
}

/// The full set of valid scalar fields for a project form.
pub fn project_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("title", "Skyline Penthouse"),
        ("projectName", "Skyline"),
        ("category", "Living Room"),
        ("style", "Modern"),
        ("layout", "L-Shaped"),
        ("location", "Mumbai"),
        ("pricing", "10-20"),
        ("bhk", "3-BHK"),
        ("scope", "Full interiors with custom wardrobes"),
        ("propertyType", "Apartment"),
        ("size", "1000 to 2500 sq ft"),
        ("priceMin", "150000"),
        ("priceMax", "450000"),
    ]
}

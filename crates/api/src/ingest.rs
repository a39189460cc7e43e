//! Upload ingestion: gate, compress, and persist an image to the uploads
//! directory.
//!
//! The pure compression step lives in `designmonk_core::ingest`; this module
//! adds the filesystem side. The caller must not persist a record row until
//! [`store`] has returned successfully, so a failed ingestion never leaves a
//! record pointing at a missing file.

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use designmonk_core::ingest::{check_upload, compress, IngestLimits};

use crate::error::{AppError, AppResult};

/// Result of a stored upload, ready to be written onto a project record.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Public path the file is served from (`/uploads/<name>`).
    pub url: String,
    /// Raw payload size before compression, in bytes.
    pub original_size: i64,
    /// On-disk size after compression, in bytes.
    pub compressed_size: i64,
}

/// Generate a unique upload file name: millisecond timestamp plus a random
/// suffix. Uniqueness makes the uploads directory append-only, so no
/// locking is needed.
fn unique_filename() -> String {
    format!("{}-{}.jpg", Utc::now().timestamp_millis(), Uuid::new_v4().simple())
}

/// Validate, compress, and write an uploaded image.
///
/// Rejects non-image MIME types and payloads over the size ceiling before
/// any decode attempt. On success the compressed JPEG exists on disk under
/// `uploads_dir` and the returned [`StoredImage`] carries its public path
/// and before/after byte sizes.
pub async fn store(
    uploads_dir: &Path,
    declared_mime: &str,
    raw: &[u8],
) -> AppResult<StoredImage> {
    let limits = IngestLimits::default();
    check_upload(declared_mime, raw.len(), &limits)?;

    let compressed = compress(raw, &limits)?;

    let filename = unique_filename();
    let dest = uploads_dir.join(&filename);
    tokio::fs::write(&dest, &compressed.bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

    tracing::info!(
        file = %filename,
        original_kb = compressed.original_size / 1024,
        compressed_kb = compressed.bytes.len() / 1024,
        width = compressed.width,
        height = compressed.height,
        "image compressed and stored"
    );

    Ok(StoredImage {
        url: format!("/uploads/{filename}"),
        original_size: compressed.original_size as i64,
        compressed_size: compressed.bytes.len() as i64,
    })
}

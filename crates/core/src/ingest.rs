//! Image compression step of the upload pipeline.
//!
//! Pure: bytes in, bytes out. The api crate owns the surrounding concerns
//! (multipart parsing, unique file names, writing to the uploads directory).
//!
//! Accepted uploads are decoded, resized to fit inside a bounding box while
//! preserving aspect ratio (never upscaled), and re-encoded as quality-80
//! JPEG. The `image` crate emits baseline JPEG; the original system produced
//! progressive, which is an accepted deviation.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::ExtendedColorType;

/// Upload ceiling: 50 MiB of raw bytes, rejected before any decode attempt.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Limits applied to every ingested image.
#[derive(Debug, Clone)]
pub struct IngestLimits {
    /// Raw payload ceiling in bytes.
    pub max_bytes: usize,
    /// Bounding box the decoded image must fit inside.
    pub max_width: u32,
    pub max_height: u32,
    /// JPEG re-encode quality (1-100).
    pub jpeg_quality: u8,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self {
            max_bytes: MAX_UPLOAD_BYTES,
            max_width: 1920,
            max_height: 1080,
            jpeg_quality: 80,
        }
    }
}

/// Why an upload was rejected or failed to process.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Only image files allowed (got '{0}')")]
    UnsupportedMediaType(String),

    #[error("Upload of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result of a successful compression pass.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    /// JPEG-encoded output.
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Raw payload size before compression.
    pub original_size: usize,
}

/// Gate an upload on its declared MIME type and raw size.
///
/// Runs before any decode attempt so an oversize payload is never parsed.
pub fn check_upload(
    declared_mime: &str,
    size: usize,
    limits: &IngestLimits,
) -> Result<(), IngestError> {
    if !declared_mime.starts_with("image/") {
        return Err(IngestError::UnsupportedMediaType(declared_mime.to_string()));
    }
    if size > limits.max_bytes {
        return Err(IngestError::TooLarge {
            size,
            limit: limits.max_bytes,
        });
    }
    Ok(())
}

/// Decode, bound-resize, and re-encode an image as JPEG.
///
/// Images already within the bounding box keep their dimensions; larger
/// images are scaled down to fit, preserving aspect ratio.
pub fn compress(raw: &[u8], limits: &IngestLimits) -> Result<CompressedImage, IngestError> {
    let img = image::load_from_memory(raw)?;

    let oversized = img.width() > limits.max_width || img.height() > limits.max_height;
    let img = if oversized {
        // `resize` fits within the box and keeps aspect ratio.
        img.resize(limits.max_width, limits.max_height, FilterType::Lanczos3)
    } else {
        img
    };

    // JPEG has no alpha channel; normalize to RGB8 before encoding.
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, limits.jpeg_quality);
    encoder.encode(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)?;

    Ok(CompressedImage {
        bytes,
        width,
        height,
        original_size: raw.len(),
    })
}

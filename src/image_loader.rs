//! Image input validation and decoding
//!
//! Accepts the upload formats JPEG, PNG, GIF (first frame) and WebP, up to a
//! configured size limit, and decodes them into RGBA8 via the `image` crate.
//!
//! ## Design
//!
//! The format is sniffed from the leading bytes rather than trusted from the
//! file name, so a mislabeled file is still rejected or decoded correctly.
//! The extension only names an unrecognized file in error messages.

use std::path::Path;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};

/// Accepted image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Gif,
        ImageFormat::WebP,
    ];

    /// Detect format from the leading bytes of the file
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::UnsupportedFormat` if the bytes are not a
    /// recognized image or belong to a format that is not accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<ImageFormat> {
        let detected = image::guess_format(bytes).map_err(|_| AnalysisError::UnsupportedFormat {
            format: "unknown".to_string(),
        })?;

        match detected {
            image::ImageFormat::Jpeg => Ok(ImageFormat::Jpeg),
            image::ImageFormat::Png => Ok(ImageFormat::Png),
            image::ImageFormat::Gif => Ok(ImageFormat::Gif),
            image::ImageFormat::WebP => Ok(ImageFormat::WebP),
            other => Err(AnalysisError::UnsupportedFormat {
                format: format!("{:?}", other).to_lowercase(),
            }),
        }
    }

    /// MIME type of the format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
        }
    }

    fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::WebP => image::ImageFormat::WebP,
        }
    }
}

/// Check input size against the configured limit
fn check_size(size: u64, config: &AnalysisConfig) -> Result<()> {
    if size > config.max_file_size {
        return Err(AnalysisError::FileTooLarge {
            size,
            limit: config.max_file_size,
        });
    }
    Ok(())
}

/// Validate and decode image bytes into RGBA8
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The byte stream is empty or exceeds `config.max_file_size`
/// - The format is not recognized or not in `config.allowed_formats`
/// - Decoding fails
pub fn decode_image(bytes: &[u8], config: &AnalysisConfig) -> Result<RgbaImage> {
    if bytes.is_empty() {
        return Err(AnalysisError::ImageLoadError {
            message: "empty image data".to_string(),
            source: None,
        });
    }
    check_size(bytes.len() as u64, config)?;

    let format = ImageFormat::from_bytes(bytes)?;
    if !config.allowed_formats.contains(&format) {
        return Err(AnalysisError::UnsupportedFormat {
            format: format.mime_type().to_string(),
        });
    }

    let image = image::load_from_memory_with_format(bytes, format.to_image_format())
        .map_err(|e| AnalysisError::image_load(format!("Failed to decode {} image", format.mime_type()), e))?;

    debug!(
        format = format.mime_type(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    Ok(image.to_rgba8())
}

/// Load an image from disk and decode it into RGBA8
///
/// The file size is checked before the file is read.
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - File cannot be opened or read
/// - File exceeds `config.max_file_size`
/// - Format is not supported
/// - Decoding fails
///
/// # Example
///
/// ```rust,no_run
/// use tonescan::image_loader::load_image;
/// use tonescan::AnalysisConfig;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.jpg"), &AnalysisConfig::default())?;
/// println!("Loaded image: {}x{}", image.width(), image.height());
/// # Ok::<(), tonescan::AnalysisError>(())
/// ```
pub fn load_image(path: &Path, config: &AnalysisConfig) -> Result<RgbaImage> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;
    check_size(metadata.len(), config)?;

    let bytes = std::fs::read(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to read image file: {}", path.display()), e)
    })?;

    decode_image(&bytes, config).map_err(|err| match err {
        AnalysisError::UnsupportedFormat { format } if format == "unknown" => {
            AnalysisError::UnsupportedFormat {
                format: path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(str::to_lowercase)
                    .unwrap_or(format),
            }
        }
        other => other,
    })
}

//! Error types for the tonescan library

use thiserror::Error;

/// Result type alias for tonescan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for image color analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be read or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image format is not one of the accepted upload formats
    #[error("Unsupported image format: {format}")]
    UnsupportedFormat { format: String },

    /// Input exceeds the configured upload limit
    #[error("Image too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },

    /// Dominant color could not be extracted from the decoded pixels
    #[error("Color extraction failed: {message}")]
    ExtractionError { message: String },

    /// Hex color string could not be parsed
    #[error("Invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Size for user messages, rounded down so the stated limit is never exceeded
fn readable_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;

    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::ExtractionError {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if the user can fix this by supplying a different image
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::ImageLoadError { .. }
                | AnalysisError::UnsupportedFormat { .. }
                | AnalysisError::FileTooLarge { .. }
                | AnalysisError::ExtractionError { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ImageLoadError { .. } => {
                "Could not read the image. Please check the file and try again.".to_string()
            }
            AnalysisError::UnsupportedFormat { .. } => {
                "Unsupported file type. Only JPEG, PNG, GIF and WEBP images can be analyzed."
                    .to_string()
            }
            AnalysisError::FileTooLarge { limit, .. } => {
                format!(
                    "The file is too large. Images up to {} are accepted.",
                    readable_size(*limit)
                )
            }
            AnalysisError::ExtractionError { .. } => {
                "Could not analyze the image colors. Please try a different image.".to_string()
            }
            AnalysisError::InvalidHex { .. } => {
                "Color codes must look like #rrggbb.".to_string()
            }
            _ => "Color analysis failed. Please check the settings and try again.".to_string(),
        }
    }
}

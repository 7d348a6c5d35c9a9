//! Configuration for image input and dominant color extraction.
//!
//! Only the input and extraction stages are tunable. Tone weights, palette
//! offsets and combinations are fixed constants (see [`crate::constants`]).
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use tonescan::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("tonescan.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), tonescan::AnalysisError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{input, quantize};
use crate::error::{AnalysisError, Result};
use crate::image_loader::ImageFormat;

/// Input and extraction settings for an analysis.
///
/// Missing fields in a JSON file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Pixel sampling step for extraction, 1 (every pixel) to 10
    pub quality: u32,

    /// Number of colors the quantizer produces before the dominant one is picked
    pub color_count: usize,

    /// Maximum accepted input size in bytes
    pub max_file_size: u64,

    /// Accepted input formats
    pub allowed_formats: Vec<ImageFormat>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            quality: input::HIGHEST_QUALITY,
            color_count: quantize::DOMINANT_COLOR_COUNT,
            max_file_size: input::MAX_FILE_SIZE,
            allowed_formats: ImageFormat::ALL.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Check that every setting is usable
    pub fn validate(&self) -> Result<()> {
        if !(input::HIGHEST_QUALITY..=input::LOWEST_QUALITY).contains(&self.quality) {
            return Err(AnalysisError::invalid_parameter("quality", self.quality));
        }
        if !(quantize::MIN_COLOR_COUNT..=quantize::MAX_COLOR_COUNT).contains(&self.color_count) {
            return Err(AnalysisError::invalid_parameter("color_count", self.color_count));
        }
        if self.max_file_size == 0 {
            return Err(AnalysisError::invalid_parameter("max_file_size", self.max_file_size));
        }
        if self.allowed_formats.is_empty() {
            return Err(AnalysisError::invalid_parameter("allowed_formats", "[]"));
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.quality, 1);
        assert_eq!(config.color_count, 5);
        assert_eq!(config.max_file_size, 5 * 1024 * 1024);
        assert_eq!(config.allowed_formats.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_quality = AnalysisConfig {
            quality: 0,
            ..AnalysisConfig::default()
        };
        assert!(zero_quality.validate().is_err());

        // The quantizer only accepts sampling steps up to 10
        let coarse_quality = AnalysisConfig {
            quality: 11,
            ..AnalysisConfig::default()
        };
        assert!(matches!(
            coarse_quality.validate(),
            Err(AnalysisError::InvalidParameter { .. })
        ));
        let lowest_quality = AnalysisConfig {
            quality: 10,
            ..AnalysisConfig::default()
        };
        assert!(lowest_quality.validate().is_ok());

        let too_many_colors = AnalysisConfig {
            color_count: 300,
            ..AnalysisConfig::default()
        };
        assert!(too_many_colors.validate().is_err());

        let no_formats = AnalysisConfig {
            allowed_formats: Vec::new(),
            ..AnalysisConfig::default()
        };
        assert!(no_formats.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "quality": 10, "allowed_formats": ["png", "webp"] }"#).unwrap();
        assert_eq!(config.quality, 10);
        assert_eq!(config.color_count, 5);
        assert_eq!(config.allowed_formats, vec![ImageFormat::Png, ImageFormat::WebP]);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AnalysisConfig {
            quality: 3,
            ..AnalysisConfig::default()
        };
        config.to_json_file(&path).unwrap();

        let loaded = AnalysisConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AnalysisConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, AnalysisError::ConfigError { .. }));
    }
}

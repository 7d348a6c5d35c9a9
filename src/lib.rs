//! # tonescan
//!
//! A Rust crate for deriving color suggestions from an image.
//!
//! This library:
//! - Extracts the dominant color of an image with median cut quantization
//! - Classifies the color as warm or cool with a qualitative sub-label
//! - Derives five palette variants through fixed channel offsets
//! - Groups the variants into three named combinations
//!
//! ## Example
//!
//! ```rust,no_run
//! use tonescan::{analyze_file, AnalysisReport};
//! use std::path::Path;
//!
//! let report = analyze_file(Path::new("photo.jpg"))?;
//! println!("Dominant: {}, tone: {}", report.dominant.hex, report.tone);
//! # Ok::<(), tonescan::AnalysisError>(())
//! ```

use std::fmt;
use std::path::Path;

use image::RgbaImage;
use palette::{Lab, Lch};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod image_loader;

pub use color::{
    assemble_combinations, classify_tone, generate_palette, Color, Palette, ResolvedCombination,
    Swatch, ToneLabel, Variant,
};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use extraction::{DominantColorExtractor, MedianCutExtractor};
pub use image_loader::ImageFormat;

/// Dominant color with perceptual and display representations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantColor {
    /// 8-bit sRGB channels
    pub rgb: Color,
    /// Hexadecimal color representation
    pub hex: String,
    /// CIE Lab coordinates (perceptually uniform)
    pub lab: Lab,
    /// CIE LCh coordinates (cylindrical Lab representation)
    pub lch: Lch,
}

impl From<Color> for DominantColor {
    fn from(rgb: Color) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            lab: rgb.to_lab(),
            lch: rgb.to_lch(),
        }
    }
}

/// One palette variant with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub variant: Variant,
    #[serde(flatten)]
    pub swatch: Swatch,
}

/// Complete result of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub dominant: DominantColor,
    pub tone: ToneLabel,
    pub palette: Vec<PaletteEntry>,
    pub combinations: Vec<ResolvedCombination>,
}

impl AnalysisReport {
    /// Run the pure derivation stages for a known color
    pub fn for_color(color: Color) -> Self {
        let tone = classify_tone(color);
        let palette = generate_palette(color);
        let combinations = assemble_combinations(&palette);

        debug!(color = %color, tone = %tone, "derived palette");

        Self {
            dominant: DominantColor::from(color),
            tone,
            palette: palette
                .entries()
                .map(|(variant, color)| PaletteEntry {
                    variant,
                    swatch: Swatch::from(color),
                })
                .collect(),
            combinations: combinations.into(),
        }
    }

    /// The generated palette as a typed value
    pub fn palette(&self) -> Palette {
        generate_palette(self.dominant.rgb)
    }
}

/// Runs the full pipeline with a configuration and an extractor
pub struct Analyzer {
    config: AnalysisConfig,
    extractor: Box<dyn DominantColorExtractor + Send + Sync>,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
            extractor: Box::new(MedianCutExtractor::new()),
        }
    }
}

impl Analyzer {
    /// Create an analyzer using the median cut extractor
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` if the configuration is invalid
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let extractor = MedianCutExtractor::with_color_count(config.color_count)?;
        Ok(Self {
            config,
            extractor: Box::new(extractor),
        })
    }

    /// Create an analyzer with a custom dominant color extractor
    pub fn with_extractor<E>(config: AnalysisConfig, extractor: E) -> Result<Self>
    where
        E: DominantColorExtractor + Send + Sync + 'static,
    {
        config.validate()?;
        Ok(Self {
            config,
            extractor: Box::new(extractor),
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze an image file
    pub fn analyze_path(&self, path: &Path) -> Result<AnalysisReport> {
        let _span = debug_span!("analysis", path = %path.display()).entered();
        let image = image_loader::load_image(path, &self.config)?;
        self.analyze_image(&image)
    }

    /// Analyze encoded image bytes
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<AnalysisReport> {
        let _span = debug_span!("analysis", size = bytes.len()).entered();
        let image = image_loader::decode_image(bytes, &self.config)?;
        self.analyze_image(&image)
    }

    /// Analyze an already decoded image
    pub fn analyze_image(&self, image: &RgbaImage) -> Result<AnalysisReport> {
        let dominant = self
            .extractor
            .extract_dominant_color(image, self.config.quality)?;
        debug!(dominant = %dominant, quality = self.config.quality, "extracted dominant color");
        Ok(AnalysisReport::for_color(dominant))
    }
}

/// Analyze an image file with default settings
///
/// This is the main entry point. The file must be a JPEG, PNG, GIF or WebP
/// image of at most 5 MiB.
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - Image cannot be read, is too large or has an unsupported format
/// - No dominant color can be extracted (e.g. fully transparent or white image)
pub fn analyze_file(path: &Path) -> Result<AnalysisReport> {
    Analyzer::default().analyze_path(path)
}

/// Analyze encoded image bytes with default settings
pub fn analyze_bytes(bytes: &[u8]) -> Result<AnalysisReport> {
    Analyzer::default().analyze_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    struct FixedExtractor(Color);

    impl DominantColorExtractor for FixedExtractor {
        fn extract_dominant_color(&self, _image: &RgbaImage, _quality: u32) -> Result<Color> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_report_for_warm_color() {
        let report = AnalysisReport::for_color(Color::new(200, 100, 50));
        assert_eq!(report.dominant.hex, "#c86432");
        assert_eq!(report.tone, ToneLabel::WarmIntense);
        assert_eq!(report.palette.len(), 5);
        assert_eq!(report.palette[0].variant, Variant::Brighter);
        assert_eq!(report.palette[0].swatch.hex, "#c89664");
        assert_eq!(report.combinations.len(), 3);
        assert_eq!(report.combinations[1].name, "triad");
    }

    #[test]
    fn test_report_combinations_follow_palette() {
        let report = AnalysisReport::for_color(Color::new(10, 10, 200));
        let palette = report.palette();
        for combination in &report.combinations {
            for (color, &position) in combination.colors().zip(&combination.positions) {
                assert_eq!(color, palette[position]);
                assert_eq!(color, report.palette[position].swatch.rgb);
            }
        }
    }

    #[test]
    fn test_report_serialization() {
        let report = AnalysisReport::for_color(Color::new(10, 10, 200));

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"tone\":\"cool/cold\""));
        assert!(json.contains("\"variant\":\"brighter\""));
        assert!(json.contains("\"hex\":\"#0a3cfa\""));

        let deserialized: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.dominant.rgb, report.dominant.rgb);
        assert_eq!(deserialized.tone, report.tone);
        assert_eq!(deserialized.palette, report.palette);
        assert_eq!(deserialized.combinations, report.combinations);
        assert!((deserialized.dominant.lab.l - report.dominant.lab.l).abs() < 1e-4);
    }

    #[test]
    fn test_analyzer_uses_custom_extractor() {
        let analyzer =
            Analyzer::with_extractor(AnalysisConfig::default(), FixedExtractor(Color::new(1, 2, 3)))
                .unwrap();
        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let report = analyzer.analyze_image(&image).unwrap();
        assert_eq!(report.dominant.rgb, Color::new(1, 2, 3));
    }

    #[test]
    fn test_analyzer_rejects_invalid_config() {
        let config = AnalysisConfig {
            quality: 0,
            ..AnalysisConfig::default()
        };
        assert!(Analyzer::new(config).is_err());
    }

    #[test]
    fn test_analyze_empty_bytes() {
        let err = analyze_bytes(&[]).unwrap_err();
        assert!(err.is_input_error());
    }
}

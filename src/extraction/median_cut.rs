//! Dominant color extraction with modified median cut quantization
//!
//! Quantization is delegated to the `color-thief` crate, which bins pixels
//! into a 5 bit per channel histogram and splits boxes first by population,
//! then by population x volume. Its color map is ordered largest box first,
//! so the first entry is the dominant color.
//!
//! `color-thief` asserts on its inputs, so quality and color count are
//! validated here before the call.

use color_thief::ColorFormat;
use image::RgbaImage;
use tracing::debug;

use super::DominantColorExtractor;
use crate::color::Color;
use crate::constants::input::{HIGHEST_QUALITY, LOWEST_QUALITY};
use crate::constants::quantize::{
    DOMINANT_COLOR_COUNT, MAX_COLOR_COUNT, MIN_ALPHA, MIN_COLOR_COUNT, WHITE_THRESHOLD,
};
use crate::{AnalysisError, Result};

/// Sampling step as accepted by the quantizer
fn sampling_step(quality: u32) -> Result<u8> {
    if !(HIGHEST_QUALITY..=LOWEST_QUALITY).contains(&quality) {
        return Err(AnalysisError::invalid_parameter("quality", quality));
    }
    u8::try_from(quality).map_err(|_| AnalysisError::invalid_parameter("quality", quality))
}

/// Number of sampled pixels the quantizer will consider
///
/// Takes every `quality`-th pixel in row-major order and skips mostly
/// transparent and near-white pixels, as the quantizer does.
pub fn usable_pixel_count(image: &RgbaImage, quality: u32) -> usize {
    image
        .pixels()
        .step_by(quality.max(1) as usize)
        .filter(|pixel| {
            let [r, g, b, a] = pixel.0;
            a >= MIN_ALPHA && !(r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD)
        })
        .count()
}

/// Dominant color extractor based on modified median cut quantization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedianCutExtractor {
    color_count: u8,
}

impl Default for MedianCutExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MedianCutExtractor {
    /// Create an extractor that quantizes to five colors
    pub fn new() -> Self {
        Self {
            color_count: DOMINANT_COLOR_COUNT as u8,
        }
    }

    /// Create an extractor with a custom color map size
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` if `color_count` is outside `[2, 255]`
    pub fn with_color_count(color_count: usize) -> Result<Self> {
        if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&color_count) {
            return Err(AnalysisError::invalid_parameter("color_count", color_count));
        }
        let color_count = u8::try_from(color_count)
            .map_err(|_| AnalysisError::invalid_parameter("color_count", color_count))?;
        Ok(Self { color_count })
    }

    pub fn color_count(&self) -> usize {
        usize::from(self.color_count)
    }

    /// Quantized color map of an image, dominant color first
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` if:
    /// - `quality` is outside `[1, 10]`
    /// - No pixel is usable (fully transparent or white image)
    /// - The quantizer fails to split the color space
    pub fn palette(&self, image: &RgbaImage, quality: u32) -> Result<Vec<Color>> {
        let step = sampling_step(quality)?;

        let usable = usable_pixel_count(image, quality);
        debug!(
            width = image.width(),
            height = image.height(),
            quality,
            usable,
            "sampled image pixels"
        );
        if usable == 0 {
            return Err(AnalysisError::extraction("no usable pixels to quantize"));
        }

        let colors = color_thief::get_palette(image.as_raw(), ColorFormat::Rgba, step, self.color_count)
            .map_err(|e| AnalysisError::extraction(format!("median cut failed: {:?}", e)))?;

        debug!(requested = self.color_count, produced = colors.len(), "quantized color map");
        Ok(colors
            .into_iter()
            .map(|color| Color::new(color.r, color.g, color.b))
            .collect())
    }
}

impl DominantColorExtractor for MedianCutExtractor {
    fn extract_dominant_color(&self, image: &RgbaImage, quality: u32) -> Result<Color> {
        self.palette(image, quality)?
            .into_iter()
            .next()
            .ok_or_else(|| AnalysisError::extraction("quantization produced no colors"))
    }
}

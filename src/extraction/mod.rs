//! Dominant color extraction
//!
//! Extraction is a capability behind [`DominantColorExtractor`]; the rest of
//! the pipeline only sees the resulting [`Color`]. The bundled implementation
//! is [`MedianCutExtractor`].

pub mod median_cut;

pub use median_cut::{usable_pixel_count, MedianCutExtractor};

use image::RgbaImage;

use crate::color::Color;
use crate::Result;

/// Maps a decoded image to its single most representative color
pub trait DominantColorExtractor {
    /// Extract the dominant color of `image`
    ///
    /// `quality` is the pixel sampling step: 1 considers every pixel, larger
    /// values skip pixels for speed.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` if no color can be derived from the image
    /// (for example when every pixel is transparent or white).
    fn extract_dominant_color(&self, image: &RgbaImage, quality: u32) -> Result<Color>;
}

impl<T: DominantColorExtractor + ?Sized> DominantColorExtractor for Box<T> {
    fn extract_dominant_color(&self, image: &RgbaImage, quality: u32) -> Result<Color> {
        (**self).extract_dominant_color(image, quality)
    }
}

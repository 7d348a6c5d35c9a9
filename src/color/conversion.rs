//! RGB color value and its representations
//!
//! Provides the [`Color`] triple used throughout the pipeline along with:
//! - Hex color representation (`#rrggbb`, lowercase)
//! - Saturating channel offsets
//! - Interop with `palette` sRGB and CIE Lab/LCh for reporting

use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Lab, Lch, Srgb};
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// An 8-bit sRGB color
///
/// Channels are `u8`, so every value is within `[0, 255]` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wider integers, clamping each channel to `[0, 255]`
    pub fn from_clamped_i32(r: i32, g: i32, b: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Apply a per-channel offset, saturating at 0 and 255
    pub fn offset(self, (dr, dg, db): (i8, i8, i8)) -> Self {
        Self::new(
            self.r.saturating_add_signed(dr),
            self.g.saturating_add_signed(dg),
            self.b.saturating_add_signed(db),
        )
    }

    /// Channels as an array in `[r, g, b]` order
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to a lowercase hexadecimal color string
    ///
    /// # Returns
    ///
    /// Hex color string (e.g., "#ff0000")
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a hexadecimal color string
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex color string (e.g., "#ff0000" or "FF0000")
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidHex` if the string is not six hex digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = |reason: String| AnalysisError::InvalidHex {
            input: hex.to_string(),
            reason,
        };

        if digits.len() != 6 {
            return Err(invalid(format!(
                "expected 6 hex digits, got {} characters",
                digits.chars().count()
            )));
        }
        // from_str_radix alone would also accept a leading '+'
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("contains non-hex characters".to_string()));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| invalid(format!("invalid {} value: {}", name, e)))
        };

        Ok(Self::new(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ))
    }

    /// Normalized sRGB in `[0.0, 1.0]`
    pub fn to_srgb(self) -> Srgb {
        Srgb::<u8>::from(self).into_format()
    }

    /// CIE Lab coordinates (D65)
    pub fn to_lab(self) -> Lab {
        Lab::from_color(self.to_srgb())
    }

    /// CIE LCh coordinates (cylindrical Lab)
    pub fn to_lch(self) -> Lch {
        Lch::from_color(self.to_lab())
    }
}

/// A color paired with its hex label, as displayed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swatch {
    pub rgb: Color,
    pub hex: String,
}

impl From<Color> for Swatch {
    fn from(rgb: Color) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s.trim())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_zero_padded_lowercase() {
        assert_eq!(Color::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Color::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::new(171, 205, 239).to_hex(), "#abcdef");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::new(255, 128, 0));
        // Without # and uppercase
        assert_eq!(Color::from_hex("00FF00").unwrap(), Color::new(0, 255, 0));
        assert_eq!(" #0a0b0c ".parse::<Color>().unwrap(), Color::new(10, 11, 12));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("#FF").is_err()); // Too short
        assert!(Color::from_hex("#GGGGGG").is_err()); // Invalid chars
        assert!(Color::from_hex("#ffffff00").is_err()); // Too long
        assert!(Color::from_hex("#ffé000").is_err()); // Non-ASCII
        assert!(Color::from_hex("+f+f+f").is_err()); // Signs
    }

    #[test]
    fn test_swatch_carries_hex() {
        let swatch = Swatch::from(Color::new(16, 32, 48));
        assert_eq!(swatch.hex, "#102030");
        assert_eq!(swatch.rgb, Color::new(16, 32, 48));
    }

    #[test]
    fn test_from_clamped_i32() {
        assert_eq!(Color::from_clamped_i32(-5, 128, 300), Color::new(0, 128, 255));
    }

    #[test]
    fn test_offset_saturates() {
        let color = Color::new(250, 5, 128);
        assert_eq!(color.offset((10, -10, 0)), Color::new(255, 0, 128));
        assert_eq!(color.offset((-50, 50, -128)), Color::new(200, 55, 0));
    }

    #[test]
    fn test_srgb_interop() {
        let color = Color::new(12, 34, 56);
        let srgb: Srgb<u8> = color.into();
        assert_eq!(Color::from(srgb), color);

        let normalized = Color::WHITE.to_srgb();
        assert!((normalized.red - 1.0).abs() < 1e-6);
        assert!((normalized.blue - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_lab_extremes() {
        let black = Color::BLACK.to_lab();
        assert!(black.l < 1.0);

        let white = Color::WHITE.to_lab();
        assert!(white.l > 99.0);
        assert!(white.a.abs() < 1.0);
        assert!(white.b.abs() < 1.0);
    }

    #[test]
    fn test_to_lch_preserves_lightness() {
        let color = Color::new(200, 100, 50);
        let lab = color.to_lab();
        let lch = color.to_lch();
        assert!((lch.l - lab.l).abs() < 0.001);
        let expected_chroma = (lab.a * lab.a + lab.b * lab.b).sqrt();
        assert!((lch.chroma - expected_chroma).abs() < 0.001);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let color = Color::new(r, g, b);
                let hex = color.to_hex();
                prop_assert_eq!(hex.len(), 7);
                prop_assert!(hex.starts_with('#'));
                prop_assert_eq!(Color::from_hex(&hex).unwrap(), color);
            }
        }
    }
}

//! Fixed design constants for color derivation and extraction
//!
//! Palette offsets and combination position sets are literal design choices,
//! not derived from a color theory formula, and are not
//! configurable.

/// Per-variant channel offsets `(dr, dg, db)` applied with saturation
pub mod offsets {
    pub const BRIGHTER: (i8, i8, i8) = (0, 50, 50);
    pub const MUTED: (i8, i8, i8) = (-30, 0, 30);
    pub const CONTRASTING: (i8, i8, i8) = (40, -40, 0);
    pub const WARM_SHIFTED: (i8, i8, i8) = (20, 20, -40);
    pub const COOL_SHIFTED: (i8, i8, i8) = (-40, 40, 40);
}

/// Tone score weights, scaled by 10 so scores compare exactly in integers
///
/// `warm = 0.8 r + 0.2 g`, `cool = 0.6 b + 0.4 g`
pub mod tone {
    pub const WARM_RED_WEIGHT: u32 = 8;
    pub const WARM_GREEN_WEIGHT: u32 = 2;
    pub const COOL_BLUE_WEIGHT: u32 = 6;
    pub const COOL_GREEN_WEIGHT: u32 = 4;
}

/// Combination position sets into the five entry palette
pub mod combinations {
    pub const DUO: [usize; 2] = [0, 1];
    pub const TRIAD: [usize; 3] = [0, 2, 4];
    pub const GRADIENT: [usize; 3] = [1, 0, 3];
}

/// Dominant color extraction parameters
pub mod quantize {
    /// Pixels with lower alpha are skipped by the quantizer
    pub const MIN_ALPHA: u8 = 125;

    /// Pixels with all channels above this value count as white and are skipped
    pub const WHITE_THRESHOLD: u8 = 250;

    /// Number of colors requested when only the dominant color is wanted
    pub const DOMINANT_COLOR_COUNT: usize = 5;

    /// Accepted range for the requested color count
    pub const MIN_COLOR_COUNT: usize = 2;
    pub const MAX_COLOR_COUNT: usize = 255;
}

/// Input limits for uploaded images
pub mod input {
    /// Default maximum input size in bytes (5 MiB)
    pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

    /// Sampling step range: 1 considers every pixel, 10 every tenth
    pub const HIGHEST_QUALITY: u32 = 1;
    pub const LOWEST_QUALITY: u32 = 10;
}

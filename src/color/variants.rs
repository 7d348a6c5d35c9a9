//! Offset-based palette generation
//!
//! Derives five variants of a base color by adding fixed per-channel offsets
//! with saturation at 0 and 255.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::Color;
use crate::constants::offsets;

/// Named position within a [`Palette`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Brighter,
    Muted,
    Contrasting,
    WarmShifted,
    CoolShifted,
}

impl Variant {
    /// All variants in palette order
    pub const ALL: [Variant; 5] = [
        Variant::Brighter,
        Variant::Muted,
        Variant::Contrasting,
        Variant::WarmShifted,
        Variant::CoolShifted,
    ];

    /// Position of this variant in the palette
    pub fn position(self) -> usize {
        self as usize
    }

    /// Channel offset `(dr, dg, db)` of this variant
    pub fn offset(self) -> (i8, i8, i8) {
        match self {
            Variant::Brighter => offsets::BRIGHTER,
            Variant::Muted => offsets::MUTED,
            Variant::Contrasting => offsets::CONTRASTING,
            Variant::WarmShifted => offsets::WARM_SHIFTED,
            Variant::CoolShifted => offsets::COOL_SHIFTED,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Brighter => "brighter",
            Variant::Muted => "muted",
            Variant::Contrasting => "contrasting",
            Variant::WarmShifted => "warm-shifted",
            Variant::CoolShifted => "cool-shifted",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Five variants derived from one base color, in [`Variant::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette([Color; 5]);

impl Palette {
    /// Generate the palette for a base color
    pub fn generate(base: Color) -> Self {
        Self(Variant::ALL.map(|variant| base.offset(variant.offset())))
    }

    pub fn colors(&self) -> &[Color; 5] {
        &self.0
    }

    /// Color of a named variant
    pub fn get(&self, variant: Variant) -> Color {
        self.0[variant.position()]
    }

    /// Variants paired with their colors, in palette order
    pub fn entries(&self) -> impl Iterator<Item = (Variant, Color)> + '_ {
        Variant::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl From<[Color; 5]> for Palette {
    fn from(colors: [Color; 5]) -> Self {
        Self(colors)
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, position: usize) -> &Color {
        &self.0[position]
    }
}

/// Generate the five-entry palette for a base color
pub fn generate_palette(base: Color) -> Palette {
    Palette::generate(base)
}

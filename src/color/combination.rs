//! Named color combinations over a palette
//!
//! A combination references palette entries by position, so the same
//! combination resolves to different colors for different palettes.

use serde::{Deserialize, Serialize};

use super::{Color, Palette, Swatch};
use crate::constants::combinations::{DUO, GRADIENT, TRIAD};

/// A named grouping of palette positions with a caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    pub name: &'static str,
    pub description: &'static str,
    pub positions: &'static [usize],
}

pub const DUO_COMBINATION: Combination = Combination {
    name: "duo",
    description: "calm and stable pairing",
    positions: &DUO,
};

pub const TRIAD_COMBINATION: Combination = Combination {
    name: "triad",
    description: "vivid and varied combination",
    positions: &TRIAD,
};

pub const GRADIENT_COMBINATION: Combination = Combination {
    name: "gradient",
    description: "smoothly blended, natural progression",
    positions: &GRADIENT,
};

impl Combination {
    /// Colors of this combination taken from `palette`, in position order
    pub fn colors(&self, palette: &Palette) -> Vec<Color> {
        self.positions.iter().map(|&position| palette[position]).collect()
    }

    /// Bind this combination to a palette
    pub fn resolve(&self, palette: &Palette) -> ResolvedCombination {
        ResolvedCombination {
            name: self.name.to_string(),
            description: self.description.to_string(),
            positions: self.positions.to_vec(),
            swatches: self.colors(palette).into_iter().map(Swatch::from).collect(),
        }
    }
}

/// A combination with its colors filled in from a specific palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCombination {
    pub name: String,
    pub description: String,
    pub positions: Vec<usize>,
    pub swatches: Vec<Swatch>,
}

impl ResolvedCombination {
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.swatches.iter().map(|swatch| swatch.rgb)
    }
}

/// The three fixed combinations: duo, triad and gradient
pub fn combinations() -> [Combination; 3] {
    [DUO_COMBINATION, TRIAD_COMBINATION, GRADIENT_COMBINATION]
}

/// Assemble the three combinations for a palette
pub fn assemble_combinations(palette: &Palette) -> [ResolvedCombination; 3] {
    combinations().map(|combination| combination.resolve(palette))
}

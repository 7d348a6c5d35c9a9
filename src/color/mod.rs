//! Color values and the pure derivation pipeline
//!
//! This module holds the RGB color type with its hex representation,
//! tone classification, offset palette generation and combination assembly.

pub mod combination;
pub mod conversion;
pub mod tone;
pub mod variants;

pub use combination::{assemble_combinations, Combination, ResolvedCombination};
pub use conversion::{Color, Swatch};
pub use tone::{classify_tone, ToneLabel, Warmth};
pub use variants::{generate_palette, Palette, Variant};

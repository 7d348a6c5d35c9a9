//! Warm/cool tone classification
//!
//! Scores a color with fixed channel weights:
//! - warm score: `0.8 r + 0.2 g`
//! - cool score: `0.6 b + 0.4 g`
//!
//! A strictly higher warm score gives a warm tone, anything else (ties
//! included) gives a cool tone. The sub-label then checks whether the
//! dominant channel outweighs the other two combined.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Color;
use crate::constants::tone::{
    COOL_BLUE_WEIGHT, COOL_GREEN_WEIGHT, WARM_GREEN_WEIGHT, WARM_RED_WEIGHT,
};

/// Base warm/cool family of a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Warmth {
    Warm,
    Cool,
}

/// Tone classification of a single color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneLabel {
    /// Warm, red outweighs green and blue together
    #[serde(rename = "warm/intense")]
    WarmIntense,
    /// Warm, red does not dominate
    #[serde(rename = "warm/soft")]
    WarmSoft,
    /// Cool, blue outweighs red and green together
    #[serde(rename = "cool/cold")]
    CoolCold,
    /// Cool, blue does not dominate
    #[serde(rename = "cool/fresh")]
    CoolFresh,
}

impl ToneLabel {
    pub const ALL: [ToneLabel; 4] = [
        ToneLabel::WarmIntense,
        ToneLabel::WarmSoft,
        ToneLabel::CoolCold,
        ToneLabel::CoolFresh,
    ];

    /// Display string, e.g. `"warm/intense"`
    pub fn as_str(self) -> &'static str {
        match self {
            ToneLabel::WarmIntense => "warm/intense",
            ToneLabel::WarmSoft => "warm/soft",
            ToneLabel::CoolCold => "cool/cold",
            ToneLabel::CoolFresh => "cool/fresh",
        }
    }

    pub fn warmth(self) -> Warmth {
        match self {
            ToneLabel::WarmIntense | ToneLabel::WarmSoft => Warmth::Warm,
            ToneLabel::CoolCold | ToneLabel::CoolFresh => Warmth::Cool,
        }
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Warm and cool scores of a color, scaled by 10 to stay in integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneScores {
    pub warm: u32,
    pub cool: u32,
}

impl ToneScores {
    pub fn of(color: Color) -> Self {
        let (r, g, b) = (u32::from(color.r), u32::from(color.g), u32::from(color.b));
        Self {
            warm: WARM_RED_WEIGHT * r + WARM_GREEN_WEIGHT * g,
            cool: COOL_BLUE_WEIGHT * b + COOL_GREEN_WEIGHT * g,
        }
    }

    /// Ties resolve to cool
    pub fn warmth(self) -> Warmth {
        if self.warm > self.cool {
            Warmth::Warm
        } else {
            Warmth::Cool
        }
    }
}

/// Classify the tone of a color
///
/// Total over every color: always returns one of the four labels.
pub fn classify_tone(color: Color) -> ToneLabel {
    let (r, g, b) = (u16::from(color.r), u16::from(color.g), u16::from(color.b));

    match ToneScores::of(color).warmth() {
        Warmth::Warm if r > g + b => ToneLabel::WarmIntense,
        Warmth::Warm => ToneLabel::WarmSoft,
        Warmth::Cool if b > r + g => ToneLabel::CoolCold,
        Warmth::Cool => ToneLabel::CoolFresh,
    }
}

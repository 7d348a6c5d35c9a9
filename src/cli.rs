//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tonescan::Color;

/// Extract an image's dominant color, its tone and suggested palettes
#[derive(Debug, Parser)]
#[command(name = "tonescan", about, version)]
pub struct Cli {
    /// Image to analyze (JPEG, PNG, GIF or WebP, up to 5MB by default)
    #[arg(required_unless_present = "color")]
    pub image: Option<PathBuf>,

    /// Skip extraction and derive tone and palette from this color (#rrggbb)
    #[arg(long, conflicts_with_all = ["image", "quality", "config"])]
    pub color: Option<Color>,

    /// Pixel sampling step for extraction, 1 (every pixel) to 10
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub quality: Option<u32>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON report
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_image_with_options() {
        let cli = Cli::try_parse_from(["tonescan", "photo.png", "-q", "10", "--output", "json"]).unwrap();
        assert_eq!(cli.image, Some(PathBuf::from("photo.png")));
        assert_eq!(cli.quality, Some(10));
        assert!(matches!(cli.output, OutputFormat::Json));
    }

    #[test]
    fn test_parse_color() {
        let cli = Cli::try_parse_from(["tonescan", "--color", "#c86432"]).unwrap();
        assert_eq!(cli.color, Some(Color::new(200, 100, 50)));
        assert!(cli.image.is_none());
    }

    #[test]
    fn test_requires_image_or_color() {
        assert!(Cli::try_parse_from(["tonescan"]).is_err());
        assert!(Cli::try_parse_from(["tonescan", "--color", "nothex"]).is_err());
        assert!(Cli::try_parse_from(["tonescan", "a.png", "--color", "#000000"]).is_err());
    }

    #[test]
    fn test_color_rejects_extraction_options() {
        assert!(Cli::try_parse_from(["tonescan", "--color", "#c86432", "-q", "5"]).is_err());
        assert!(Cli::try_parse_from(["tonescan", "--color", "#c86432", "-c", "cfg.json"]).is_err());
    }

    #[test]
    fn test_quality_range() {
        assert!(Cli::try_parse_from(["tonescan", "a.png", "-q", "10"]).is_ok());
        assert!(Cli::try_parse_from(["tonescan", "a.png", "-q", "0"]).is_err());
        assert!(Cli::try_parse_from(["tonescan", "a.png", "-q", "11"]).is_err());
    }
}

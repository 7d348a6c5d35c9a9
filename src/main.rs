//! CLI entry point for tonescan.

mod cli;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tonescan::{AnalysisConfig, AnalysisReport, Analyzer};

use crate::cli::Cli;

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "tonescan=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(quality) = cli.quality {
        config.quality = quality;
    }
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = match (cli.color, &cli.image) {
        (Some(color), _) => AnalysisReport::for_color(color),
        (None, Some(path)) => {
            let analyzer = Analyzer::new(load_config(cli)?)?;
            tracing::info!(path = %path.display(), "analyzing image");
            analyzer.analyze_path(path)?
        }
        (None, None) => anyhow::bail!("an image path or --color is required"),
    };

    output::report(&report, cli.output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::failure(&err);
            ExitCode::FAILURE
        }
    }
}

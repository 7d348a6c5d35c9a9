//! Terminal output for analysis reports: styled text for humans, JSON for machines.
//!
//! Uses:
//! - `console` for headings and error styling (respects NO_COLOR)
//! - `comfy-table` for swatches rendered on their own background color

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color as CellColor, Table};
use console::style;
use tonescan::{AnalysisError, AnalysisReport, Color, Swatch};

use crate::cli::OutputFormat;

/// Lab lightness above which swatch labels switch to dark text
const DARK_TEXT_LIGHTNESS: f32 = 60.0;

/// Print a report in the requested format
pub fn report(report: &AnalysisReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => print!("{}", render_text(report)),
    }
    Ok(())
}

/// Print a failed analysis to stderr
pub fn failure(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("Analysis failed:").red().bold(), err);

    if let Some(analysis_err) = err.downcast_ref::<AnalysisError>() {
        if analysis_err.is_input_error() {
            eprintln!("{} {}", style("Suggestion:").yellow(), analysis_err.user_message());
        }
    }
}

fn swatch_cell(swatch: &Swatch) -> Cell {
    let Color { r, g, b } = swatch.rgb;
    let text = if swatch.rgb.to_lab().l > DARK_TEXT_LIGHTNESS {
        CellColor::Black
    } else {
        CellColor::White
    };
    Cell::new(&swatch.hex)
        .bg(CellColor::Rgb { r, g, b })
        .fg(text)
        .set_alignment(CellAlignment::Center)
}

fn swatch_row<'a>(swatches: impl IntoIterator<Item = &'a Swatch>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(swatches.into_iter().map(swatch_cell).collect::<Vec<_>>());
    table
}

fn heading(text: &str) -> String {
    style(text).bold().underlined().to_string()
}

/// Render the report as terminal text
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let dominant = Swatch::from(report.dominant.rgb);

    out.push_str(&format!("{}\n{}\n\n", heading("Dominant color"), swatch_row([&dominant])));
    out.push_str(&format!(
        "{}\n  {}  (L*={:.1}, C*={:.1})\n\n",
        heading("Tone"),
        style(report.tone).cyan(),
        report.dominant.lch.l,
        report.dominant.lch.chroma
    ));

    let mut palette = Table::new();
    palette.load_preset(UTF8_FULL).set_header(vec!["variant", "color"]);
    for entry in &report.palette {
        palette.add_row(vec![Cell::new(entry.variant), swatch_cell(&entry.swatch)]);
    }
    out.push_str(&format!("{}\n{}\n\n", heading("Palette (5)"), palette));

    out.push_str(&format!("{}\n", heading("Combinations")));
    for combination in &report.combinations {
        out.push_str(&format!(
            "{} - {}\n{}\n",
            style(&combination.name).bold(),
            combination.description,
            swatch_row(&combination.swatches)
        ));
    }
    out
}

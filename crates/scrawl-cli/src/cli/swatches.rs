//! Generate a swatch sheet: one filled square per fill style.
//!
//! Swatches are laid out in a grid with the style name below each one.

use std::path::PathBuf;

use anyhow::{Context, Result};

use scrawl::svg::{SvgStyle, drawable_to_svg, svg_document};
use scrawl::{DrawConfig, DrawOptions, FillConfig, FillOptions, FillStyle, Generator};

use super::render::write_output;

/// Swatch layout
const SWATCH_SIZE: f64 = 120.0;
const LABEL_HEIGHT: f64 = 18.0; // Space for text below swatch
const GUTTER: f64 = 16.0; // Space between swatches
const MARGIN: f64 = 20.0;

const COLUMNS: usize = 4;

pub const DEFAULT_GAP: f64 = 8.0;
pub const DEFAULT_ANGLE: f64 = -41.0;

/// Build the swatch sheet as an SVG document.
pub fn swatch_sheet(gap: f64, angle: f64) -> Result<String> {
    let styles = FillStyle::all();
    let rows = styles.len().div_ceil(COLUMNS);
    let cell_height = SWATCH_SIZE + LABEL_HEIGHT + GUTTER;
    let width = MARGIN * 2.0 + COLUMNS as f64 * (SWATCH_SIZE + GUTTER) - GUTTER;
    let height = MARGIN * 2.0 + rows as f64 * cell_height - GUTTER;

    let draw = DrawConfig::new(DrawOptions::default().with_stroke_width(1.5).with_seed(1))
        .context("Invalid swatch drawing options")?;
    let fill_options = FillOptions::default()
        .with_hachure_gap(gap)
        .with_hachure_angle(angle);

    let svg_style = SvgStyle::default();
    let mut body = String::new();

    for (i, style) in styles.iter().enumerate() {
        let col = i % COLUMNS;
        let row = i / COLUMNS;
        let x = MARGIN + col as f64 * (SWATCH_SIZE + GUTTER);
        let y = MARGIN + row as f64 * cell_height;

        // Same seeds for every swatch so only the style differs
        let fill = FillConfig::new(fill_options, draw.with_altered_seed())
            .with_context(|| format!("Invalid fill options for {}", style))?;
        let mut generator = Generator::new(draw.clone()).with_fill(*style, fill);
        let drawable = generator
            .rectangle(x, y, SWATCH_SIZE, SWATCH_SIZE)
            .with_id(style.name());

        log::debug!("swatch {} at ({}, {})", style, x, y);
        body.push_str(&drawable_to_svg(&drawable, &svg_style));
        body.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"12\" text-anchor=\"middle\">{}</text>\n",
            x + SWATCH_SIZE / 2.0,
            y + SWATCH_SIZE + LABEL_HEIGHT - 4.0,
            style.name()
        ));
    }

    Ok(svg_document(width, height, Some("white"), &body))
}

/// Execute the swatches command.
pub fn cmd_swatches(output: Option<PathBuf>, gap: f64, angle: f64) -> Result<()> {
    let svg = swatch_sheet(gap, angle)?;
    write_output(output.as_deref(), &svg)
}

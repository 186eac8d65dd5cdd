//! `scrawl render` - draw a scene file to SVG or JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use scrawl::Drawable;
use scrawl::svg::{SvgStyle, drawable_to_svg, svg_document};

use super::scene::Scene;

/// Output format for rendered scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// A standalone SVG document
    #[default]
    Svg,
    /// The drawables, for another renderer to replay
    Json,
}

/// Write `content` to a file, or stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Wrap drawables in an SVG document the size of the canvas.
pub fn scene_to_svg(scene: &Scene, drawables: &[Drawable]) -> String {
    let style = SvgStyle::default();
    let body: String = drawables
        .iter()
        .map(|drawable| drawable_to_svg(drawable, &style))
        .collect();
    svg_document(
        scene.canvas.width,
        scene.canvas.height,
        scene.canvas.background.as_deref(),
        &body,
    )
}

/// Execute the render command.
pub fn cmd_render(
    scene_path: &Path,
    output: Option<PathBuf>,
    format: OutputFormat,
    seed: Option<u64>,
) -> Result<()> {
    let scene = Scene::load(scene_path)?;
    let drawables = scene
        .render(seed)
        .with_context(|| format!("Failed to render {}", scene_path.display()))?;

    let content = match format {
        OutputFormat::Svg => scene_to_svg(&scene, &drawables),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&drawables)
                .context("Failed to serialize drawables")?;
            json.push('\n');
            json
        }
    };

    write_output(output.as_deref(), &content)
}

//! scrawl - hand-drawn shapes from scene files
//!
//! Usage:
//!   scrawl render <scene> [-o FILE]    Draw a scene to SVG (or --format json)
//!   scrawl styles                      List fill styles
//!   scrawl swatches [-o FILE]          One swatch per fill style
//!   scrawl example                     Print an example scene

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cli::{EXAMPLE_SCENE, LoggingConfig, OutputFormat};

/// scrawl - hand-drawn shapes and sketchy fills
#[derive(Parser)]
#[command(name = "scrawl")]
#[command(about = "Render hand-drawn shapes and sketchy fills to SVG")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a scene file (.yaml, .yml or .json)
    Render {
        /// Scene file
        scene: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,

        /// Override the scene's seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List available fill styles
    Styles,

    /// Generate a swatch sheet with every fill style
    Swatches {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Hachure gap
        #[arg(short, long, default_value_t = cli::swatches::DEFAULT_GAP)]
        gap: f64,

        /// Hachure angle in degrees
        #[arg(short, long, default_value_t = cli::swatches::DEFAULT_ANGLE, allow_negative_numbers = true)]
        angle: f64,
    },

    /// Print an example scene to start from
    Example,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    };
    cli::init_logging(logging);

    match cli.command {
        Commands::Render {
            scene,
            output,
            format,
            seed,
        } => cli::cmd_render(&scene, output, format, seed),
        Commands::Styles => {
            cli::cmd_styles();
            Ok(())
        }
        Commands::Swatches { output, gap, angle } => cli::cmd_swatches(output, gap, angle),
        Commands::Example => {
            print!("{}", EXAMPLE_SCENE);
            Ok(())
        }
    }
}

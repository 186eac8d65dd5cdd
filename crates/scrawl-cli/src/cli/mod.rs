//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `render` - Draw a scene file to SVG or JSON
//! - `styles` - List available fill styles
//! - `swatches` - Generate a fill style swatch sheet
//! - `example` - Print an example scene

pub mod logging;
pub mod render;
pub mod scene;
pub mod styles;
pub mod swatches;

pub use logging::{LoggingConfig, init_logging};
pub use render::{OutputFormat, cmd_render};
pub use scene::EXAMPLE_SCENE;
pub use styles::cmd_styles;
pub use swatches::cmd_swatches;

//! # scrawl
//!
//! Seeded hand-drawn shape generation: lines, rectangles, ellipses, arcs,
//! curves and SVG paths come out as slightly wobbly cubic strokes, and
//! closed shapes can be filled with hachure, cross-hatch, zigzag, dots,
//! dashes or a solid region.
//!
//! Everything is deterministic. A [`DrawConfig`] carries its own seeded
//! random source, so the same options and the same calls always produce
//! the same [`Drawable`].
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Unlike Node.js, you must explicitly declare every module.

pub mod clip;
pub mod config;
pub mod generator;
pub mod geometry;
pub mod hatch;
pub mod op;
pub mod patterns;
pub mod rng;
pub mod sketchy;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use clip::{Intersection, line_intersection, point_in_polygon};
pub use config::{ConfigError, DrawConfig, DrawOptions, FillConfig, FillOptions};
pub use generator::Generator;
pub use geometry::{Line, Point, Polygon};
pub use hatch::{crosshatch_lines, hachure_lines};
pub use op::{Drawable, Op, OpSet, OpSetKind, Shape};
pub use patterns::FillStyle;
pub use svg::SvgError;

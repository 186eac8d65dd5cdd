//! Fill patterns for closed shapes.
//!
//! Every style except `Solid` is a thin layer over the scanline engine in
//! [`crate::hatch`]: it asks for parallel interior segments, then decides
//! how to draw along them.

pub mod util;

mod dashed;
mod dot_dash;
mod dots;
mod hachure;
mod zigzag;
mod zigzag_line;

pub use dashed::{dash_spans, dashed_fill};
pub use dot_dash::{Mark, dot_dash_fill, dot_dash_marks};
pub use dots::{dot_positions, dots_fill};
pub use hachure::{crosshatch_fill, hachure_fill};
pub use zigzag::{zigzag_fill, zigzag_runs};
pub use zigzag_line::zigzag_line_fill;

use serde::{Deserialize, Serialize};

use crate::config::FillConfig;
use crate::geometry::Polygon;
use crate::op::OpSet;
use crate::sketchy::solid_fill_polygon;

/// Available fill styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillStyle {
    #[default]
    #[serde(rename = "hachure")]
    Hachure,
    #[serde(rename = "solid")]
    Solid,
    #[serde(rename = "zigzag")]
    ZigZag,
    #[serde(rename = "cross-hatch")]
    CrossHatch,
    #[serde(rename = "dots")]
    Dots,
    #[serde(rename = "dashed")]
    Dashed,
    #[serde(rename = "dot-dash")]
    DotDash,
    #[serde(rename = "zigzag-line")]
    ZigZagLine,
}

impl FillStyle {
    /// Get all available styles.
    pub fn all() -> &'static [FillStyle] {
        &[
            FillStyle::Hachure,
            FillStyle::Solid,
            FillStyle::ZigZag,
            FillStyle::CrossHatch,
            FillStyle::Dots,
            FillStyle::Dashed,
            FillStyle::DotDash,
            FillStyle::ZigZagLine,
        ]
    }

    /// Get style name as string.
    pub fn name(&self) -> &'static str {
        match self {
            FillStyle::Hachure => "hachure",
            FillStyle::Solid => "solid",
            FillStyle::ZigZag => "zigzag",
            FillStyle::CrossHatch => "cross-hatch",
            FillStyle::Dots => "dots",
            FillStyle::Dashed => "dashed",
            FillStyle::DotDash => "dot-dash",
            FillStyle::ZigZagLine => "zigzag-line",
        }
    }

    /// Brief description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            FillStyle::Hachure => "Parallel rough strokes at the hachure angle",
            FillStyle::Solid => "One filled region, no strokes",
            FillStyle::ZigZag => "Hachure lines joined into a back-and-forth stroke",
            FillStyle::CrossHatch => "Hachure at the angle and perpendicular to it",
            FillStyle::Dots => "Small rough circles on a hachure grid",
            FillStyle::Dashed => "Hachure lines broken into centred dashes",
            FillStyle::DotDash => "Dashes and dots alternating along hachure lines",
            FillStyle::ZigZagLine => "Triangular waves along widely spaced hachure lines",
        }
    }

    /// Parse style from string.
    pub fn from_name(name: &str) -> Option<FillStyle> {
        match name.to_lowercase().as_str() {
            "hachure" | "hatch" | "lines" => Some(FillStyle::Hachure),
            "solid" | "fill" => Some(FillStyle::Solid),
            "zigzag" | "zig-zag" => Some(FillStyle::ZigZag),
            "cross-hatch" | "crosshatch" | "cross" => Some(FillStyle::CrossHatch),
            "dots" | "dot" | "stipple" => Some(FillStyle::Dots),
            "dashed" | "dash" | "dashes" => Some(FillStyle::Dashed),
            "dot-dash" | "dotdash" | "dash-dot" => Some(FillStyle::DotDash),
            "zigzag-line" | "zigzagline" | "zig-zag-line" => Some(FillStyle::ZigZagLine),
            _ => None,
        }
    }

    /// Fill a polygon in this style.
    ///
    /// Returns a `FillSketch` set (`FillPath` for `Solid`). A polygon that
    /// encloses nothing gives an empty set.
    pub fn fill(&self, polygon: &Polygon, config: &mut FillConfig) -> OpSet {
        match self {
            FillStyle::Hachure => hachure_fill(polygon, config),
            FillStyle::Solid => solid_fill_polygon(polygon.rings(), &mut config.draw),
            FillStyle::ZigZag => zigzag_fill(polygon, config),
            FillStyle::CrossHatch => crosshatch_fill(polygon, config),
            FillStyle::Dots => dots_fill(polygon, config),
            FillStyle::Dashed => dashed_fill(polygon, config),
            FillStyle::DotDash => dot_dash_fill(polygon, config),
            FillStyle::ZigZagLine => zigzag_line_fill(polygon, config),
        }
    }
}

impl std::fmt::Display for FillStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DrawConfig, DrawOptions, FillOptions};
    use crate::geometry::Point;
    use crate::op::OpSetKind;

    fn fill_config() -> FillConfig {
        let draw = DrawConfig::new(DrawOptions::default().with_seed(1)).unwrap();
        FillConfig::new(FillOptions::default().with_hachure_gap(5.0), draw).unwrap()
    }

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(60.0, 0.0),
            Point::new(60.0, 60.0),
            Point::new(0.0, 60.0),
        ])
    }

    #[test]
    fn names_round_trip() {
        for style in FillStyle::all() {
            assert_eq!(FillStyle::from_name(style.name()), Some(*style));
        }
        assert_eq!(FillStyle::from_name("CrossHatch"), Some(FillStyle::CrossHatch));
        assert_eq!(FillStyle::from_name("plaid"), None);
    }

    #[test]
    fn serde_names_match() {
        for style in FillStyle::all() {
            let json = serde_json::to_string(style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.name()));
        }
    }

    #[test]
    fn every_style_fills_a_square() {
        for style in FillStyle::all() {
            let set = style.fill(&square(), &mut fill_config());
            assert!(!set.is_empty(), "{} produced nothing", style);
            let expected = if *style == FillStyle::Solid {
                OpSetKind::FillPath
            } else {
                OpSetKind::FillSketch
            };
            assert_eq!(set.kind, expected);
        }
    }

    #[test]
    fn every_style_handles_empty_polygons() {
        let single = Polygon::new(vec![Point::new(4.0, 4.0)]);
        for style in FillStyle::all() {
            assert!(style.fill(&Polygon::default(), &mut fill_config()).is_empty());
            assert!(style.fill(&single, &mut fill_config()).is_empty());
        }
    }

    #[test]
    fn fills_are_deterministic() {
        for style in FillStyle::all() {
            let a = style.fill(&square(), &mut fill_config());
            let b = style.fill(&square(), &mut fill_config());
            assert_eq!(a, b, "{} is not reproducible", style);
        }
    }
}

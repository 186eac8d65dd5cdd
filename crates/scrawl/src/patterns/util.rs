//! Shared helpers for fill patterns.
//!
//! Every pattern starts from plain hatch segments and then decides how to
//! draw along them. These helpers cover the two things they all need:
//! walking a segment by distance and turning segments into rough strokes.

use crate::config::DrawConfig;
use crate::geometry::{Line, Point};
use crate::op::Op;
use crate::sketchy::double_line;

/// A segment described by its start, unit direction and length.
///
/// Lets patterns place things "d units along the line" without repeating
/// the trigonometry.
#[derive(Debug, Clone, Copy)]
pub struct Walk {
    pub start: Point,
    /// Unit vector along the segment
    pub dx: f64,
    pub dy: f64,
    pub length: f64,
}

impl Walk {
    /// Returns `None` for zero-length segments.
    pub fn new(line: &Line) -> Option<Self> {
        let (dx, dy) = line.direction()?;
        Some(Self {
            start: line.start(),
            dx,
            dy,
            length: line.length(),
        })
    }

    /// The point `distance` along the segment.
    #[inline]
    pub fn at(&self, distance: f64) -> Point {
        Point::new(self.start.x + self.dx * distance, self.start.y + self.dy * distance)
    }

    /// The point `distance` along and `side` to the left of the segment.
    #[inline]
    pub fn offset_at(&self, distance: f64, side: f64) -> Point {
        let p = self.at(distance);
        Point::new(p.x - self.dy * side, p.y + self.dx * side)
    }
}

/// Rough fill stroke between two points.
#[inline]
pub fn fill_stroke(a: Point, b: Point, config: &mut DrawConfig) -> Vec<Op> {
    double_line(a.x, a.y, b.x, b.y, config, true)
}

/// Render each segment as a rough fill stroke.
pub fn render_lines(lines: &[Line], config: &mut DrawConfig) -> Vec<Op> {
    // ## Rust Lesson #11: Capacity Hints
    //
    // A double stroke is four ops per line, so we can size the Vec up front.
    let mut ops = Vec::with_capacity(lines.len() * 4);
    for line in lines {
        ops.extend(fill_stroke(line.start(), line.end(), config));
    }
    ops
}

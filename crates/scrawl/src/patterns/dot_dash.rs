//! Dot-dash fill - dashes and dots alternating along hachure lines.

use crate::config::FillConfig;
use crate::geometry::Polygon;
use crate::hatch::hachure_lines;
use crate::op::OpSet;

use super::dots::dot;
use super::util::{Walk, fill_stroke};

/// One mark along a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    /// From / to distances
    Dash(f64, f64),
    /// Distance of the dot centre
    Dot(f64),
}

/// Lay out `dash, gap, dot, gap, dash, ...` from the start of a segment.
///
/// Stops at the first dash that would not fit.
pub fn dot_dash_marks(length: f64, dash: f64, gap: f64) -> Vec<Mark> {
    let mut marks = Vec::new();
    if !(dash > 0.0) || !(gap > 0.0) {
        return marks;
    }
    let mut cursor = 0.0;
    while cursor + dash <= length {
        marks.push(Mark::Dash(cursor, cursor + dash));
        cursor += dash + gap;
        if cursor > length {
            break;
        }
        marks.push(Mark::Dot(cursor));
        cursor += gap;
    }
    marks
}

/// Alternating dashes (`dash_offset` long) and dots, `dash_gap` apart.
pub fn dot_dash_fill(polygon: &Polygon, config: &mut FillConfig) -> OpSet {
    let lines = hachure_lines(polygon, config.hachure_gap(), config.hachure_angle());
    let (dash, gap) = (config.dash_offset(), config.dash_gap());

    let mut ops = Vec::new();
    for line in &lines {
        let Some(walk) = Walk::new(line) else {
            continue;
        };
        for mark in dot_dash_marks(walk.length, dash, gap) {
            match mark {
                Mark::Dash(from, to) => {
                    ops.extend(fill_stroke(walk.at(from), walk.at(to), &mut config.draw));
                }
                Mark::Dot(at) => ops.extend(dot(walk.at(at), config)),
            }
        }
    }
    OpSet::fill_sketch(ops)
}

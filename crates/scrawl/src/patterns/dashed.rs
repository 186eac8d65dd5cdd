//! Dashed fill - hachure segments broken into evenly spaced dashes.

use crate::config::FillConfig;
use crate::geometry::{Line, Polygon};
use crate::hatch::hachure_lines;
use crate::op::{Op, OpSet};

use super::util::{Walk, fill_stroke};

/// Dash positions along one segment, as `(start, end)` distances.
///
/// Only whole dashes are placed, and the last one needs no trailing gap.
/// The leftover length is split evenly between both ends so the dashes
/// sit centred on the segment.
pub fn dash_spans(length: f64, dash: f64, gap: f64) -> Vec<(f64, f64)> {
    let period = dash + gap;
    if !(period > 0.0) || !(length > 0.0) {
        return Vec::new();
    }
    let count = ((length + gap) / period).floor() as usize;
    let lead = (length + gap - count as f64 * period) / 2.0;
    (0..count)
        .map(|i| {
            let from = lead + i as f64 * period;
            (from, from + dash)
        })
        .collect()
}

/// Dashes of `dash_offset` separated by `dash_gap` along each hachure line.
pub fn dashed_fill(polygon: &Polygon, config: &mut FillConfig) -> OpSet {
    let lines = hachure_lines(polygon, config.hachure_gap(), config.hachure_angle());
    let (dash, gap) = (config.dash_offset(), config.dash_gap());

    let mut ops = Vec::new();
    for line in &lines {
        ops.extend(dashes_on(line, dash, gap, config));
    }
    OpSet::fill_sketch(ops)
}

fn dashes_on(line: &Line, dash: f64, gap: f64, config: &mut FillConfig) -> Vec<Op> {
    let Some(walk) = Walk::new(line) else {
        return Vec::new();
    };
    let mut ops = Vec::new();
    for (from, to) in dash_spans(walk.length, dash, gap) {
        ops.extend(fill_stroke(walk.at(from), walk.at(to), &mut config.draw));
    }
    ops
}

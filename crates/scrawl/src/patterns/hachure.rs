//! Hachure and cross-hatch fills: the scan segments drawn as-is.

use crate::config::FillConfig;
use crate::geometry::Polygon;
use crate::hatch::{crosshatch_lines, hachure_lines};
use crate::op::OpSet;

use super::util::render_lines;

/// Parallel rough strokes at the hachure angle.
pub fn hachure_fill(polygon: &Polygon, config: &mut FillConfig) -> OpSet {
    let lines = hachure_lines(polygon, config.hachure_gap(), config.hachure_angle());
    OpSet::fill_sketch(render_lines(&lines, &mut config.draw))
}

/// Hachure plus a second pass rotated by 90°.
pub fn crosshatch_fill(polygon: &Polygon, config: &mut FillConfig) -> OpSet {
    let lines = crosshatch_lines(polygon, config.hachure_gap(), config.hachure_angle());
    OpSet::fill_sketch(render_lines(&lines, &mut config.draw))
}

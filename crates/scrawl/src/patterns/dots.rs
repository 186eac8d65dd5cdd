//! Dot fill - small rough circles sampled along hachure lines.

use crate::config::FillConfig;
use crate::geometry::{Point, Polygon};
use crate::hatch::hachure_lines;
use crate::op::{Op, OpSet};
use crate::sketchy::ellipse;

use super::util::Walk;

/// Distances along a segment at which to place dots, `spacing` apart and
/// centred. A segment shorter than `spacing` still gets one dot in the
/// middle.
pub fn dot_positions(length: f64, spacing: f64) -> Vec<f64> {
    if !(length > 0.0) || !(spacing > 0.0) {
        return Vec::new();
    }
    let count = ((length / spacing).floor() as usize).max(1);
    let lead = (length - (count - 1) as f64 * spacing) / 2.0;
    (0..count).map(|i| lead + i as f64 * spacing).collect()
}

/// One rough dot of diameter `fill_weight` near `center`, nudged by up to
/// a quarter of the gap.
pub(crate) fn dot(center: Point, config: &mut FillConfig) -> Vec<Op> {
    let jitter = config.hachure_gap() / 4.0;
    let weight = config.fill_weight();
    let cx = center.x + config.draw.offset_symmetric(jitter, 1.0);
    let cy = center.y + config.draw.offset_symmetric(jitter, 1.0);
    ellipse(cx, cy, weight, weight, &mut config.draw).ops
}

/// Dots every hachure gap along hachure lines, so they form a grid.
pub fn dots_fill(polygon: &Polygon, config: &mut FillConfig) -> OpSet {
    let gap = config.hachure_gap();
    let lines = hachure_lines(polygon, gap, config.hachure_angle());

    let mut ops = Vec::new();
    for line in &lines {
        let Some(walk) = Walk::new(line) else {
            continue;
        };
        for distance in dot_positions(walk.length, gap) {
            ops.extend(dot(walk.at(distance), config));
        }
    }
    OpSet::fill_sketch(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DrawConfig, DrawOptions, FillOptions};

    #[test]
    fn positions_are_centred() {
        assert_eq!(dot_positions(10.0, 3.0), vec![2.0, 5.0, 8.0]);
        assert_eq!(dot_positions(2.0, 3.0), vec![1.0]);
        assert!(dot_positions(0.0, 3.0).is_empty());
    }

    #[test]
    fn exact_dots_sit_on_the_grid() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(12.0, 0.0),
            Point::new(12.0, 12.0),
            Point::new(0.0, 12.0),
        ]);
        let draw = DrawConfig::new(DrawOptions::default().with_roughness(0.0)).unwrap();
        let mut config = FillConfig::new(
            FillOptions::default()
                .with_hachure_angle(0.0)
                .with_hachure_gap(4.0)
                .with_fill_weight(1.0),
            draw,
        )
        .unwrap();
        let set = dots_fill(&poly, &mut config);
        // Scan lines at y = 4 and y = 8, three dots each
        let moves: Vec<Point> = set
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Move(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(moves.len(), 6);
        let centres: Vec<Point> = [4.0, 8.0]
            .iter()
            .flat_map(|&y| [2.0, 6.0, 10.0].map(|x| Point::new(x, y)))
            .collect();
        for p in &moves {
            // Each exact dot starts on its circle: radius 0.5 around a centre
            let r = centres
                .iter()
                .map(|c| p.distance(*c))
                .fold(f64::INFINITY, f64::min);
            assert!((r - 0.5).abs() < 1e-9, "{:?} is {} from the nearest centre", p, r);
        }
    }
}

//! Zigzag-line fill - each hachure segment replaced by a triangular wave.

use crate::config::FillConfig;
use crate::geometry::Polygon;
use crate::hatch::hachure_lines;
use crate::op::OpSet;

use super::util::{Walk, fill_stroke};

/// Triangular waves of amplitude `zigzag_offset` along widened hachure lines.
///
/// The scan gap grows by the amplitude so neighbouring waves don't touch.
pub fn zigzag_line_fill(polygon: &Polygon, config: &mut FillConfig) -> OpSet {
    let amplitude = config.zigzag_offset();
    let gap = config.hachure_gap() + amplitude;
    let lines = hachure_lines(polygon, gap, config.hachure_angle());

    let mut ops = Vec::new();
    for line in &lines {
        let Some(walk) = Walk::new(line) else {
            continue;
        };
        let wavelength = 2.0 * amplitude;
        let count = (walk.length / wavelength).round() as usize;
        for i in 0..count {
            let from = i as f64 * wavelength;
            let start = walk.at(from);
            let peak = walk.offset_at(from + amplitude, amplitude);
            let end = walk.at(from + wavelength);
            ops.extend(fill_stroke(start, peak, &mut config.draw));
            ops.extend(fill_stroke(peak, end, &mut config.draw));
        }
    }
    OpSet::fill_sketch(ops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DrawConfig, DrawOptions, FillOptions};
    use crate::geometry::Point;
    use crate::op::Op;

    #[test]
    fn wave_count_follows_length() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(40.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        let draw = DrawConfig::new(
            DrawOptions::default().with_roughness(0.0).with_multi_stroke_fill(false),
        )
        .unwrap();
        let mut config = FillConfig::new(
            FillOptions::default()
                .with_hachure_angle(0.0)
                .with_hachure_gap(3.0)
                .with_zigzag_offset(2.0),
            draw,
        )
        .unwrap();
        let set = zigzag_line_fill(&poly, &mut config);
        // Gap 5 gives one scan line at y = 5, 40 long: ten waves of two strokes
        let moves = set.ops.iter().filter(|op| matches!(op, Op::Move(_))).count();
        assert_eq!(moves, 20);
        // First peak sits one amplitude above the line
        let peak = set.ops[1].end_point();
        assert!((peak.x - 2.0).abs() < 1e-9 && (peak.y - 7.0).abs() < 1e-9, "{:?}", peak);
    }
}

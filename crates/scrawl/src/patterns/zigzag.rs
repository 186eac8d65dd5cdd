//! Zigzag fill - hachure segments joined into one back-and-forth stroke.
//!
//! Scan rows alternate direction, so each connector only steps across to
//! the neighbouring row's nearby end. On concave shapes a connector can
//! leave the polygon; the stroke is broken there and only the connector's
//! inside pieces are drawn.

use crate::clip::{EPSILON, clip_line_to_rings};
use crate::config::FillConfig;
use crate::geometry::{Line, Point, Polygon};
use crate::hatch::scanlines;
use crate::op::OpSet;

use super::util::fill_stroke;

/// How far a connector endpoint may sit from a ring edge and still count as on it.
const BOUNDARY_TOLERANCE: f64 = 1e-6;

/// Group hachure segments into continuous zigzag runs.
///
/// Each run is a polyline; consecutive runs are separated wherever a
/// connector would cross outside the polygon.
pub fn zigzag_runs(polygon: &Polygon, gap: f64, angle_degrees: f64) -> Vec<Vec<Point>> {
    let rows: Vec<Vec<Line>> = scanlines(polygon, gap, angle_degrees)
        .iter()
        .map(|scan| scan.spans().collect::<Vec<_>>())
        .filter(|spans| !spans.is_empty())
        .collect();

    // Boustrophedon: every other row runs backwards
    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .flat_map(|(row, spans)| {
            let spans: Vec<Line> = if row % 2 == 0 {
                spans
            } else {
                spans
                    .into_iter()
                    .rev()
                    .map(|span| Line::between(span.end(), span.start()))
                    .collect()
            };
            spans
        })
        .collect();
    let rings: Vec<&[Point]> = polygon.rings().collect();

    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        current.push(line.start());
        current.push(line.end());

        let Some(next) = lines.get(i + 1) else {
            break;
        };

        let connector = Line::between(line.end(), next.start());
        if connector.length() < EPSILON || along_boundary(connector, &rings) {
            continue;
        }
        let pieces = clip_line_to_rings(connector, &rings);
        if pieces.len() == 1 && (pieces[0].length() - connector.length()).abs() < BOUNDARY_TOLERANCE {
            continue;
        }

        // Broken connector: close this run, keep the inside pieces on their own
        runs.push(std::mem::take(&mut current));
        runs.extend(pieces.iter().map(|piece| vec![piece.start(), piece.end()]));
    }

    if current.len() > 1 {
        runs.push(current);
    }
    runs
}

/// True when both ends of `connector` lie on the same ring edge.
///
/// Ray casting puts part of the boundary outside, so a connector running
/// along an edge would otherwise be clipped away.
fn along_boundary(connector: Line, rings: &[&[Point]]) -> bool {
    rings.iter().any(|ring| {
        let n = ring.len();
        (0..n).any(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            segment_distance(connector.start(), a, b) < BOUNDARY_TOLERANCE
                && segment_distance(connector.end(), a, b) < BOUNDARY_TOLERANCE
        })
    })
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let length_sq = dx * dx + dy * dy;
    if length_sq < EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / length_sq).clamp(0.0, 1.0);
    p.distance(a.lerp(b, t))
}

/// Draw each zigzag run as a chain of rough fill strokes.
pub fn zigzag_fill(polygon: &Polygon, config: &mut FillConfig) -> OpSet {
    let runs = zigzag_runs(polygon, config.hachure_gap(), config.hachure_angle());
    let mut ops = Vec::new();
    for run in &runs {
        for pair in run.windows(2) {
            if pair[0].distance(pair[1]) < EPSILON {
                continue;
            }
            ops.extend(fill_stroke(pair[0], pair[1], &mut config.draw));
        }
    }
    OpSet::fill_sketch(ops)
}

//! Hand-drawn path construction.
//!
//! Turns exact geometry into the slightly wobbly operations a person with a
//! pen would produce. Based on the RoughJS algorithms:
//! - Endpoint randomization (roughness)
//! - Line bowing (curvature)
//! - Double-stroke effect
//! - Catmull-Rom curve fitting through jittered points
//!
//! Every function draws from the [`DrawConfig`]'s random source, so calling
//! them in the same order on a freshly reset config reproduces the output
//! exactly.
//!
//! # Example
//! ```
//! use scrawl::{DrawConfig, DrawOptions, sketchy};
//!
//! let mut config = DrawConfig::new(DrawOptions::default().with_seed(7)).unwrap();
//! let set = sketchy::line(0.0, 0.0, 100.0, 100.0, &mut config);
//! assert_eq!(set.ops.len(), 4); // two strokes of move + curve
//! ```

use std::f64::consts::{PI, TAU};

use crate::config::DrawConfig;
use crate::geometry::Point;
use crate::op::{Op, OpSet};

// ============================================================================
// LINES
// ============================================================================

/// A single perturbed stroke from `(x1, y1)` to `(x2, y2)`.
///
/// The overlay pass uses half the offset so the second stroke hugs the
/// first one.
fn stroke(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    config: &mut DrawConfig,
    overlay: bool,
) -> Vec<Op> {
    let opts = *config.options();
    let length_sq = (x1 - x2).powi(2) + (y1 - y2).powi(2);
    let length = length_sq.sqrt();

    // Long lines would look scribbled at full roughness
    let gain = if length < 200.0 {
        1.0
    } else if length > 500.0 {
        0.4
    } else {
        -0.0016668 * length + 1.233334
    };

    let mut offset = opts.max_randomness_offset;
    if offset * offset * 100.0 > length_sq {
        offset = length / 10.0;
    }
    let spread = if overlay { offset / 2.0 } else { offset };

    let diverge = 0.2 + config.random() * 0.2;
    let bow_x = opts.bowing * opts.max_randomness_offset * (y2 - y1) / 200.0;
    let bow_y = opts.bowing * opts.max_randomness_offset * (x1 - x2) / 200.0;
    let bow_x = config.offset_symmetric(bow_x, gain);
    let bow_y = config.offset_symmetric(bow_y, gain);

    let pin = opts.preserve_vertices;
    let jitter = |config: &mut DrawConfig, pinned: bool| {
        if pinned { 0.0 } else { config.offset_symmetric(spread, gain) }
    };

    let start = Op::move_to(x1 + jitter(config, pin), y1 + jitter(config, pin));
    let c1x = bow_x + x1 + (x2 - x1) * diverge + jitter(config, false);
    let c1y = bow_y + y1 + (y2 - y1) * diverge + jitter(config, false);
    let c2x = bow_x + x1 + 2.0 * (x2 - x1) * diverge + jitter(config, false);
    let c2y = bow_y + y1 + 2.0 * (y2 - y1) * diverge + jitter(config, false);
    let ex = x2 + jitter(config, pin);
    let ey = y2 + jitter(config, pin);

    vec![start, Op::curve_to(c1x, c1y, c2x, c2y, ex, ey)]
}

/// Draw a line twice, the way a hand retraces it.
///
/// `filling` selects which multi-stroke switch applies: fill strokes honour
/// `disable_multi_stroke_fill`, outlines `disable_multi_stroke`.
pub fn double_line(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    config: &mut DrawConfig,
    filling: bool,
) -> Vec<Op> {
    let single = if filling {
        config.options().disable_multi_stroke_fill
    } else {
        config.options().disable_multi_stroke
    };

    let mut ops = stroke(x1, y1, x2, y2, config, false);
    if !single {
        ops.extend(stroke(x1, y1, x2, y2, config, true));
    }
    ops
}

/// A rough straight line.
pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, config: &mut DrawConfig) -> OpSet {
    OpSet::path(double_line(x1, y1, x2, y2, config, false))
}

/// Rough lines through consecutive points, optionally back to the start.
///
/// Two points give a single line; fewer give an empty set.
pub fn linear_path(points: &[Point], close: bool, config: &mut DrawConfig) -> OpSet {
    let len = points.len();
    if len < 2 {
        return OpSet::path(Vec::new());
    }
    if len == 2 {
        return line(points[0].x, points[0].y, points[1].x, points[1].y, config);
    }

    let mut ops = Vec::with_capacity(len * 4);
    for pair in points.windows(2) {
        ops.extend(double_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, config, false));
    }
    if close {
        let (first, last) = (points[0], points[len - 1]);
        ops.extend(double_line(last.x, last.y, first.x, first.y, config, false));
    }
    OpSet::path(ops)
}

/// A closed rough outline through `points`.
pub fn polygon(points: &[Point], config: &mut DrawConfig) -> OpSet {
    linear_path(points, true, config)
}

/// The four corners of a rectangle, clockwise from `(x, y)`.
pub fn rectangle_points(x: f64, y: f64, width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}

/// A rough rectangle outline.
pub fn rectangle(x: f64, y: f64, width: f64, height: f64, config: &mut DrawConfig) -> OpSet {
    polygon(&rectangle_points(x, y, width, height), config)
}

// ============================================================================
// CURVES
// ============================================================================

/// Fit cubic segments through `points` (Catmull-Rom to Bézier).
///
/// The first and last points only steer the tangents; the curve runs from
/// `points[1]` to `points[len - 2]`. `curve_tightness` of 1 flattens every
/// segment into a straight run.
fn fit_curve(points: &[Point], config: &mut DrawConfig) -> Vec<Op> {
    let len = points.len();
    let mut ops = Vec::new();

    if len > 3 {
        let s = 1.0 - config.options().curve_tightness;
        ops.push(Op::Move(points[1]));
        for i in 1..len - 2 {
            let (prev, cur, next, after) = (points[i - 1], points[i], points[i + 1], points[i + 2]);
            ops.push(Op::curve_to(
                cur.x + (s * next.x - s * prev.x) / 6.0,
                cur.y + (s * next.y - s * prev.y) / 6.0,
                next.x + (s * cur.x - s * after.x) / 6.0,
                next.y + (s * cur.y - s * after.y) / 6.0,
                next.x,
                next.y,
            ));
        }
    } else if len == 3 {
        ops.push(Op::Move(points[1]));
        ops.push(Op::CurveTo { c1: points[1], c2: points[2], to: points[2] });
    } else if len == 2 {
        ops.extend(double_line(points[0].x, points[0].y, points[1].x, points[1].y, config, false));
    }
    ops
}

/// Jitter every point by `offset`, doubling the ends so the fit passes
/// through them, then fit a curve.
fn curve_with_offset(points: &[Point], offset: f64, config: &mut DrawConfig) -> Vec<Op> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut jittered = Vec::with_capacity(points.len() + 2);
    let jitter = |p: Point, config: &mut DrawConfig| {
        Point::new(
            p.x + config.offset_symmetric(offset, 1.0),
            p.y + config.offset_symmetric(offset, 1.0),
        )
    };

    jittered.push(jitter(first, config));
    jittered.push(jitter(first, config));
    for (i, &p) in points.iter().enumerate().skip(1) {
        jittered.push(jitter(p, config));
        if i == points.len() - 1 {
            jittered.push(jitter(p, config));
        }
    }
    fit_curve(&jittered, config)
}

/// A smooth rough curve through `points`.
///
/// The second stroke comes from a config with the next seed, so it wanders
/// independently of the first instead of repeating it.
pub fn curve(points: &[Point], config: &mut DrawConfig) -> OpSet {
    if points.is_empty() {
        return OpSet::path(Vec::new());
    }
    let roughness = config.roughness();
    let mut ops = curve_with_offset(points, 1.0 + roughness * 0.2, config);
    if !config.options().disable_multi_stroke {
        let mut altered = config.with_altered_seed();
        ops.extend(curve_with_offset(points, 1.5 * (1.0 + roughness * 0.22), &mut altered));
    }
    OpSet::path(ops)
}

/// A rough cubic Bézier from `current` to `to`, for SVG path input.
///
/// Drawn twice unless multi-stroke is disabled; the second pass starts
/// from a jittered copy of `current`.
pub fn bezier_to(
    current: Point,
    c1: Point,
    c2: Point,
    to: Point,
    config: &mut DrawConfig,
) -> Vec<Op> {
    let opts = *config.options();
    let base = if opts.max_randomness_offset > 0.0 { opts.max_randomness_offset } else { 1.0 };
    let spreads = [base, base + 0.3];
    let passes = if opts.disable_multi_stroke { 1 } else { 2 };
    let pin = opts.preserve_vertices;

    let mut ops = Vec::with_capacity(passes * 2);
    for (i, &spread) in spreads.iter().enumerate().take(passes) {
        if i == 0 || pin {
            ops.push(Op::Move(current));
        } else {
            ops.push(Op::move_to(
                current.x + config.offset_symmetric(spreads[0], 1.0),
                current.y + config.offset_symmetric(spreads[0], 1.0),
            ));
        }
        let end = if pin {
            to
        } else {
            Point::new(
                to.x + config.offset_symmetric(spread, 1.0),
                to.y + config.offset_symmetric(spread, 1.0),
            )
        };
        ops.push(Op::curve_to(
            c1.x + config.offset_symmetric(spread, 1.0),
            c1.y + config.offset_symmetric(spread, 1.0),
            c2.x + config.offset_symmetric(spread, 1.0),
            c2.y + config.offset_symmetric(spread, 1.0),
            end.x,
            end.y,
        ));
    }
    ops
}

// ============================================================================
// ELLIPSES & ARCS
// ============================================================================

/// Sampling parameters for one ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseParams {
    /// Angular step between samples (radians)
    pub increment: f64,
    pub rx: f64,
    pub ry: f64,
}

/// Output of [`ellipse_with_params`].
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseResult {
    /// The outline
    pub opset: OpSet,
    /// One sample per step; used as the fill polygon
    pub core_points: Vec<Point>,
    /// Core samples plus the closure points the outline curve is fitted through
    pub all_points: Vec<Point>,
}

/// Size-driven sample count stops growing here.
pub const MAX_ELLIPSE_STEPS: f64 = 1000.0;

/// Pick the step and roughened radii for an ellipse of the given size.
///
/// Bigger ellipses get more samples, never fewer than `curve_step_count`
/// and, from size alone, never more than [`MAX_ELLIPSE_STEPS`].
pub fn ellipse_params(width: f64, height: f64, config: &mut DrawConfig) -> EllipseParams {
    let step_count = config.options().curve_step_count as f64;
    let curve_fitting = config.options().curve_fitting;

    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let perimeter_sq = (TAU * ((half_w * half_w + half_h * half_h) / 2.0).sqrt()).sqrt();
    let steps = (step_count / 200f64.sqrt() * perimeter_sq)
        .min(MAX_ELLIPSE_STEPS)
        .max(step_count)
        .ceil();
    let increment = TAU / steps;

    let mut rx = half_w.abs();
    let mut ry = half_h.abs();
    let fit_adjust = 1.0 - curve_fitting;
    rx += config.offset_symmetric(rx * fit_adjust, 1.0);
    ry += config.offset_symmetric(ry * fit_adjust, 1.0);

    EllipseParams { increment, rx, ry }
}

/// Sample ellipse points.
///
/// Returns `(all_points, core_points)`. At zero roughness the samples are
/// exact and four times denser; otherwise the ring starts at a random phase
/// and overlaps itself by `overlap` radians so the stroke closes visibly.
fn ellipse_points(
    params: EllipseParams,
    cx: f64,
    cy: f64,
    offset: f64,
    overlap: f64,
    config: &mut DrawConfig,
) -> (Vec<Point>, Vec<Point>) {
    let EllipseParams { increment, rx, ry } = params;
    let at = |angle: f64, scale: f64| {
        Point::new(cx + scale * rx * angle.cos(), cy + scale * ry * angle.sin())
    };

    let mut core = Vec::new();
    let mut all = Vec::new();

    if config.roughness() == 0.0 {
        let increment = increment / 4.0;
        all.push(at(-increment, 1.0));
        let mut i = 0u32;
        loop {
            let angle = i as f64 * increment;
            if angle > TAU + 1e-9 {
                break;
            }
            let p = at(angle, 1.0);
            core.push(p);
            all.push(p);
            i += 1;
        }
        all.push(at(0.0, 1.0));
        all.push(at(increment, 1.0));
        return (all, core);
    }

    let jittered = |angle: f64, scale: f64, config: &mut DrawConfig| {
        let p = at(angle, scale);
        Point::new(
            p.x + config.offset_symmetric(offset, 1.0),
            p.y + config.offset_symmetric(offset, 1.0),
        )
    };

    let phase = config.offset_symmetric(0.5, 1.0) - PI / 2.0;
    all.push(jittered(phase - increment, 0.9, config));

    let end = TAU + phase - 0.01;
    let mut i = 0u32;
    loop {
        let angle = phase + i as f64 * increment;
        if angle >= end {
            break;
        }
        let p = jittered(angle, 1.0, config);
        core.push(p);
        all.push(p);
        i += 1;
    }

    all.push(jittered(phase + TAU + overlap * 0.5, 1.0, config));
    all.push(jittered(phase + overlap, 0.98, config));
    all.push(jittered(phase + overlap * 0.5, 0.9, config));
    (all, core)
}

/// Outline an ellipse with precomputed parameters.
///
/// Reuse the same `params` for the outline and a solid fill of the same
/// ellipse so both agree on size.
pub fn ellipse_with_params(
    cx: f64,
    cy: f64,
    params: EllipseParams,
    config: &mut DrawConfig,
) -> EllipseResult {
    let inner = config.offset(0.4, 1.0, 1.0);
    let overlap = params.increment * config.offset(0.1, inner, 1.0);
    let (all_points, core_points) = ellipse_points(params, cx, cy, 1.0, overlap, config);

    let mut ops = fit_curve(&all_points, config);
    if !config.options().disable_multi_stroke && config.roughness() != 0.0 {
        let (second, _) = ellipse_points(params, cx, cy, 1.5, 0.0, config);
        ops.extend(fit_curve(&second, config));
    }

    EllipseResult {
        opset: OpSet::path(ops),
        core_points,
        all_points,
    }
}

/// A rough ellipse centred on `(cx, cy)`.
pub fn ellipse(cx: f64, cy: f64, width: f64, height: f64, config: &mut DrawConfig) -> OpSet {
    let params = ellipse_params(width, height, config);
    ellipse_with_params(cx, cy, params, config).opset
}

/// Arcs narrower than this (radians) are treated as empty.
const MIN_ARC_SPAN: f64 = 1e-9;

/// Arc angles with a non-negative start and at most one full turn.
fn normalize_arc(start: f64, stop: f64) -> (f64, f64) {
    let (mut start, mut stop) = (start, stop);
    if start < 0.0 {
        let turns = (-start / TAU).ceil();
        start += turns * TAU;
        stop += turns * TAU;
    }
    if stop - start > TAU {
        start = 0.0;
        stop = TAU;
    }
    (start, stop)
}

/// Arc radii, roughened by one percent.
fn arc_radii(width: f64, height: f64, config: &mut DrawConfig) -> (f64, f64) {
    let mut rx = (width / 2.0).abs();
    let mut ry = (height / 2.0).abs();
    rx += config.offset_symmetric(rx * 0.01, 1.0);
    ry += config.offset_symmetric(ry * 0.01, 1.0);
    (rx, ry)
}

#[allow(clippy::too_many_arguments)]
fn arc_pass(
    increment: f64,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start: f64,
    stop: f64,
    offset: f64,
    config: &mut DrawConfig,
) -> Vec<Op> {
    let phase = start + config.offset_symmetric(0.1, 1.0);
    let jittered = |angle: f64, scale: f64, config: &mut DrawConfig| {
        Point::new(
            config.offset_symmetric(offset, 1.0) + cx + scale * rx * angle.cos(),
            config.offset_symmetric(offset, 1.0) + cy + scale * ry * angle.sin(),
        )
    };

    let mut points = vec![jittered(phase - increment, 0.9, config)];
    let mut i = 0u32;
    loop {
        let angle = phase + i as f64 * increment;
        if angle > stop {
            break;
        }
        points.push(jittered(angle, 1.0, config));
        i += 1;
    }
    let end = Point::new(cx + rx * stop.cos(), cy + ry * stop.sin());
    points.push(end);
    points.push(end);
    fit_curve(&points, config)
}

/// A rough elliptical arc from `start` to `stop` (radians, clockwise in
/// screen space).
///
/// A closed arc is joined to the centre, with rough double lines when
/// `rough_closure` is set or exact `line-to`s otherwise (used for solid
/// fills). An empty angular span gives an empty set.
#[allow(clippy::too_many_arguments)]
pub fn arc(
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    start: f64,
    stop: f64,
    closed: bool,
    rough_closure: bool,
    config: &mut DrawConfig,
) -> OpSet {
    let (start, stop) = normalize_arc(start, stop);
    if !(stop - start > MIN_ARC_SPAN) {
        return OpSet::path(Vec::new());
    }
    let (rx, ry) = arc_radii(width, height, config);

    let step = TAU / config.options().curve_step_count as f64;
    let increment = (step / 2.0).min((stop - start) / 2.0);

    let mut ops = arc_pass(increment, cx, cy, rx, ry, start, stop, 1.0, config);
    if !config.options().disable_multi_stroke {
        ops.extend(arc_pass(increment, cx, cy, rx, ry, start, stop, 1.5, config));
    }

    if closed {
        let from = Point::new(cx + rx * start.cos(), cy + ry * start.sin());
        let to = Point::new(cx + rx * stop.cos(), cy + ry * stop.sin());
        if rough_closure {
            ops.extend(double_line(cx, cy, from.x, from.y, config, false));
            ops.extend(double_line(cx, cy, to.x, to.y, config, false));
        } else {
            ops.push(Op::line_to(cx, cy));
            ops.push(Op::LineTo(from));
        }
    }
    OpSet::path(ops)
}

/// The pie-slice polygon a closed arc's pattern fill is computed over.
///
/// Samples the arc in `curve_step_count` steps, then adds the centre.
pub fn arc_fill_points(
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    start: f64,
    stop: f64,
    config: &mut DrawConfig,
) -> Vec<Point> {
    let (start, stop) = normalize_arc(start, stop);
    if !(stop - start > MIN_ARC_SPAN) {
        return Vec::new();
    }
    let (rx, ry) = arc_radii(width, height, config);
    let steps = config.options().curve_step_count;
    let increment = (stop - start) / steps as f64;

    let mut points: Vec<Point> = (0..=steps)
        .map(|i| {
            let angle = start + i as f64 * increment;
            Point::new(cx + rx * angle.cos(), cy + ry * angle.sin())
        })
        .collect();
    points.push(Point::new(cx + rx * stop.cos(), cy + ry * stop.sin()));
    points.push(Point::new(cx, cy));
    points
}

// ============================================================================
// SOLID FILL
// ============================================================================

/// A solid fill region: every ring with at least three points becomes a
/// closed `move` + `line-to` run, vertices jittered by the max offset.
pub fn solid_fill_polygon<'a>(
    rings: impl IntoIterator<Item = &'a [Point]>,
    config: &mut DrawConfig,
) -> OpSet {
    let spread = config.options().max_randomness_offset;
    let mut ops = Vec::new();
    for ring in rings {
        if ring.len() < 3 {
            continue;
        }
        for (i, p) in ring.iter().enumerate() {
            let x = p.x + config.offset_symmetric(spread, 1.0);
            let y = p.y + config.offset_symmetric(spread, 1.0);
            ops.push(if i == 0 { Op::move_to(x, y) } else { Op::line_to(x, y) });
        }
    }
    OpSet::fill_path(ops)
}

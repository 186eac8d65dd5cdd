//! Scanline fill engine.
//!
//! Produces the parallel interior segments every fill pattern is built
//! from. Rather than rotating the polygon, the rings are expressed once in a
//! frame aligned with the hatch direction: `u` runs along the lines and `v`
//! across them. Probe lines are then plain `v = const` lines, spaced exactly
//! `gap` apart whatever the angle.
//!
//! Crossings are paired with the even-odd rule, so concave polygons,
//! self-intersecting polygons and holes need no special handling.

use std::f64::consts::PI;

use crate::clip::{EPSILON, line_intersection};
use crate::geometry::{Line, Point, Polygon};

/// One polygon side in the scan frame.
///
/// `x` is the along-line coordinate at `y_min`; `slope` is `dx/dy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub y_min: f64,
    pub y_max: f64,
    pub x: f64,
    pub slope: f64,
}

impl Edge {
    /// Build an edge from two frame-space points, or `None` for a
    /// horizontal edge (it can never cross a probe line).
    fn from_points(a: Point, b: Point) -> Option<Self> {
        let (lo, hi) = if a.y <= b.y { (a, b) } else { (b, a) };
        let dy = hi.y - lo.y;
        if dy.abs() < EPSILON {
            return None;
        }
        Some(Self {
            y_min: lo.y,
            y_max: hi.y,
            x: lo.x,
            slope: (hi.x - lo.x) / dy,
        })
    }

    /// Half-open membership: a vertex shared by two edges is claimed once.
    #[inline]
    pub fn spans(&self, v: f64) -> bool {
        self.y_min <= v && v < self.y_max
    }

    #[inline]
    fn lower(&self) -> Point {
        Point::new(self.x, self.y_min)
    }

    #[inline]
    fn upper(&self) -> Point {
        Point::new(self.x + self.slope * (self.y_max - self.y_min), self.y_max)
    }
}

/// Orthonormal frame aligned with the hatch angle.
#[derive(Debug, Clone, Copy)]
struct Frame {
    // Along the hatch lines
    dx: f64,
    dy: f64,
    // Across the hatch lines
    nx: f64,
    ny: f64,
}

impl Frame {
    fn from_degrees(angle_degrees: f64) -> Self {
        let rad = angle_degrees * PI / 180.0;
        let (sin, cos) = rad.sin_cos();
        Self { dx: cos, dy: sin, nx: -sin, ny: cos }
    }

    #[inline]
    fn to_frame(&self, p: Point) -> Point {
        Point::new(p.x * self.dx + p.y * self.dy, p.x * self.nx + p.y * self.ny)
    }

    #[inline]
    fn to_world(&self, u: f64, v: f64) -> Point {
        Point::new(u * self.dx + v * self.nx, u * self.dy + v * self.ny)
    }
}

/// The crossings found on one probe line.
///
/// `crossings` are world-space points sorted along the hatch direction and
/// always come in pairs: each pair bounds one inside span.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanline {
    /// Perpendicular position of the probe in the scan frame
    pub offset: f64,
    pub crossings: Vec<Point>,
}

impl Scanline {
    /// The inside spans of this scanline, zero-length ones removed.
    pub fn spans(&self) -> impl Iterator<Item = Line> + '_ {
        self.crossings
            .chunks_exact(2)
            .filter(|pair| pair[0].distance(pair[1]) > EPSILON)
            .map(|pair| Line::between(pair[0], pair[1]))
    }
}

/// Remove repeated consecutive points and a repeated closing point.
fn clean_ring(ring: &[Point]) -> Vec<Point> {
    let mut points: Vec<Point> = ring.to_vec();
    points.dedup_by(|a, b| a.distance(*b) < EPSILON);
    while points.len() > 1 {
        let first = points[0];
        match points.last() {
            Some(last) if last.distance(first) < EPSILON => {
                points.pop();
            }
            _ => break,
        }
    }
    points
}

/// Build the edge table for all rings, in scan-frame coordinates.
///
/// Returns `None` when the polygon has fewer than three non-degenerate
/// edges in total; such a polygon encloses nothing.
fn build_edges(polygon: &Polygon, frame: &Frame) -> Option<Vec<Edge>> {
    let mut edges = Vec::new();
    let mut sides = 0usize;

    for ring in polygon.rings() {
        let ring = clean_ring(ring);
        if ring.len() < 3 {
            continue;
        }
        let local: Vec<Point> = ring.iter().map(|&p| frame.to_frame(p)).collect();
        let n = local.len();
        for i in 0..n {
            sides += 1;
            if let Some(edge) = Edge::from_points(local[i], local[(i + 1) % n]) {
                edges.push(edge);
            }
        }
    }

    if sides < 3 || edges.is_empty() {
        return None;
    }
    Some(edges)
}

/// Smallest gap the scanner will use; tighter requests are widened to this.
pub const MIN_HACHURE_GAP: f64 = 0.1;

/// Upper bound on scan rows per call; huge shapes get a wider gap instead.
pub const MAX_SCANLINES: usize = 100_000;

/// Sweep probe lines across the polygon and collect their crossings.
///
/// Deterministic: no randomness is involved, so the same polygon, gap and
/// angle always give the same scanlines. The gap is clamped to at least
/// [`MIN_HACHURE_GAP`], and widened further if the sweep would otherwise
/// exceed [`MAX_SCANLINES`] rows.
pub fn scanlines(polygon: &Polygon, gap: f64, angle_degrees: f64) -> Vec<Scanline> {
    if !(gap > 0.0) || !gap.is_finite() || !angle_degrees.is_finite() {
        return Vec::new();
    }

    let requested_gap = gap;
    let frame = Frame::from_degrees(angle_degrees);
    let Some(edges) = build_edges(polygon, &frame) else {
        return Vec::new();
    };

    let v_min = edges.iter().map(|e| e.y_min).fold(f64::INFINITY, f64::min);
    let v_max = edges.iter().map(|e| e.y_max).fold(f64::NEG_INFINITY, f64::max);
    let u_min = edges
        .iter()
        .flat_map(|e| [e.lower().x, e.upper().x])
        .fold(f64::INFINITY, f64::min);
    let u_max = edges
        .iter()
        .flat_map(|e| [e.lower().x, e.upper().x])
        .fold(f64::NEG_INFINITY, f64::max);

    let gap = gap
        .max(MIN_HACHURE_GAP)
        .max((v_max - v_min) / MAX_SCANLINES as f64);
    if gap != requested_gap {
        log::debug!("hachure gap {} widened to {}", requested_gap, gap);
    }

    let mut result = Vec::new();
    let mut hits: Vec<(f64, f64)> = Vec::with_capacity(8);
    let mut odd = 0usize;

    // Offsets are recomputed from k each step so error does not accumulate.
    let mut k = 1u64;
    loop {
        let v = v_min + k as f64 * gap;
        if v >= v_max {
            break;
        }
        k += 1;

        let probe_start = Point::new(u_min - 1.0, v);
        let probe_end = Point::new(u_max + 1.0, v);

        hits.clear();
        for edge in edges.iter().filter(|e| e.spans(v)) {
            if let Some(hit) = line_intersection(probe_start, probe_end, edge.lower(), edge.upper()) {
                hits.push((hit.distance, hit.point.x));
            }
        }
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));

        if hits.len() % 2 == 1 {
            hits.pop();
            odd += 1;
        }
        if hits.is_empty() {
            continue;
        }

        result.push(Scanline {
            offset: v,
            crossings: hits.iter().map(|&(_, u)| frame.to_world(u, v)).collect(),
        });
    }

    log::trace!(
        "scanned {} probe lines at {:.1}°, {} with crossings, {} odd",
        k - 1,
        angle_degrees,
        result.len(),
        odd
    );
    result
}

/// Parallel interior segments at `angle_degrees`, `gap` apart.
pub fn hachure_lines(polygon: &Polygon, gap: f64, angle_degrees: f64) -> Vec<Line> {
    scanlines(polygon, gap, angle_degrees)
        .iter()
        .flat_map(Scanline::spans)
        .collect()
}

/// Two hachure passes, at `angle_degrees` and perpendicular to it.
pub fn crosshatch_lines(polygon: &Polygon, gap: f64, angle_degrees: f64) -> Vec<Line> {
    let mut lines = hachure_lines(polygon, gap, angle_degrees);
    lines.extend(hachure_lines(polygon, gap, angle_degrees + 90.0));
    lines
}

// ============================================================================
// TESTS
// ============================================================================

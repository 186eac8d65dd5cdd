//! Line intersection and polygon clipping.
//!
//! This is the HOT PATH - the scanline fill engine calls
//! [`line_intersection`] once per probe line per active edge.

use crate::geometry::{Line, Point};

/// Tolerance shared by every comparison in this module.
///
/// Determinants below this magnitude are treated as parallel lines, and
/// clipped pieces shorter than this are discarded.
pub const EPSILON: f64 = 1e-10;

// ============================================================================
// LINE-LINE INTERSECTION
// ============================================================================

/// Where two lines cross.
///
/// `t` is the parameter along the first (probing) line and `u` the parameter
/// along the second one: 0 at the start point, 1 at the end point. Values
/// outside [0, 1] mean the crossing lies beyond that segment's extent.
/// `distance` is `t` scaled by the probing segment's length, so it is a
/// signed distance from the probe's start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub point: Point,
    pub t: f64,
    pub u: f64,
    pub distance: f64,
}

impl Intersection {
    /// True when the crossing lies within both segments.
    #[inline]
    pub fn within_segments(&self) -> bool {
        (0.0..=1.0).contains(&self.t) && (0.0..=1.0).contains(&self.u)
    }
}

/// Intersect the infinite lines through `a1-a2` and `b1-b2`.
///
/// Returns `None` when the lines are parallel or coincident (or one of the
/// segments has zero length). A crossing outside either segment is still
/// reported; callers bounds-check with `t`, `u` or their own ranges.
///
/// ## Rust Lesson #10: Option instead of sentinel values
///
/// "No intersection" is a normal answer here, not an error, so the
/// function returns `Option` rather than `Result`.
#[inline]
pub fn line_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Intersection> {
    let (dax, day) = (a2.x - a1.x, a2.y - a1.y);
    let (dbx, dby) = (b2.x - b1.x, b2.y - b1.y);

    let denom = dax * dby - day * dbx;

    // Parallel or coincident lines
    if denom.abs() < EPSILON {
        return None;
    }

    let (ox, oy) = (b1.x - a1.x, b1.y - a1.y);
    let t = (ox * dby - oy * dbx) / denom;
    let u = (ox * day - oy * dax) / denom;

    Some(Intersection {
        point: Point::new(a1.x + t * dax, a1.y + t * day),
        t,
        u,
        distance: t * (dax * dax + day * day).sqrt(),
    })
}

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================

/// Test if a point is inside a ring using ray casting.
///
/// Casts a ray to the right and counts edge crossings.
/// Odd crossings = inside, even = outside.
#[inline]
pub fn point_in_polygon(px: f64, py: f64, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// Even-odd containment over several rings (outer boundary plus holes).
#[inline]
pub fn point_in_rings<'a>(px: f64, py: f64, rings: impl IntoIterator<Item = &'a [Point]>) -> bool {
    rings
        .into_iter()
        .filter(|ring| point_in_polygon(px, py, ring))
        .count()
        % 2
        == 1
}

// ============================================================================
// SEGMENT-POLYGON CLIPPING
// ============================================================================

/// Clip a segment against a set of rings.
///
/// Returns the pieces of `line` that lie inside, in order from the
/// segment's start to its end.
pub fn clip_line_to_rings(line: Line, rings: &[&[Point]]) -> Vec<Line> {
    let start = line.start();
    let end = line.end();

    // ## Rust Lesson #11: Capacity Hints
    //
    // Vec::with_capacity(n) pre-allocates memory and avoids
    // reallocations while we push the crossing parameters.
    let mut params: Vec<f64> = Vec::with_capacity(8);
    params.push(0.0);

    for ring in rings {
        let n = ring.len();
        if n < 2 {
            continue;
        }
        for i in 0..n {
            let p1 = ring[i];
            let p2 = ring[(i + 1) % n];
            if let Some(hit) = line_intersection(start, end, p1, p2) {
                if hit.within_segments() {
                    params.push(hit.t);
                }
            }
        }
    }

    params.push(1.0);
    params.sort_by(f64::total_cmp);
    params.dedup_by(|a, b| (*a - *b).abs() < EPSILON);

    let length = line.length();

    // ## Rust Lesson #14: Iterators & Collecting
    //
    // .windows(2) gives sliding windows of size 2: [a,b], [b,c], [c,d], ...
    // .filter_map() keeps the pieces whose midpoint falls inside.
    params
        .windows(2)
        .filter_map(|pair| {
            if (pair[1] - pair[0]) * length < EPSILON {
                return None;
            }
            let a = start.lerp(end, pair[0]);
            let b = start.lerp(end, pair[1]);
            let mid = a.lerp(b, 0.5);
            if point_in_rings(mid.x, mid.y, rings.iter().copied()) {
                Some(Line::between(a, b))
            } else {
                None
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

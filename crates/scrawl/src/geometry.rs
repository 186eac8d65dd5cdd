//! Core geometry types for scrawl.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = duplicate the value (Copy = implicitly, small values only)
//! - `PartialEq` = can compare with `==`
//! - `Serialize` / `Deserialize` = serde can turn it into JSON and back

use serde::{Deserialize, Serialize};

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A closed polygon with an outer boundary and optional holes.
///
/// Rings are implicitly closed: the last point connects back to the first.
/// A repeated closing point is tolerated and ignored by the fill engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// Outer boundary vertices
    pub outer: Vec<Point>,
    /// Interior holes, filled with the even-odd rule
    pub holes: Vec<Vec<Point>>,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point at parameter `t` on the way from `self` to `other`.
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a line from its two endpoints.
    #[inline]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Get the start point of the line.
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Get the end point of the line.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Get the midpoint of the line.
    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.x1 + self.x2) / 2.0,
            (self.y1 + self.y2) / 2.0,
        )
    }

    /// Length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// Unit vector from start to end, or `None` for a zero-length line.
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// Rust has no `null`. A zero-length line has no direction,
    /// so the caller gets `None` and the compiler makes them handle it.
    #[inline]
    pub fn direction(&self) -> Option<(f64, f64)> {
        let length = self.length();
        if length <= f64::EPSILON {
            return None;
        }
        Some(((self.x2 - self.x1) / length, (self.y2 - self.y1) / length))
    }
}

impl Polygon {
    /// Create a simple polygon with no holes.
    pub fn new(outer: Vec<Point>) -> Self {
        Self { outer, holes: Vec::new() }
    }

    /// Create a polygon with holes.
    pub fn with_holes(outer: Vec<Point>, holes: Vec<Vec<Point>>) -> Self {
        Self { outer, holes }
    }

    /// Build a polygon from a list of rings; the first one is the outer boundary.
    pub fn from_rings(mut rings: Vec<Vec<Point>>) -> Self {
        if rings.is_empty() {
            return Self::default();
        }
        let outer = rings.remove(0);
        Self { outer, holes: rings }
    }

    /// Iterate over the outer ring followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &[Point]> {
        std::iter::once(self.outer.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn point_lerp() {
        let p = Point::new(0.0, 0.0).lerp(Point::new(10.0, -4.0), 0.25);
        assert_eq!(p, Point::new(2.5, -1.0));
    }

    #[test]
    fn line_length_and_direction() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(line.length(), 5.0);
        let (dx, dy) = line.direction().unwrap();
        assert!((dx - 0.6).abs() < 1e-12);
        assert!((dy - 0.8).abs() < 1e-12);
        assert!(Line::new(1.0, 1.0, 1.0, 1.0).direction().is_none());
    }

    #[test]
    fn rings_lists_outer_then_holes() {
        let poly = Polygon::from_rings(vec![
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
            vec![Point::new(2.0, 1.0), Point::new(3.0, 1.0), Point::new(3.0, 2.0)],
        ]);
        let rings: Vec<_> = poly.rings().collect();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[1][0], Point::new(2.0, 1.0));
    }
}

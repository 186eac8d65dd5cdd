//! Drawing operations and the drawables built from them.
//!
//! Everything the generators produce ends up here: a [`Drawable`] holds
//! ordered [`OpSet`]s, and each set is a list of [`Op`]s a renderer replays
//! in sequence.

use lyon_geom::{CubicBezierSegment, point};
use serde::{Deserialize, Serialize};

use crate::config::DrawOptions;
use crate::geometry::Point;

/// One drawing instruction.
///
/// ## Rust Lesson #22: Enums with Data
///
/// Each variant carries exactly the coordinates it needs, and a `match`
/// over `Op` must handle all three. Adding a fourth kind of operation
/// would make the compiler point at every renderer that forgot it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Op {
    /// Lift the pen and put it down at a point.
    Move(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Cubic Bézier from the current point.
    CurveTo { c1: Point, c2: Point, to: Point },
}

impl Op {
    #[inline]
    pub fn move_to(x: f64, y: f64) -> Self {
        Op::Move(Point::new(x, y))
    }

    #[inline]
    pub fn line_to(x: f64, y: f64) -> Self {
        Op::LineTo(Point::new(x, y))
    }

    #[inline]
    pub fn curve_to(c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        Op::CurveTo {
            c1: Point::new(c1x, c1y),
            c2: Point::new(c2x, c2y),
            to: Point::new(x, y),
        }
    }

    /// The point the pen ends up at after this operation.
    #[inline]
    pub fn end_point(&self) -> Point {
        match *self {
            Op::Move(p) | Op::LineTo(p) => p,
            Op::CurveTo { to, .. } => to,
        }
    }
}

/// How a renderer should treat an [`OpSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpSetKind {
    /// Stroked outline
    Path,
    /// Closed and filled as one solid region
    FillPath,
    /// Interior pattern strokes, stroked with the fill weight
    FillSketch,
}

impl OpSetKind {
    /// True for the kinds painted underneath the outline.
    #[inline]
    pub fn is_fill(&self) -> bool {
        matches!(self, OpSetKind::FillPath | OpSetKind::FillSketch)
    }
}

/// An ordered list of operations with a rendering kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpSet {
    pub kind: OpSetKind,
    pub ops: Vec<Op>,
}

impl OpSet {
    pub fn new(kind: OpSetKind, ops: Vec<Op>) -> Self {
        Self { kind, ops }
    }

    pub fn path(ops: Vec<Op>) -> Self {
        Self::new(OpSetKind::Path, ops)
    }

    pub fn fill_path(ops: Vec<Op>) -> Self {
        Self::new(OpSetKind::FillPath, ops)
    }

    pub fn fill_sketch(ops: Vec<Op>) -> Self {
        Self::new(OpSetKind::FillSketch, ops)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Render as SVG path data (`M`, `L`, `C` commands).
    ///
    /// Coordinates are rounded to `precision` decimals with trailing zeros
    /// removed. A `FillPath` set gets a closing `Z`.
    pub fn to_path_data(&self, precision: usize) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.ops.len() + 1);
        for op in &self.ops {
            let part = match op {
                Op::Move(p) => format!("M{} {}", fmt_num(p.x, precision), fmt_num(p.y, precision)),
                Op::LineTo(p) => format!("L{} {}", fmt_num(p.x, precision), fmt_num(p.y, precision)),
                Op::CurveTo { c1, c2, to } => format!(
                    "C{} {} {} {} {} {}",
                    fmt_num(c1.x, precision),
                    fmt_num(c1.y, precision),
                    fmt_num(c2.x, precision),
                    fmt_num(c2.y, precision),
                    fmt_num(to.x, precision),
                    fmt_num(to.y, precision),
                ),
            };
            parts.push(part);
        }
        if self.kind == OpSetKind::FillPath && !parts.is_empty() {
            parts.push("Z".to_string());
        }
        parts.join(" ")
    }

    /// Flatten into polylines, one per `Move`.
    ///
    /// Curves are approximated with lyon_geom so that no point of the
    /// polyline is further than `tolerance` from the true curve. Polylines
    /// with a single point (a move with nothing after it) are dropped.
    pub fn flatten(&self, tolerance: f64) -> Vec<Vec<Point>> {
        let mut polylines: Vec<Vec<Point>> = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut pen = Point::default();

        for op in &self.ops {
            match *op {
                Op::Move(p) => {
                    if current.len() > 1 {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(p);
                }
                Op::LineTo(p) => {
                    if current.is_empty() {
                        current.push(pen);
                    }
                    current.push(p);
                }
                Op::CurveTo { c1, c2, to } => {
                    if current.is_empty() {
                        current.push(pen);
                    }
                    let curve = CubicBezierSegment {
                        from: point(pen.x, pen.y),
                        ctrl1: point(c1.x, c1.y),
                        ctrl2: point(c2.x, c2.y),
                        to: point(to.x, to.y),
                    };
                    curve.for_each_flattened(tolerance, &mut |segment| {
                        current.push(Point::new(segment.to.x, segment.to.y));
                    });
                }
            }
            pen = op.end_point();
        }

        if current.len() > 1 {
            polylines.push(current);
        }
        polylines
    }
}

/// Format a coordinate for path data.
fn fmt_num(value: f64, precision: usize) -> String {
    let mut s = format!("{:.*}", precision, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Which primitive produced a [`Drawable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    Line,
    Rectangle,
    Ellipse,
    Circle,
    LinearPath,
    Polygon,
    Arc,
    Curve,
    Path,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Line => "line",
            Shape::Rectangle => "rectangle",
            Shape::Ellipse => "ellipse",
            Shape::Circle => "circle",
            Shape::LinearPath => "linearPath",
            Shape::Polygon => "polygon",
            Shape::Arc => "arc",
            Shape::Curve => "curve",
            Shape::Path => "path",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The complete output of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub shape: Shape,
    /// Optional caller-supplied tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The options the shape was generated with
    pub options: DrawOptions,
    /// Stroke width for `FillSketch` sets
    pub fill_weight: f64,
    pub sets: Vec<OpSet>,
}

impl Drawable {
    pub fn new(shape: Shape, options: DrawOptions, fill_weight: f64, sets: Vec<OpSet>) -> Self {
        Self {
            shape,
            id: None,
            options,
            fill_weight,
            sets,
        }
    }

    /// Attach a descriptive tag.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets in the order a renderer should paint them: fills, then outlines.
    ///
    /// The relative order within each group is preserved.
    pub fn paint_order(&self) -> Vec<&OpSet> {
        let fills = self.sets.iter().filter(|set| set.kind.is_fill());
        let outlines = self.sets.iter().filter(|set| !set.kind.is_fill());
        fills.chain(outlines).collect()
    }

    /// Every set flattened to polylines, in paint order.
    pub fn polylines(&self, tolerance: f64) -> Vec<Vec<Point>> {
        self.paint_order()
            .into_iter()
            .flat_map(|set| set.flatten(tolerance))
            .collect()
    }

    /// Total number of operations across all sets.
    pub fn op_count(&self) -> usize {
        self.sets.iter().map(OpSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_ops() -> Vec<Op> {
        vec![
            Op::move_to(0.0, 0.0),
            Op::line_to(10.0, 0.0),
            Op::line_to(10.0, 10.0),
            Op::line_to(0.0, 10.0),
        ]
    }

    #[test]
    fn path_data_formats_commands() {
        let set = OpSet::path(vec![
            Op::move_to(1.0, 2.5),
            Op::line_to(3.25, -0.0),
            Op::curve_to(1.0, 1.0, 2.0, 2.0, 3.123456, 4.0),
        ]);
        assert_eq!(set.to_path_data(2), "M1 2.5 L3.25 0 C1 1 2 2 3.12 4");
    }

    #[test]
    fn fill_path_is_closed() {
        let set = OpSet::fill_path(square_ops());
        assert!(set.to_path_data(3).ends_with(" Z"));
        assert_eq!(OpSet::fill_path(Vec::new()).to_path_data(3), "");
    }

    #[test]
    fn flatten_splits_on_move() {
        let set = OpSet::fill_sketch(vec![
            Op::move_to(0.0, 0.0),
            Op::line_to(5.0, 0.0),
            Op::move_to(0.0, 5.0),
            Op::line_to(5.0, 5.0),
            Op::move_to(9.0, 9.0),
        ]);
        let lines = set.flatten(0.1);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], vec![Point::new(0.0, 5.0), Point::new(5.0, 5.0)]);
    }

    #[test]
    fn flatten_curve_ends_on_endpoint() {
        let set = OpSet::path(vec![
            Op::move_to(0.0, 0.0),
            Op::curve_to(0.0, 10.0, 10.0, 10.0, 10.0, 0.0),
        ]);
        let lines = set.flatten(0.05);
        assert_eq!(lines.len(), 1);
        let last = *lines[0].last().unwrap();
        assert!((last.x - 10.0).abs() < 1e-9 && last.y.abs() < 1e-9);
        assert!(lines[0].len() > 4, "curve should flatten into several segments");
    }

    #[test]
    fn paint_order_puts_fills_first() {
        let drawable = Drawable::new(
            Shape::Rectangle,
            DrawOptions::default(),
            0.5,
            vec![
                OpSet::path(square_ops()),
                OpSet::fill_sketch(square_ops()),
                OpSet::fill_path(square_ops()),
            ],
        );
        let kinds: Vec<OpSetKind> = drawable.paint_order().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![OpSetKind::FillSketch, OpSetKind::FillPath, OpSetKind::Path]);
        assert_eq!(drawable.op_count(), 12);
    }

    #[test]
    fn op_serializes_tagged() {
        let json = serde_json::to_string(&Op::move_to(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"op":"move","x":1.0,"y":2.0}"#);

        let json = serde_json::to_string(&Op::curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)).unwrap();
        assert!(json.starts_with(r#"{"op":"curveTo","c1":{"x":1.0"#));

        let back: Op = serde_json::from_str(r#"{"op":"lineTo","x":3.0,"y":4.0}"#).unwrap();
        assert_eq!(back, Op::line_to(3.0, 4.0));
    }

    #[test]
    fn drawable_json_skips_missing_id() {
        let drawable = Drawable::new(Shape::Line, DrawOptions::default(), 0.5, Vec::new());
        let json = serde_json::to_string(&drawable).unwrap();
        assert!(!json.contains("\"id\""));
        let tagged = serde_json::to_string(&drawable.with_id("edge")).unwrap();
        assert!(tagged.contains(r#""id":"edge""#));
    }
}

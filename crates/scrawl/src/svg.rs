//! SVG path data in, SVG markup out.
//!
//! Input: a `d=""` attribute is parsed with svgtypes, which already resolves
//! relative commands, `H`/`V`, smooth curves and arcs into absolute
//! move / line / cubic / quadratic / close segments.
//!
//! ## Curve Flattening
//!
//! Fill patterns need polygons, not curves. Path curves are "flattened"
//! into line segments with lyon_geom, the same way [`OpSet::flatten`] does
//! it for output.
//!
//! Output: [`drawable_to_svg`] writes one `<g>` per drawable with a `<path>`
//! per operation set, fills first.

use lyon_geom::{CubicBezierSegment, point};
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use crate::config::DrawConfig;
use crate::geometry::Point;
use crate::op::{Drawable, OpSet, OpSetKind};
use crate::sketchy::{bezier_to, double_line};

/// Error type for SVG path input.
///
/// ## Rust Lesson #20: Error Handling
///
/// Rust uses `Result<T, E>` instead of exceptions:
/// - `Ok(value)` = success
/// - `Err(error)` = failure
///
/// A malformed path string is the caller's problem to report, so it comes
/// back as an `Err` instead of an empty drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgError {
    ParseError(String),
}

impl std::fmt::Display for SvgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvgError::ParseError(msg) => write!(f, "SVG path parse error: {}", msg),
        }
    }
}

// Makes our error type work with the standard error trait
impl std::error::Error for SvgError {}

/// Tolerance for curve flattening.
/// Lower = more points, smoother fill boundaries, slower.
pub const CURVE_TOLERANCE: f64 = 0.1;

/// One absolute path segment.
///
/// Quadratics are stored as the equivalent cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Segment {
    Move(Point),
    Line(Point),
    Cubic(Point, Point, Point),
    Close,
}

/// Parsed SVG path data.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData {
    segments: Vec<Segment>,
}

impl PathData {
    /// Parse a path `d` attribute.
    ///
    /// ## Rust Lesson #21: The ? Operator
    ///
    /// `expression?` returns early with the error if there is one. Here each
    /// parser item is a `Result`, and the first bad one ends the parse.
    pub fn parse(d: &str) -> Result<Self, SvgError> {
        let mut segments = Vec::new();
        let mut current = Point::default();
        let mut first = Point::default();

        for item in SimplifyingPathParser::from(d) {
            let segment = item.map_err(|e| SvgError::ParseError(e.to_string()))?;
            match segment {
                SimplePathSegment::MoveTo { x, y } => {
                    current = Point::new(x, y);
                    first = current;
                    segments.push(Segment::Move(current));
                }
                SimplePathSegment::LineTo { x, y } => {
                    current = Point::new(x, y);
                    segments.push(Segment::Line(current));
                }
                SimplePathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                    current = Point::new(x, y);
                    segments.push(Segment::Cubic(Point::new(x1, y1), Point::new(x2, y2), current));
                }
                SimplePathSegment::Quadratic { x1, y1, x, y } => {
                    // Degree elevation: a quadratic is exactly this cubic
                    let ctrl = Point::new(x1, y1);
                    let to = Point::new(x, y);
                    let c1 = current.lerp(ctrl, 2.0 / 3.0);
                    let c2 = to.lerp(ctrl, 2.0 / 3.0);
                    current = to;
                    segments.push(Segment::Cubic(c1, c2, to));
                }
                SimplePathSegment::ClosePath => {
                    current = first;
                    segments.push(Segment::Close);
                }
            }
        }

        Ok(Self { segments })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The rough outline: lines become double lines, curves rough Béziers,
    /// and a close draws back to the subpath start.
    pub fn outline(&self, config: &mut DrawConfig) -> OpSet {
        let mut ops = Vec::new();
        let mut current = Point::default();
        let mut first = Point::default();

        for segment in &self.segments {
            match *segment {
                Segment::Move(p) => {
                    current = p;
                    first = p;
                }
                Segment::Line(p) => {
                    ops.extend(double_line(current.x, current.y, p.x, p.y, config, false));
                    current = p;
                }
                Segment::Cubic(c1, c2, to) => {
                    ops.extend(bezier_to(current, c1, c2, to, config));
                    current = to;
                }
                Segment::Close => {
                    ops.extend(double_line(current.x, current.y, first.x, first.y, config, false));
                    current = first;
                }
            }
        }
        OpSet::path(ops)
    }

    /// Flatten every subpath into a ring for filling.
    ///
    /// Rings with fewer than three distinct points are dropped.
    pub fn rings(&self, tolerance: f64) -> Vec<Vec<Point>> {
        let mut rings = Vec::new();
        let mut ring: Vec<Point> = Vec::new();
        let mut current = Point::default();
        let mut first = Point::default();

        for segment in &self.segments {
            match *segment {
                Segment::Move(p) => {
                    flush_ring(&mut ring, &mut rings);
                    ring.push(p);
                    current = p;
                    first = p;
                }
                Segment::Line(p) => {
                    if ring.is_empty() {
                        ring.push(current);
                    }
                    ring.push(p);
                    current = p;
                }
                Segment::Cubic(c1, c2, to) => {
                    if ring.is_empty() {
                        ring.push(current);
                    }
                    let curve = CubicBezierSegment {
                        from: point(current.x, current.y),
                        ctrl1: point(c1.x, c1.y),
                        ctrl2: point(c2.x, c2.y),
                        to: point(to.x, to.y),
                    };
                    // Callback receives LineSegment, we take the endpoint of each segment
                    curve.for_each_flattened(tolerance, &mut |piece| {
                        ring.push(Point::new(piece.to.x, piece.to.y));
                    });
                    current = to;
                }
                Segment::Close => {
                    flush_ring(&mut ring, &mut rings);
                    current = first;
                }
            }
        }
        flush_ring(&mut ring, &mut rings);
        rings
    }
}

/// Move a finished ring into `rings` if it can enclose anything.
fn flush_ring(ring: &mut Vec<Point>, rings: &mut Vec<Vec<Point>>) {
    // Remove duplicate consecutive points that can occur from curve flattening
    ring.dedup_by(|a, b| (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
    let done = std::mem::take(ring);
    if done.len() >= 3 {
        rings.push(done);
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Colours and precision for [`drawable_to_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Outline colour
    pub stroke: String,
    /// Colour for fill regions and fill strokes
    pub fill: String,
    /// Decimals kept in path data
    pub precision: usize,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke: "#000".to_string(),
            fill: "#888".to_string(),
            precision: 2,
        }
    }
}

/// Escape text for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a drawable as an SVG `<g>` element.
///
/// Sets are written in paint order. `FillPath` sets are filled, `FillSketch`
/// sets stroked at the drawable's fill weight, outlines at its stroke width.
/// Empty sets are skipped.
pub fn drawable_to_svg(drawable: &Drawable, style: &SvgStyle) -> String {
    let mut out = match &drawable.id {
        Some(id) => format!("<g id=\"{}\">\n", escape_attr(id)),
        None => "<g>\n".to_string(),
    };

    for set in drawable.paint_order() {
        if set.is_empty() {
            continue;
        }
        let d = set.to_path_data(style.precision);
        let attrs = match set.kind {
            OpSetKind::FillPath => format!("stroke=\"none\" fill=\"{}\"", escape_attr(&style.fill)),
            OpSetKind::FillSketch => format!(
                "stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"",
                escape_attr(&style.fill),
                drawable.fill_weight
            ),
            OpSetKind::Path => format!(
                "stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"",
                escape_attr(&style.stroke),
                drawable.options.stroke_width
            ),
        };
        out.push_str(&format!("  <path d=\"{}\" {}/>\n", d, attrs));
    }

    out.push_str("</g>\n");
    out
}

/// Wrap rendered groups in a standalone SVG document.
pub fn svg_document(width: f64, height: f64, background: Option<&str>, body: &str) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" stroke-linecap=\"round\">\n",
        w = width,
        h = height
    );
    if let Some(color) = background {
        out.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            escape_attr(color)
        ));
    }
    out.push_str(body);
    out.push_str("</svg>\n");
    out
}

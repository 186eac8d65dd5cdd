//! Shape generator: shape parameters in, [`Drawable`] out.
//!
//! A [`Generator`] owns the outline's [`DrawConfig`] and, optionally, a fill
//! style with its own [`FillConfig`]. Closed shapes get their fill sets
//! first, then the outline, which is also the order a renderer paints them.
//!
//! # Example
//! ```
//! use scrawl::{DrawConfig, DrawOptions, FillConfig, FillOptions, FillStyle, Generator};
//!
//! let draw = DrawConfig::new(DrawOptions::default().with_seed(42)).unwrap();
//! let fill = FillConfig::new(FillOptions::default(), draw.with_altered_seed()).unwrap();
//! let mut generator = Generator::new(draw).with_fill(FillStyle::Hachure, fill);
//!
//! let drawable = generator.rectangle(10.0, 10.0, 80.0, 40.0);
//! assert_eq!(drawable.sets.len(), 2);
//! ```

use crate::config::{DrawConfig, FillConfig};
use crate::geometry::{Point, Polygon};
use crate::op::{Drawable, OpSet, OpSetKind, Shape};
use crate::patterns::FillStyle;
use crate::sketchy;
use crate::svg::{CURVE_TOLERANCE, PathData, SvgError};

/// A fill style together with the configuration it draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct Filler {
    pub style: FillStyle,
    pub config: FillConfig,
}

/// Builds drawables for every supported shape.
///
/// ## Rust Lesson #5: &mut self
///
/// Every shape method takes `&mut self` because drawing advances the
/// random sources. Two calls in a row give two different-looking shapes;
/// call [`Generator::reset`] in between to get the same one twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    config: DrawConfig,
    filler: Option<Filler>,
}

impl Generator {
    /// A generator that only draws outlines.
    pub fn new(config: DrawConfig) -> Self {
        Self { config, filler: None }
    }

    /// Fill closed shapes in `style`.
    pub fn with_fill(mut self, style: FillStyle, config: FillConfig) -> Self {
        self.filler = Some(Filler { style, config });
        self
    }

    #[inline]
    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    #[inline]
    pub fn filler(&self) -> Option<&Filler> {
        self.filler.as_ref()
    }

    /// Rewind the outline and fill random sources to their seeds.
    pub fn reset(&mut self) {
        self.config.reset();
        if let Some(filler) = &mut self.filler {
            filler.config.reset();
        }
    }

    /// Stroke width used for fill strokes in the drawable.
    fn fill_weight(&self) -> f64 {
        match &self.filler {
            Some(filler) => filler.config.fill_weight(),
            None => self.config.options().stroke_width / 2.0,
        }
    }

    /// Assemble the drawable; fills go first and empty fills are dropped.
    fn finish(&self, shape: Shape, fill: Option<OpSet>, outline: OpSet) -> Drawable {
        let mut sets = Vec::with_capacity(2);
        match fill {
            Some(set) if !set.is_empty() => sets.push(set),
            Some(_) => log::debug!("{}: fill skipped, shape encloses nothing", shape),
            None => {}
        }
        sets.push(outline);

        let drawable = Drawable::new(shape, *self.config.options(), self.fill_weight(), sets);
        log::debug!(
            "generated {} with {} op sets ({} ops)",
            shape,
            drawable.sets.len(),
            drawable.op_count()
        );
        drawable
    }

    /// Pattern- or solid-fill a polygon with the configured filler.
    fn fill_polygon(&mut self, polygon: &Polygon) -> Option<OpSet> {
        let filler = self.filler.as_mut()?;
        Some(filler.style.fill(polygon, &mut filler.config))
    }

    /// A rough straight line. Lines are never filled.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Drawable {
        let outline = sketchy::line(x1, y1, x2, y2, &mut self.config);
        self.finish(Shape::Line, None, outline)
    }

    /// A rough rectangle with its top-left corner at `(x, y)`.
    pub fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> Drawable {
        let outline = sketchy::rectangle(x, y, width, height, &mut self.config);
        let corners = sketchy::rectangle_points(x, y, width, height);
        let fill = self.fill_polygon(&Polygon::new(corners));
        self.finish(Shape::Rectangle, fill, outline)
    }

    /// A rough ellipse centred on `(cx, cy)` with the given diameters.
    ///
    /// Pattern fills use the ellipse's core points; a solid fill is a second
    /// rough pass over the same parameters.
    pub fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64) -> Drawable {
        self.ellipse_shape(Shape::Ellipse, cx, cy, width, height)
    }

    /// A rough circle centred on `(cx, cy)`.
    pub fn circle(&mut self, cx: f64, cy: f64, diameter: f64) -> Drawable {
        self.ellipse_shape(Shape::Circle, cx, cy, diameter, diameter)
    }

    fn ellipse_shape(&mut self, shape: Shape, cx: f64, cy: f64, width: f64, height: f64) -> Drawable {
        let params = sketchy::ellipse_params(width, height, &mut self.config);
        let result = sketchy::ellipse_with_params(cx, cy, params, &mut self.config);

        let fill = match &mut self.filler {
            Some(filler) if filler.style == FillStyle::Solid => {
                let mut set = sketchy::ellipse_with_params(cx, cy, params, &mut filler.config.draw).opset;
                set.kind = OpSetKind::FillPath;
                Some(set)
            }
            Some(filler) => {
                let polygon = Polygon::new(result.core_points.clone());
                Some(filler.style.fill(&polygon, &mut filler.config))
            }
            None => None,
        };
        self.finish(shape, fill, result.opset)
    }

    /// Rough lines through the points, left open.
    pub fn linear_path(&mut self, points: &[Point]) -> Drawable {
        let outline = sketchy::linear_path(points, false, &mut self.config);
        self.finish(Shape::LinearPath, None, outline)
    }

    /// A closed rough outline through the points.
    pub fn polygon(&mut self, points: &[Point]) -> Drawable {
        let outline = sketchy::polygon(points, &mut self.config);
        let fill = self.fill_polygon(&Polygon::new(points.to_vec()));
        self.finish(Shape::Polygon, fill, outline)
    }

    /// A rough elliptical arc from `start` to `stop` radians.
    ///
    /// A closed arc is a pie slice and gets filled.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        start: f64,
        stop: f64,
        closed: bool,
    ) -> Drawable {
        let outline = sketchy::arc(cx, cy, width, height, start, stop, closed, true, &mut self.config);

        let fill = match &mut self.filler {
            Some(_) if !closed => None,
            Some(filler) if filler.style == FillStyle::Solid => {
                let mut single = filler.config.draw.single_stroke();
                let mut set = sketchy::arc(cx, cy, width, height, start, stop, true, false, &mut single);
                set.kind = OpSetKind::FillPath;
                Some(set)
            }
            Some(filler) => {
                let points = sketchy::arc_fill_points(cx, cy, width, height, start, stop, &mut filler.config.draw);
                Some(filler.style.fill(&Polygon::new(points), &mut filler.config))
            }
            None => None,
        };
        self.finish(Shape::Arc, fill, outline)
    }

    /// A smooth rough curve through the points. Curves are never filled.
    pub fn curve(&mut self, points: &[Point]) -> Drawable {
        let outline = sketchy::curve(points, &mut self.config);
        self.finish(Shape::Curve, None, outline)
    }

    /// A rough rendition of SVG path data.
    ///
    /// The fill is computed over the path flattened into rings, so holes
    /// and multiple subpaths fill with the even-odd rule.
    pub fn path(&mut self, d: &str) -> Result<Drawable, SvgError> {
        let data = PathData::parse(d)?;
        let outline = data.outline(&mut self.config);

        let fill = match &mut self.filler {
            Some(filler) => {
                let polygon = Polygon::from_rings(data.rings(CURVE_TOLERANCE));
                Some(filler.style.fill(&polygon, &mut filler.config))
            }
            None => None,
        };
        Ok(self.finish(Shape::Path, fill, outline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DrawOptions, FillOptions};
    use crate::op::Op;

    fn generator(style: Option<FillStyle>) -> Generator {
        let draw = DrawConfig::new(DrawOptions::default().with_seed(5)).unwrap();
        let base = Generator::new(draw.clone());
        match style {
            Some(style) => {
                let fill = FillConfig::new(FillOptions::default(), draw.with_altered_seed()).unwrap();
                base.with_fill(style, fill)
            }
            None => base,
        }
    }

    #[test]
    fn outline_only_without_filler() {
        let drawable = generator(None).rectangle(0.0, 0.0, 50.0, 50.0);
        assert_eq!(drawable.sets.len(), 1);
        assert_eq!(drawable.sets[0].kind, OpSetKind::Path);
        assert_eq!(drawable.shape, Shape::Rectangle);
    }

    #[test]
    fn fill_comes_before_outline() {
        let drawable = generator(Some(FillStyle::Hachure)).rectangle(0.0, 0.0, 50.0, 50.0);
        let kinds: Vec<OpSetKind> = drawable.sets.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![OpSetKind::FillSketch, OpSetKind::Path]);
    }

    #[test]
    fn open_shapes_are_not_filled() {
        let mut g = generator(Some(FillStyle::Solid));
        let pts = [Point::new(0.0, 0.0), Point::new(40.0, 0.0), Point::new(40.0, 40.0)];
        assert_eq!(g.line(0.0, 0.0, 10.0, 10.0).sets.len(), 1);
        assert_eq!(g.linear_path(&pts).sets.len(), 1);
        assert_eq!(g.curve(&pts).sets.len(), 1);
        assert_eq!(g.arc(0.0, 0.0, 40.0, 40.0, 0.0, 1.0, false).sets.len(), 1);
        assert_eq!(g.polygon(&pts).sets.len(), 2);
    }

    #[test]
    fn solid_ellipse_is_fill_path() {
        let drawable = generator(Some(FillStyle::Solid)).ellipse(50.0, 50.0, 80.0, 40.0);
        assert_eq!(drawable.sets[0].kind, OpSetKind::FillPath);
        assert_eq!(drawable.sets[1].kind, OpSetKind::Path);
    }

    #[test]
    fn closed_arc_is_filled() {
        for style in [FillStyle::Solid, FillStyle::Hachure] {
            let drawable = generator(Some(style)).arc(50.0, 50.0, 80.0, 80.0, 0.0, 2.0, true);
            assert_eq!(drawable.sets.len(), 2, "{} arc", style);
            assert!(drawable.sets[0].kind.is_fill());
        }
    }

    #[test]
    fn fill_does_not_disturb_outline() {
        let plain = generator(None).polygon(&[
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(15.0, 25.0),
        ]);
        let filled = generator(Some(FillStyle::CrossHatch)).polygon(&[
            Point::new(0.0, 0.0),
            Point::new(30.0, 0.0),
            Point::new(15.0, 25.0),
        ]);
        assert_eq!(plain.sets[0], filled.sets[1]);
    }

    #[test]
    fn reset_reproduces_drawable() {
        let mut g = generator(Some(FillStyle::Dots));
        let first = g.circle(20.0, 20.0, 30.0);
        let second = g.circle(20.0, 20.0, 30.0);
        assert_ne!(first, second);
        g.reset();
        assert_eq!(g.circle(20.0, 20.0, 30.0), first);
    }

    #[test]
    fn degenerate_shapes_do_not_fail() {
        let mut g = generator(Some(FillStyle::Hachure));
        let flat = g.rectangle(0.0, 0.0, 0.0, 20.0);
        assert_eq!(flat.sets.len(), 1, "zero-width rectangle has nothing to fill");
        let dot = g.ellipse(5.0, 5.0, 0.0, 0.0);
        assert_eq!(dot.sets.len(), 1);
        assert!(g.polygon(&[]).sets[0].is_empty());
        assert!(g.linear_path(&[Point::new(1.0, 1.0)]).sets[0].is_empty());
        assert!(g.curve(&[]).sets[0].is_empty());
    }

    #[test]
    fn path_shape() {
        let mut g = generator(Some(FillStyle::Hachure));
        let drawable = g.path("M10 10 L90 10 L90 90 L10 90 Z").unwrap();
        assert_eq!(drawable.shape, Shape::Path);
        assert_eq!(drawable.sets.len(), 2);
        assert!(matches!(drawable.sets[1].ops[0], Op::Move(_)));
        assert!(g.path("M10 10 L oops").is_err());
    }

    #[test]
    fn drawable_records_options_and_weight() {
        let draw = DrawConfig::new(DrawOptions::default().with_stroke_width(3.0)).unwrap();
        let fill = FillConfig::new(FillOptions::default(), draw.clone()).unwrap();
        let drawable = Generator::new(draw)
            .with_fill(FillStyle::Hachure, fill)
            .rectangle(0.0, 0.0, 40.0, 40.0);
        assert_eq!(drawable.options.stroke_width, 3.0);
        assert_eq!(drawable.fill_weight, 1.5);
    }
}

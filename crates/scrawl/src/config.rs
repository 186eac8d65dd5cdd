//! Roughness and fill configuration.
//!
//! Options are plain `Copy` structs with builder methods. They become a
//! usable configuration only through [`DrawConfig::new`] / [`FillConfig::new`],
//! which reject bad values up front so the generators never have to.
//!
//! # Example
//! ```
//! use scrawl::{DrawConfig, DrawOptions};
//!
//! let mut config = DrawConfig::new(DrawOptions::default().with_roughness(0.0)).unwrap();
//! assert_eq!(config.offset(-5.0, 5.0, 1.0), 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::rng::Rng;

/// Error type for rejected configuration values.
///
/// ## Rust Lesson #20: Error Handling
///
/// Rust uses `Result<T, E>` instead of exceptions. A bad option is a
/// programming error on the caller's side, so we report it once at
/// construction instead of producing garbage geometry later.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The value must be a finite number.
    NotFinite { field: &'static str, value: f64 },
    /// The value must be zero or greater.
    Negative { field: &'static str, value: f64 },
    /// The value must be strictly greater than zero.
    NotPositive { field: &'static str, value: f64 },
    /// The value must lie within an inclusive range.
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
    /// Curves need at least one sampling step.
    ZeroStepCount,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFinite { field, value } => {
                write!(f, "{} must be a finite number, got {}", field, value)
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be greater than zero, got {}", field, value)
            }
            ConfigError::OutOfRange { field, value, min, max } => {
                write!(f, "{} must be within [{}, {}], got {}", field, min, max, value)
            }
            ConfigError::ZeroStepCount => write!(f, "curve_step_count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(value)
}

fn positive(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if finite(field, value)? <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(value)
}

// ============================================================================
// DRAW OPTIONS
// ============================================================================

/// Parameters controlling how far generated paths stray from the exact shape.
///
/// Based on RoughJS: randomized endpoints, bowing, curve fitting and
/// double strokes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    /// Multiplier for every random offset (0.0 = exact shape)
    pub roughness: f64,
    /// How much straight lines bend away from the chord
    pub bowing: f64,
    /// How closely ellipse radii follow the requested size (1.0 = exactly)
    pub curve_fitting: f64,
    /// 0.0 = smooth Catmull-Rom curve, 1.0 = straight segments between points
    pub curve_tightness: f64,
    /// Base number of samples around an ellipse
    pub curve_step_count: u32,
    /// Upper bound for endpoint displacement (in user units)
    pub max_randomness_offset: f64,
    /// Outline stroke width; also the base for derived fill spacing
    pub stroke_width: f64,
    /// Draw outlines once instead of twice
    pub disable_multi_stroke: bool,
    /// Draw fill strokes once instead of twice
    pub disable_multi_stroke_fill: bool,
    /// Keep segment endpoints exactly on the input vertices
    pub preserve_vertices: bool,
    /// Seed for reproducible randomness
    pub seed: u64,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            curve_fitting: 0.95,
            curve_tightness: 0.0,
            curve_step_count: 9,
            max_randomness_offset: 2.0,
            stroke_width: 1.0,
            disable_multi_stroke: false,
            disable_multi_stroke_fill: false,
            preserve_vertices: false,
            seed: 0,
        }
    }
}

impl DrawOptions {
    /// Set the roughness.
    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    /// Set how far straight lines bow.
    pub fn with_bowing(mut self, bowing: f64) -> Self {
        self.bowing = bowing;
        self
    }

    /// Set how closely ellipse radii follow the requested size.
    pub fn with_curve_fitting(mut self, curve_fitting: f64) -> Self {
        self.curve_fitting = curve_fitting;
        self
    }

    /// Set how tightly fitted curves hug their points.
    pub fn with_curve_tightness(mut self, curve_tightness: f64) -> Self {
        self.curve_tightness = curve_tightness;
        self
    }

    /// Set the base number of samples around an ellipse.
    pub fn with_curve_step_count(mut self, curve_step_count: u32) -> Self {
        self.curve_step_count = curve_step_count;
        self
    }

    /// Set the upper bound for endpoint displacement.
    pub fn with_max_randomness_offset(mut self, max_randomness_offset: f64) -> Self {
        self.max_randomness_offset = max_randomness_offset;
        self
    }

    /// Set the outline stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Enable/disable the double stroke for outlines.
    pub fn with_multi_stroke(mut self, enabled: bool) -> Self {
        self.disable_multi_stroke = !enabled;
        self
    }

    /// Enable/disable the double stroke for fill lines.
    pub fn with_multi_stroke_fill(mut self, enabled: bool) -> Self {
        self.disable_multi_stroke_fill = !enabled;
        self
    }

    /// Keep line endpoints exactly where they were given.
    pub fn with_preserve_vertices(mut self, preserve: bool) -> Self {
        self.preserve_vertices = preserve;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("roughness", self.roughness)?;
        finite("bowing", self.bowing)?;
        finite("curve_fitting", self.curve_fitting)?;
        if !(0.0..=1.0).contains(&self.curve_fitting) {
            return Err(ConfigError::OutOfRange {
                field: "curve_fitting",
                value: self.curve_fitting,
                min: 0.0,
                max: 1.0,
            });
        }
        finite("curve_tightness", self.curve_tightness)?;
        if self.curve_step_count == 0 {
            return Err(ConfigError::ZeroStepCount);
        }
        non_negative("max_randomness_offset", self.max_randomness_offset)?;
        positive("stroke_width", self.stroke_width)?;
        Ok(())
    }
}

// ============================================================================
// DRAW CONFIG
// ============================================================================

/// Validated draw options plus the random source they drive.
///
/// The options never change after construction; the owned [`Rng`] advances
/// every time a generator draws from it. Call [`DrawConfig::reset`] before
/// regenerating a shape that must look exactly like last time.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawConfig {
    options: DrawOptions,
    rng: Rng,
}

impl DrawConfig {
    /// Validate `options` and seed a fresh random source from `options.seed`.
    pub fn new(options: DrawOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            rng: Rng::new(options.seed),
        })
    }

    /// The options this configuration was built from.
    #[inline]
    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    #[inline]
    pub fn roughness(&self) -> f64 {
        self.options.roughness
    }

    /// Rewind the random source to its seed.
    pub fn reset(&mut self) {
        self.rng.reset();
    }

    /// A fresh configuration with the same options and the next seed.
    ///
    /// Used for the second pass of a curve so both strokes differ.
    pub fn with_altered_seed(&self) -> Self {
        let options = DrawOptions {
            seed: self.options.seed.wrapping_add(1),
            ..self.options
        };
        Self {
            options,
            rng: Rng::new(options.seed),
        }
    }

    /// The same configuration, mid-sequence, with the double stroke off.
    pub fn single_stroke(&self) -> Self {
        Self {
            options: self.options.with_multi_stroke(false),
            rng: self.rng.clone(),
        }
    }

    /// Raw random value in [0, 1).
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.rng.next_f64()
    }

    /// Random offset in `[min, max)` scaled by roughness and `roughness_gain`.
    ///
    /// Zero roughness always yields exactly `0.0`. The random source still
    /// advances so a config switched between rough and exact draws the same
    /// sequence.
    #[inline]
    pub fn offset(&mut self, min: f64, max: f64, roughness_gain: f64) -> f64 {
        let r = self.rng.next_range(min, max);
        if self.options.roughness == 0.0 {
            return 0.0;
        }
        self.options.roughness * roughness_gain * r
    }

    /// Random offset in `[-x, x)`.
    #[inline]
    pub fn offset_symmetric(&mut self, x: f64, roughness_gain: f64) -> f64 {
        self.offset(-x, x, roughness_gain)
    }
}

// ============================================================================
// FILL OPTIONS
// ============================================================================

/// Parameters for interior fill patterns.
///
/// `None` means "derive from the stroke width", matching what a caller
/// usually wants when only the outline width is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillOptions {
    /// Stroke width for fill lines and dot diameter (default: stroke_width / 2)
    pub fill_weight: Option<f64>,
    /// Angle of hachure lines in degrees
    pub hachure_angle: f64,
    /// Perpendicular distance between hachure lines (default: stroke_width * 4)
    pub hachure_gap: Option<f64>,
    /// Length of each dash (default: hachure gap)
    pub dash_offset: Option<f64>,
    /// Space between dashes (default: hachure gap)
    pub dash_gap: Option<f64>,
    /// Amplitude of zig-zag lines (default: hachure gap)
    pub zigzag_offset: Option<f64>,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            fill_weight: None,
            hachure_angle: -41.0,
            hachure_gap: None,
            dash_offset: None,
            dash_gap: None,
            zigzag_offset: None,
        }
    }
}

impl FillOptions {
    /// Set the fill stroke width and dot diameter.
    pub fn with_fill_weight(mut self, fill_weight: f64) -> Self {
        self.fill_weight = Some(fill_weight);
        self
    }

    /// Set the hatch angle in degrees.
    pub fn with_hachure_angle(mut self, degrees: f64) -> Self {
        self.hachure_angle = degrees;
        self
    }

    /// Set the distance between hatch lines.
    pub fn with_hachure_gap(mut self, gap: f64) -> Self {
        self.hachure_gap = Some(gap);
        self
    }

    /// Set the dash length for the dashed style.
    pub fn with_dash_offset(mut self, dash_offset: f64) -> Self {
        self.dash_offset = Some(dash_offset);
        self
    }

    /// Set the gap between dashes.
    pub fn with_dash_gap(mut self, dash_gap: f64) -> Self {
        self.dash_gap = Some(dash_gap);
        self
    }

    /// Set the amplitude of zig-zag lines.
    pub fn with_zigzag_offset(mut self, zigzag_offset: f64) -> Self {
        self.zigzag_offset = Some(zigzag_offset);
        self
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("hachure_angle", self.hachure_angle)?;
        if let Some(weight) = self.fill_weight {
            non_negative("fill_weight", weight)?;
        }
        if let Some(gap) = self.hachure_gap {
            positive("hachure_gap", gap)?;
        }
        if let Some(offset) = self.dash_offset {
            positive("dash_offset", offset)?;
        }
        if let Some(gap) = self.dash_gap {
            positive("dash_gap", gap)?;
        }
        if let Some(offset) = self.zigzag_offset {
            positive("zigzag_offset", offset)?;
        }
        Ok(())
    }
}

// ============================================================================
// FILL CONFIG
// ============================================================================

/// Validated fill options with their own perturbation source.
///
/// The embedded [`DrawConfig`] is independent from the outline's, so
/// changing the fill never shifts the outline's random sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FillConfig {
    options: FillOptions,
    /// Roughness and randomness for the fill strokes
    pub draw: DrawConfig,
}

impl FillConfig {
    pub fn new(options: FillOptions, draw: DrawConfig) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options, draw })
    }

    #[inline]
    pub fn options(&self) -> &FillOptions {
        &self.options
    }

    #[inline]
    pub fn hachure_angle(&self) -> f64 {
        self.options.hachure_angle
    }

    /// Resolved hachure gap.
    #[inline]
    pub fn hachure_gap(&self) -> f64 {
        self.options
            .hachure_gap
            .unwrap_or(self.draw.options().stroke_width * 4.0)
    }

    /// Resolved fill weight.
    #[inline]
    pub fn fill_weight(&self) -> f64 {
        self.options
            .fill_weight
            .unwrap_or(self.draw.options().stroke_width / 2.0)
    }

    #[inline]
    pub fn dash_offset(&self) -> f64 {
        self.options.dash_offset.unwrap_or_else(|| self.hachure_gap())
    }

    #[inline]
    pub fn dash_gap(&self) -> f64 {
        self.options.dash_gap.unwrap_or_else(|| self.hachure_gap())
    }

    #[inline]
    pub fn zigzag_offset(&self) -> f64 {
        self.options.zigzag_offset.unwrap_or_else(|| self.hachure_gap())
    }

    /// Rewind the fill's random source to its seed.
    pub fn reset(&mut self) {
        self.draw.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_roughness_collapses_offsets() {
        let mut config = DrawConfig::new(DrawOptions::default().with_roughness(0.0)).unwrap();
        for _ in 0..200 {
            assert_eq!(config.offset(-10.0, 25.0, 3.0), 0.0);
            assert_eq!(config.offset_symmetric(100.0, 1.0), 0.0);
        }
    }

    #[test]
    fn offset_stays_in_scaled_range() {
        let mut config = DrawConfig::new(DrawOptions::default().with_roughness(2.0)).unwrap();
        for _ in 0..500 {
            let v = config.offset(1.0, 3.0, 0.5);
            // roughness * gain * [1, 3)
            assert!(v >= 1.0 && v < 3.0, "offset {} out of range", v);
        }
    }

    #[test]
    fn same_seed_same_offsets() {
        let options = DrawOptions::default().with_seed(31);
        let mut a = DrawConfig::new(options).unwrap();
        let mut b = DrawConfig::new(options).unwrap();
        for _ in 0..50 {
            assert_eq!(a.offset_symmetric(4.0, 1.0), b.offset_symmetric(4.0, 1.0));
        }
    }

    #[test]
    fn reset_reproduces_offsets() {
        let mut config = DrawConfig::new(DrawOptions::default().with_seed(5)).unwrap();
        let first: Vec<f64> = (0..20).map(|_| config.offset_symmetric(2.0, 1.0)).collect();
        config.reset();
        let second: Vec<f64> = (0..20).map(|_| config.offset_symmetric(2.0, 1.0)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn altered_seed_differs() {
        let mut base = DrawConfig::new(DrawOptions::default().with_seed(10)).unwrap();
        let mut altered = base.with_altered_seed();
        assert_eq!(altered.options().seed, 11);
        assert_ne!(base.random(), altered.random());
    }

    #[test]
    fn rejects_bad_draw_options() {
        assert_eq!(
            DrawConfig::new(DrawOptions::default().with_curve_step_count(0)).unwrap_err(),
            ConfigError::ZeroStepCount
        );
        assert!(matches!(
            DrawConfig::new(DrawOptions::default().with_roughness(-1.0)),
            Err(ConfigError::Negative { field: "roughness", .. })
        ));
        assert!(matches!(
            DrawConfig::new(DrawOptions::default().with_curve_fitting(1.5)),
            Err(ConfigError::OutOfRange { field: "curve_fitting", .. })
        ));
        assert!(matches!(
            DrawConfig::new(DrawOptions::default().with_bowing(f64::NAN)),
            Err(ConfigError::NotFinite { field: "bowing", .. })
        ));
        assert!(matches!(
            DrawConfig::new(DrawOptions::default().with_stroke_width(0.0)),
            Err(ConfigError::NotPositive { field: "stroke_width", .. })
        ));
    }

    #[test]
    fn rejects_bad_fill_options() {
        let draw = DrawConfig::new(DrawOptions::default()).unwrap();
        assert!(matches!(
            FillConfig::new(FillOptions::default().with_hachure_gap(-2.0), draw.clone()),
            Err(ConfigError::NotPositive { field: "hachure_gap", .. })
        ));
        assert!(matches!(
            FillConfig::new(FillOptions::default().with_dash_gap(0.0), draw.clone()),
            Err(ConfigError::NotPositive { field: "dash_gap", .. })
        ));
        assert!(matches!(
            FillConfig::new(FillOptions::default().with_hachure_angle(f64::INFINITY), draw),
            Err(ConfigError::NotFinite { field: "hachure_angle", .. })
        ));
    }

    #[test]
    fn fill_values_derive_from_stroke_width() {
        let draw = DrawConfig::new(DrawOptions::default().with_stroke_width(2.0)).unwrap();
        let fill = FillConfig::new(FillOptions::default(), draw).unwrap();
        assert_eq!(fill.hachure_gap(), 8.0);
        assert_eq!(fill.fill_weight(), 1.0);
        assert_eq!(fill.dash_offset(), 8.0);
        assert_eq!(fill.dash_gap(), 8.0);
        assert_eq!(fill.zigzag_offset(), 8.0);
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = DrawConfig::new(DrawOptions::default().with_roughness(-0.5)).unwrap_err();
        assert_eq!(err.to_string(), "roughness must not be negative, got -0.5");
    }
}

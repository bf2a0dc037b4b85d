//! Pattern kinds and geometry parameters

use crate::io::configuration::{
    DEFAULT_ROTATION, DEFAULT_SCALE, DEFAULT_STROKE, ROTATION_RANGE, SCALE_RANGE, STROKE_RANGE,
};
use clap::ValueEnum;
use std::fmt;

/// Repeating motif drawn into the pattern side of the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum PatternType {
    /// Square lattice of filled circles
    #[default]
    Dots,
    /// Parallel stripes at a chosen angle
    Diagonal,
    /// Horizontal and vertical rules
    Grid,
    /// Alternating filled cells
    Checker,
    /// Diagonal and anti-diagonal stripes woven together
    Crosshatch,
}

impl PatternType {
    /// Every pattern kind in display order
    pub const ALL: [Self; 5] = [
        Self::Dots,
        Self::Diagonal,
        Self::Grid,
        Self::Checker,
        Self::Crosshatch,
    ];

    /// Lowercase name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dots => "dots",
            Self::Diagonal => "diagonal",
            Self::Grid => "grid",
            Self::Checker => "checker",
            Self::Crosshatch => "crosshatch",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry parameters shared by all pattern kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternOptions {
    /// Tile size multiplier
    pub scale: f32,
    /// Stroke width in pixels
    pub stroke: f32,
    /// Stripe rotation in degrees (diagonal tiles only)
    pub rotation: f32,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            stroke: DEFAULT_STROKE,
            rotation: DEFAULT_ROTATION,
        }
    }
}

impl PatternOptions {
    /// Create options from their three parameters
    pub const fn new(scale: f32, stroke: f32, rotation: f32) -> Self {
        Self {
            scale,
            stroke,
            rotation,
        }
    }

    /// Copy with every field clamped to its documented range
    ///
    /// Non-finite values fall back to the defaults.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            scale: clamp_finite(self.scale, SCALE_RANGE, defaults.scale),
            stroke: clamp_finite(self.stroke, STROKE_RANGE, defaults.stroke),
            rotation: clamp_finite(self.rotation, ROTATION_RANGE, defaults.rotation),
        }
    }
}

fn clamp_finite(value: f32, range: (f32, f32), fallback: f32) -> f32 {
    if value.is_finite() {
        num_traits::clamp(value, range.0, range.1)
    } else {
        fallback
    }
}

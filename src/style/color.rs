//! Opaque RGB colors and pattern/background role resolution

use crate::io::configuration::{DEFAULT_BACKGROUND_COLOR, DEFAULT_PATTERN_COLOR};
use crate::io::error::{RenderError, invalid_parameter};
use image::Rgba;
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from an `[r, g, b]` triple
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Parse `#RRGGBB` or `RRGGBB`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the string is not six hex digits
    pub fn from_hex(hex: &str) -> Result<Self, RenderError> {
        let digits = hex.trim().trim_start_matches('#');
        let malformed = || invalid_parameter("color", &hex, &"expected #RRGGBB");

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(malformed());
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(malformed)
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Fully opaque RGBA pixel of this color
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }

    /// Same color with the given alpha
    pub const fn with_alpha(self, alpha: u8) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, alpha])
    }
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Stored pattern and background colors
///
/// The stored values never change; inversion only swaps which one plays
/// which role when a render resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Color of the motif
    pub pattern: Color,
    /// Flat fill behind and around the motif
    pub background: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            pattern: Color::from_array(DEFAULT_PATTERN_COLOR),
            background: Color::from_array(DEFAULT_BACKGROUND_COLOR),
        }
    }
}

impl ColorPair {
    /// Create a pair from its two colors
    pub const fn new(pattern: Color, background: Color) -> Self {
        Self {
            pattern,
            background,
        }
    }

    /// Effective `(pattern, background)` colors for a render
    pub const fn resolve(self, invert: bool) -> (Color, Color) {
        if invert {
            (self.background, self.pattern)
        } else {
            (self.pattern, self.background)
        }
    }
}

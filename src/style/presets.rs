//! Named looks bundling pattern, colors and tone settings

use crate::io::error::{RenderError, invalid_parameter};
use crate::pattern::{PatternOptions, PatternType};
use crate::pipeline::{Adjustments, RenderRequest, Side};
use crate::style::color::{Color, ColorPair};

/// A complete set of render parameters under a name
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Name used on the command line
    pub name: &'static str,
    /// One-line summary of the look
    pub description: &'static str,
    /// Motif
    pub pattern: PatternType,
    /// Luminance class that receives the motif
    pub side: Side,
    /// Motif geometry
    pub options: PatternOptions,
    /// Pattern and background colors
    pub colors: ColorPair,
    /// Tone settings
    pub adjustments: Adjustments,
}

impl Preset {
    /// Render request carrying this preset's parameters, not inverted
    pub const fn request(&self) -> RenderRequest {
        RenderRequest {
            adjustments: self.adjustments,
            pattern: self.pattern,
            options: self.options,
            side: self.side,
            colors: self.colors,
            invert: false,
        }
    }
}

/// Built-in presets
pub const PRESETS: [Preset; 5] = [
    Preset {
        name: "newsprint",
        description: "Black halftone dots on warm paper",
        pattern: PatternType::Dots,
        side: Side::Dark,
        options: PatternOptions::new(1.0, 2.0, 45.0),
        colors: ColorPair::new(Color::new(0x11, 0x11, 0x11), Color::new(0xF4, 0xEF, 0xE6)),
        adjustments: Adjustments::new(0, 10, 50),
    },
    Preset {
        name: "blueprint",
        description: "White rules over cyanotype blue",
        pattern: PatternType::Grid,
        side: Side::Light,
        options: PatternOptions::new(1.0, 1.5, 0.0),
        colors: ColorPair::new(Color::new(0xFF, 0xFF, 0xFF), Color::new(0x1F, 0x4E, 0x8C)),
        adjustments: Adjustments::new(0, 0, 50),
    },
    Preset {
        name: "riso",
        description: "Fluorescent pink stripes, riso print style",
        pattern: PatternType::Diagonal,
        side: Side::Dark,
        options: PatternOptions::new(1.2, 3.0, 30.0),
        colors: ColorPair::new(Color::new(0xFF, 0x48, 0xB0), Color::new(0xFF, 0xF8, 0xE7)),
        adjustments: Adjustments::new(5, 20, 50),
    },
    Preset {
        name: "gingham",
        description: "Red checks on white cloth",
        pattern: PatternType::Checker,
        side: Side::Dark,
        options: PatternOptions::new(0.75, 2.0, 0.0),
        colors: ColorPair::new(Color::new(0xC8, 0x10, 0x2E), Color::new(0xFF, 0xFF, 0xFF)),
        adjustments: Adjustments::new(0, 0, 50),
    },
    Preset {
        name: "etching",
        description: "Fine sepia crosshatching",
        pattern: PatternType::Crosshatch,
        side: Side::Dark,
        options: PatternOptions::new(0.6, 1.0, 45.0),
        colors: ColorPair::new(Color::new(0x2B, 0x21, 0x18), Color::new(0xF2, 0xE8, 0xD5)),
        adjustments: Adjustments::new(0, 30, 45),
    },
];

/// Look up a preset by name, ignoring case
///
/// # Errors
///
/// Returns `InvalidParameter` listing the known names if none matches
pub fn find_preset(name: &str) -> Result<&'static Preset, RenderError> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| {
            let known: Vec<&str> = PRESETS.iter().map(|preset| preset.name).collect();
            invalid_parameter(
                "preset",
                &name,
                &format!("expected one of {}", known.join(", ")),
            )
        })
}

//! Pattern-region mask derived from the binary luminance buffer

use crate::io::error::Result;
use crate::pipeline::tone::LIGHT;
use crate::raster::surface::{RasterBuffer, Size, acquire_transparent};
use clap::ValueEnum;
use image::Rgba;

/// Luminance class that receives the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Side {
    /// Pattern fills the dark pixels
    #[default]
    Dark,
    /// Pattern fills the light pixels
    Light,
}

impl Side {
    /// The other class
    pub const fn opposite(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Whether a pixel of the given class belongs to the pattern region
    pub const fn selects(self, is_light: bool) -> bool {
        match self {
            Self::Dark => !is_light,
            Self::Light => is_light,
        }
    }
}

/// Alpha mask that is opaque exactly where `side` selects
///
/// Only alpha carries information; color channels are zero.
///
/// # Errors
///
/// Returns `RenderSurfaceUnavailable` if the mask surface cannot be obtained
pub fn build_mask(binary: &RasterBuffer, side: Side) -> Result<RasterBuffer> {
    let mut mask = acquire_transparent(Size::of(binary))?;

    for (source, target) in binary.pixels().zip(mask.pixels_mut()) {
        if side.selects(source.0[0] == LIGHT) {
            *target = Rgba([0, 0, 0, 255]);
        }
    }

    Ok(mask)
}

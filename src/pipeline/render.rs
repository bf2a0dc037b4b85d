//! End-to-end render of one request

use crate::io::configuration::MAX_OUTPUT_DIMENSION;
use crate::io::error::Result;
use crate::pattern::{PatternOptions, PatternType, generate_tile};
use crate::pipeline::composite::composite;
use crate::pipeline::mask::{Side, build_mask};
use crate::pipeline::tone::{Adjustments, adjust};
use crate::raster::resample::fit_within;
use crate::raster::surface::{RasterBuffer, Size, acquire_surface};
use crate::style::ColorPair;
use std::time::Instant;

/// Snapshot of every parameter a render depends on
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderRequest {
    /// Tone parameters
    pub adjustments: Adjustments,
    /// Motif drawn into the pattern region
    pub pattern: PatternType,
    /// Motif geometry
    pub options: PatternOptions,
    /// Luminance class that receives the motif
    pub side: Side,
    /// Stored pattern and background colors
    pub colors: ColorPair,
    /// Swap the color roles for this render
    pub invert: bool,
}

/// Buffers produced by one render, all of the same size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Binary luminance buffer, displayable as the processed preview
    pub preview: RasterBuffer,
    /// Final two-tone pattern image
    pub output: RasterBuffer,
}

impl Rendered {
    /// Dimensions shared by both buffers
    pub fn size(&self) -> Size {
        Size::of(&self.output)
    }
}

/// Output dimensions for a source: scaled down to fit the output cap
pub fn output_size(source: Size) -> Size {
    fit_within(source, MAX_OUTPUT_DIMENSION)
}

/// Run the full pipeline on a decoded source image
///
/// # Errors
///
/// Returns `RenderSurfaceUnavailable` if any working surface cannot be
/// obtained; nothing is partially applied in that case
pub fn render(source: &RasterBuffer, request: &RenderRequest) -> Result<Rendered> {
    let started = Instant::now();
    let size = output_size(Size::of(source));

    let preview = adjust(source, request.adjustments, size)?;
    let mask = build_mask(&preview, request.side)?;

    let (pattern_color, background_color) = request.colors.resolve(request.invert);
    let tile = generate_tile(request.pattern, request.options, pattern_color);
    if tile.is_none() {
        log::warn!("Falling back to flat fill for {} pattern", request.pattern);
    }

    let mut output = acquire_surface(size, background_color.to_rgba())?;
    composite(
        &mut output,
        tile.as_ref(),
        &mask,
        background_color,
        pattern_color,
    )?;

    log::debug!(
        "Rendered {}x{} {} in {:?}",
        size.width,
        size.height,
        request.pattern,
        started.elapsed()
    );

    Ok(Rendered { preview, output })
}

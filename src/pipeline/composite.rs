//! Tile-through-mask compositing onto a flat background
//!
//! The compositor knows nothing about thresholds, geometry or inversion. It
//! reads only the mask's alpha channel and the final role-resolved colors.

use crate::io::error::{RenderError, Result};
use crate::pattern::Tile;
use crate::raster::surface::{RasterBuffer, Size};
use crate::style::Color;
use image::Rgba;

/// Fill `target` with `background`, then paint the masked region
///
/// With a tile, the tile is repeated over the whole target and drawn
/// source-over wherever the mask selects; its coverage is the product of the
/// tile and mask alphas. Without a tile the masked region is painted with the
/// flat `pattern` color. Pixels whose mask alpha is zero end up exactly
/// `background` on both paths.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `target` and `mask` differ in size
pub fn composite(
    target: &mut RasterBuffer,
    tile: Option<&Tile>,
    mask: &RasterBuffer,
    background: Color,
    pattern: Color,
) -> Result<()> {
    if Size::of(target) != Size::of(mask) {
        return Err(RenderError::DimensionMismatch {
            operation: "composite",
            expected: target.dimensions(),
            actual: mask.dimensions(),
        });
    }

    let base = background.to_rgba();
    let flat = pattern.to_rgba();

    for ((x, y, pixel), selector) in target.enumerate_pixels_mut().zip(mask.pixels()) {
        let mask_alpha = selector.0[3];
        if mask_alpha == 0 {
            *pixel = base;
            continue;
        }

        let source = tile.map_or(flat, |tile| tile.sample(x, y));
        *pixel = source_over(source, base, mask_alpha);
    }

    log::debug!(
        "Composited {}x{} ({})",
        target.width(),
        target.height(),
        if tile.is_some() { "tiled" } else { "flat" }
    );

    Ok(())
}

// `source` scaled by `mask_alpha`, over an opaque `base`
fn source_over(source: Rgba<u8>, base: Rgba<u8>, mask_alpha: u8) -> Rgba<u8> {
    let alpha = u32::from(source.0[3]) * u32::from(mask_alpha);
    let inverse = 255 * 255 - alpha;
    let blend = |s: u8, b: u8| {
        let value = u32::from(s) * alpha + u32::from(b) * inverse;
        ((value + 255 * 255 / 2) / (255 * 255)) as u8
    };

    Rgba([
        blend(source.0[0], base.0[0]),
        blend(source.0[1], base.0[1]),
        blend(source.0[2], base.0[2]),
        255,
    ])
}

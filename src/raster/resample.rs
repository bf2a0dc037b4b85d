//! Output sizing and bilinear resampling

use crate::io::error::{Result, surface_unavailable};
use crate::raster::surface::{RasterBuffer, Size};
use image::imageops::{self, FilterType};

/// Scale `source` down (never up) so its larger edge is at most `max_edge`
///
/// Aspect ratio is preserved and each edge is rounded to the nearest pixel,
/// with a floor of one pixel so thin sources never collapse.
pub fn fit_within(source: Size, max_edge: u32) -> Size {
    let longest = source.width.max(source.height);
    if longest <= max_edge || longest == 0 {
        return source;
    }

    let ratio = f64::from(max_edge) / f64::from(longest);
    let scale_edge = |edge: u32| ((f64::from(edge) * ratio).round() as u32).max(1);

    Size::new(scale_edge(source.width), scale_edge(source.height))
}

/// Resample `source` to exactly `target`
///
/// Uses a triangle (bilinear) filter; a source already at the target size is
/// copied unchanged.
///
/// # Errors
///
/// Returns `RenderSurfaceUnavailable` if either the source or the target has
/// no area
pub fn resample(source: &RasterBuffer, target: Size) -> Result<RasterBuffer> {
    if source.width() == 0 || source.height() == 0 {
        return Err(surface_unavailable(
            source.width(),
            source.height(),
            "source has no area",
        ));
    }
    if target.width == 0 || target.height == 0 {
        return Err(surface_unavailable(
            target.width,
            target.height,
            "target has no area",
        ));
    }

    if Size::of(source) == target {
        return Ok(source.clone());
    }

    Ok(imageops::resize(
        source,
        target.width,
        target.height,
        FilterType::Triangle,
    ))
}

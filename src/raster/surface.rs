//! Fallible allocation of RGBA drawing surfaces

use crate::io::error::{Result, surface_unavailable};
use image::{ImageBuffer, Rgba};

/// Four-channel 8-bit pixel buffer shared by every pipeline stage
pub type RasterBuffer = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// Width and height of a buffer in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl Size {
    /// Create a size from its two extents
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of an existing buffer
    pub fn of(buffer: &RasterBuffer) -> Self {
        Self::new(buffer.width(), buffer.height())
    }

    /// Extents as a `(width, height)` pair
    pub const fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Allocate a surface filled with `fill`
///
/// Acquisition fails instead of panicking when the surface is empty, when its
/// byte length overflows, or when the allocator refuses the request.
///
/// # Errors
///
/// Returns `RenderSurfaceUnavailable` if no backing buffer can be obtained
pub fn acquire_surface(size: Size, fill: Rgba<u8>) -> Result<RasterBuffer> {
    let Size { width, height } = size;
    if width == 0 || height == 0 {
        return Err(surface_unavailable(width, height, "surface has no area"));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| surface_unavailable(width, height, "byte length overflows"))?;

    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_refused| surface_unavailable(width, height, "allocation refused"))?;
    for _ in 0..(len / 4) {
        data.extend_from_slice(&fill.0);
    }

    ImageBuffer::from_raw(width, height, data)
        .ok_or_else(|| surface_unavailable(width, height, "buffer length mismatch"))
}

/// Allocate a fully transparent surface
///
/// # Errors
///
/// Returns `RenderSurfaceUnavailable` if no backing buffer can be obtained
pub fn acquire_transparent(size: Size) -> Result<RasterBuffer> {
    acquire_surface(size, Rgba([0, 0, 0, 0]))
}

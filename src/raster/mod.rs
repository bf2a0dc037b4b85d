//! Pixel buffers, surface allocation and coverage rasterization
//!
//! Every pipeline stage works on explicit RGBA buffers. This module owns
//! their allocation, the resampling used to fit sources to the output size,
//! and a small immediate-free rasterizer for tile geometry.

/// Anti-aliased coverage rasterization of circles, round-capped strokes and rectangles
pub mod draw;
/// Output sizing and bilinear resampling of source images
pub mod resample;
/// Fallible surface allocation
pub mod surface;

pub use surface::{RasterBuffer, Size};

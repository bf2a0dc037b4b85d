//! Two-tone pattern art from photographs
//!
//! A photograph is binarized into dark and light pixels, one side becomes a
//! mask, and a procedurally generated tile (dots, stripes, grid, checker or
//! crosshatch) is repeated through that mask over a flat background.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Tileable pattern kinds and tile generation
pub mod pattern;
/// Tone adjustment, masking, compositing and render sequencing
pub mod pipeline;
/// Pixel buffers, resampling and coverage rasterization
pub mod raster;
/// Colors and presets
pub mod style;

pub use io::error::{RenderError, Result};

//! The four-stage rendering pipeline and its sequencing
//!
//! Tone adjustment feeds the mask builder; tile generation runs on its own;
//! the compositor joins both. [`render::render`] runs one pass end to end and
//! [`sequencer::RenderSequencer`] keeps overlapping renders in request order.

/// Tile-through-mask compositing onto a flat background
pub mod composite;
/// Pattern-region mask from the binary luminance buffer
pub mod mask;
/// End-to-end render of one request
pub mod render;
/// Request ordering and last-writer-wins display slot
pub mod sequencer;
/// Grayscale, brightness/contrast and thresholding
pub mod tone;

pub use mask::Side;
pub use render::{RenderRequest, Rendered, render};
pub use tone::Adjustments;

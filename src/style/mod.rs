//! Colors and named looks

/// Opaque RGB colors and the pattern/background pair
pub mod color;
/// Named combinations of pattern, colors and adjustments
pub mod presets;

pub use color::{Color, ColorPair};

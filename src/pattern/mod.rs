//! Tileable pattern motifs

/// Pattern kinds and their geometry parameters
pub mod kind;
/// Tile generation for each pattern kind
pub mod tile;

pub use kind::{PatternOptions, PatternType};
pub use tile::{Tile, generate_tile, tile_edge};

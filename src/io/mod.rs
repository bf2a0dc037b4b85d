//! Command-line glue, configuration, errors and file input/output

/// Command-line interface and batch processing
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error type and helpers
pub mod error;
/// Source decoding and PNG export
pub mod image;
/// Batch progress display
pub mod progress;

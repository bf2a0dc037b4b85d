//! Error types and path context for rendering operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all rendering operations
#[derive(Debug)]
pub enum RenderError {
    /// A pixel buffer for a drawing surface could not be allocated
    ///
    /// Fatal to the current render attempt only; the previously displayed
    /// output stays in place.
    RenderSurfaceUnavailable {
        /// Requested surface width
        width: u32,
        /// Requested surface height
        height: u32,
        /// Why the allocation was refused
        reason: &'static str,
    },

    /// Source image could not be decoded
    UnsupportedSourceFormat {
        /// Path to the source file
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter could not be interpreted (e.g. malformed color or preset name)
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Two buffers of one render disagree on their dimensions
    DimensionMismatch {
        /// Stage that detected the mismatch
        operation: &'static str,
        /// Dimensions the stage required (width, height)
        expected: (u32, u32),
        /// Dimensions it received (width, height)
        actual: (u32, u32),
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenderSurfaceUnavailable {
                width,
                height,
                reason,
            } => {
                write!(
                    f,
                    "Render surface {width}x{height} is unavailable: {reason}"
                )
            }
            Self::UnsupportedSourceFormat { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DimensionMismatch {
                operation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {operation}: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedSourceFormat { source, .. } | Self::ImageExport { source, .. } => {
                Some(source)
            }
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rendering results
pub type Result<T> = std::result::Result<T, RenderError>;

/// Attaches the file a failure relates to
pub trait WithPath<T> {
    /// Replace the placeholder path of file-related errors with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<RenderError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file-related errors carry a path
            match &mut error {
                RenderError::UnsupportedSourceFormat { path: p, .. }
                | RenderError::ImageExport { path: p, .. }
                | RenderError::FileSystem { path: p, .. } => *p = path.to_path_buf(),
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        Self::UnsupportedSourceFormat {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RenderError {
    RenderError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a surface allocation error
pub const fn surface_unavailable(width: u32, height: u32, reason: &'static str) -> RenderError {
    RenderError::RenderSurfaceUnavailable {
        width,
        height,
        reason,
    }
}

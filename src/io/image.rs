//! Source decoding and PNG export

use crate::io::error::{RenderError, Result, WithPath};
use crate::raster::surface::RasterBuffer;
use image::ImageFormat;
use std::path::Path;

/// Decode an image file into an RGBA buffer
///
/// # Errors
///
/// Returns `UnsupportedSourceFormat` if the file cannot be read or decoded
pub fn load_source(path: &Path) -> Result<RasterBuffer> {
    let decoded = image::open(path).with_path(path)?;
    log::debug!(
        "Decoded '{}' ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );
    Ok(decoded.to_rgba8())
}

/// Save a buffer as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(buffer: &RasterBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| RenderError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

//! PNG export of rendered patterns

use std::path::Path;

use crate::io::error::{Result, SkyError};
use crate::render::renderer::PixelBuffer;

/// Save a rendered pattern as a PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `output_path`
pub fn export_png(buffer: &PixelBuffer, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| SkyError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| SkyError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

//! Atlas page conversion to RGBA8888 PNG.
//!
//! The sheet metadata declares `RGBA8888`, so whatever format the source
//! page arrives in is decoded and re-encoded as 8-bit RGBA PNG.

use std::path::Path;

use image::RgbaImage;

use crate::error::{P2dError, Result};

/// Convert a source page image to an RGBA8 PNG at `dest`.
///
/// Returns the page's actual pixel dimensions so the caller can check them
/// against the manifest.
pub fn convert_page(source: &Path, dest: &Path) -> Result<(u32, u32)> {
    let decoded = image::open(source).map_err(|e| P2dError::Io {
        path: source.to_path_buf(),
        message: format!("Failed to read page image: {}", e),
    })?;

    let rgba: RgbaImage = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    rgba.save_with_format(dest, image::ImageFormat::Png)
        .map_err(|e| P2dError::Io {
            path: dest.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok((width, height))
}

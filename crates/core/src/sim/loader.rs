//! Program image loading.
//!
//! Images are flat little-endian binaries placed at address zero, which is
//! also the reset vector by default. No ELF parsing: the harness and CLI
//! hand the core raw instruction streams.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::SimError;
use crate::core::Core;

/// Copies a flat binary image into memory at address zero.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the image does not fit.
pub fn load_image_bytes(core: &mut Core, image: &[u8]) -> Result<(), SimError> {
    if image.len() > core.mem.len() {
        return Err(SimError::ImageTooLarge {
            image: image.len(),
            memory: core.mem.len(),
        });
    }
    core.mem.write_bytes(0, image);
    debug!(bytes = image.len(), "image loaded");
    Ok(())
}

/// Reads a flat binary image from disk and loads it at address zero.
///
/// # Errors
///
/// Returns [`SimError::ImageRead`] if the file cannot be read, or
/// [`SimError::ImageTooLarge`] if it does not fit.
pub fn load_image_file(core: &mut Core, path: &Path) -> Result<(), SimError> {
    let image = fs::read(path).map_err(|source| SimError::ImageRead {
        path: path.display().to_string(),
        source,
    })?;
    load_image_bytes(core, &image)
}

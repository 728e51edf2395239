//! Writing frame buffers out as image files.

use std::io::Cursor;
use std::path::Path;

use image::{ExtendedColorType, ImageFormat};
use thiserror::Error;

use crate::render::FrameBuffer;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Save `buffer` to `path`, picking the format from the file extension.
///
/// Pixels are written as 8-bit RGBA in row-major order, row 0 at the top.
pub fn save<P: AsRef<Path>>(buffer: &FrameBuffer, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    image::save_buffer(
        path,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        ExtendedColorType::Rgba8,
    )?;
    log::info!(
        "wrote {}x{} image to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

/// Encode `buffer` in memory.
pub fn encode(buffer: &FrameBuffer, format: ImageFormat) -> Result<Vec<u8>, ExportError> {
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        ExtendedColorType::Rgba8,
        format,
    )?;
    Ok(out.into_inner())
}

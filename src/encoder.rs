// src/encoder.rs

//! Writes finished frames to disk as PNG.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::{ImageBuffer, Rgba};
use log::info;

use crate::frame::FrameBuffer;

/// Encodes `frame` as an 8-bit RGBA PNG at `path`.
///
/// Takes the frame by value: once encoded it is released.
pub fn write_png(frame: FrameBuffer, path: &Path) -> Result<()> {
    let (width, height) = (frame.width(), frame.height());
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, frame.into_bytes()).ok_or_else(|| {
            anyhow!("frame bytes do not match a {}x{} RGBA image", width, height)
        })?;

    image
        .save(path)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    info!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

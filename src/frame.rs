// src/frame.rs

//! The owned RGBA pixel grid produced by one render pass.

use anyhow::{anyhow, Result};

use crate::color::Rgba;
use crate::view::{PixelCoordinate, BYTES_PER_PIXEL};

/// A square, row-major RGBA buffer. Pixel `(x, y)` lives at byte offset
/// `(x + y * width) * 4` with no row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Allocates a zeroed buffer, reporting allocation failure as an error
    /// instead of aborting.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| anyhow!("frame of {}x{} pixels overflows usize", width, height))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| anyhow!("failed to allocate frame buffer of {} bytes: {}", len, e))?;
        data.resize(len, 0);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes in one row.
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw bytes, for writers that split the buffer
    /// into disjoint rows.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Releases the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, pixel: PixelCoordinate) -> Option<usize> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }
        Some((pixel.x as usize + pixel.y as usize * self.width as usize) * BYTES_PER_PIXEL)
    }

    /// Returns the pixel at `pixel`, or `None` when it lies outside the grid.
    pub fn pixel(&self, pixel: PixelCoordinate) -> Option<Rgba> {
        let at = self.offset(pixel)?;
        let px = &self.data[at..at + BYTES_PER_PIXEL];
        Some(Rgba {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Writes one pixel. Returns `false` when it lies outside the grid.
    #[cfg(test)]
    pub(crate) fn put_pixel(&mut self, pixel: PixelCoordinate, value: Rgba) -> bool {
        match self.offset(pixel) {
            Some(at) => {
                self.data[at..at + BYTES_PER_PIXEL].copy_from_slice(&value.to_bytes());
                true
            }
            None => false,
        }
    }
}

/// Writes one row of pixels into `row`, calling `shade` for every column.
///
/// `row` must be exactly `width * 4` bytes long.
pub fn fill_row<F>(row: &mut [u8], y: u32, mut shade: F)
where
    F: FnMut(PixelCoordinate) -> Rgba,
{
    for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let value = shade(PixelCoordinate { x: x as u32, y });
        px.copy_from_slice(&value.to_bytes());
    }
}

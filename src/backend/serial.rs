// src/backend/serial.rs

use anyhow::Result;
use log::debug;

use super::{shade, RenderBackend};
use crate::frame::{fill_row, FrameBuffer};
use crate::view::ViewParameters;

/// Single-threaded backend. Slow, but trivially ordered, which makes it the
/// reference the parallel backend is checked against.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialBackend;

impl SerialBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for SerialBackend {
    fn label(&self) -> &'static str {
        "SERIAL"
    }

    fn render(&self, view: &ViewParameters) -> Result<FrameBuffer> {
        let size = view.grid_size();
        let mut frame = FrameBuffer::try_new(size, size)?;
        let stride = frame.stride();
        debug!("SerialBackend: rendering {}x{}", size, size);

        for (y, row) in frame.as_bytes_mut().chunks_exact_mut(stride).enumerate() {
            fill_row(row, y as u32, |pixel| shade(view, pixel));
        }

        Ok(frame)
    }
}

// src/backend/mod.rs
// Declares the render backends and the trait they share.

pub mod cpu;
pub mod serial;

pub use cpu::CpuBackend;
pub use serial::SerialBackend;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::color::{class_to_rgba, Rgba};
use crate::field::evaluate;
use crate::frame::FrameBuffer;
use crate::view::{PixelCoordinate, ViewParameters};

/// A strategy that turns a view into a fully populated frame.
///
/// Every implementation must produce the same bytes for the same view;
/// backends differ only in how the work is scheduled.
pub trait RenderBackend {
    /// Short label used in log lines and output file names.
    fn label(&self) -> &'static str;

    /// Renders every pixel of `view` into a newly allocated frame.
    fn render(&self, view: &ViewParameters) -> Result<FrameBuffer>;
}

/// Backends selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Rows fanned out over the rayon pool.
    Cpu,
    /// One thread, row after row. Reference output for the parallel path.
    Serial,
}

impl BackendKind {
    pub fn create(self) -> Box<dyn RenderBackend> {
        match self {
            BackendKind::Cpu => Box::new(CpuBackend::new()),
            BackendKind::Serial => Box::new(SerialBackend::new()),
        }
    }
}

/// Evaluates and colors a single pixel. Shared by all CPU-side backends.
#[inline]
pub fn shade(view: &ViewParameters, pixel: PixelCoordinate) -> Rgba {
    class_to_rgba(evaluate(view, pixel))
}

/// Render entry point.
///
/// `buffer_size_bytes` must equal `grid_size * grid_size * 4`; the caller
/// owns the returned frame.
pub fn render_mandelbrot(
    buffer_size_bytes: usize,
    grid_size: u32,
    scale: f32,
    center_x: f32,
    center_y: f32,
) -> Result<FrameBuffer> {
    let view = ViewParameters::new(grid_size, scale, center_x, center_y)?;
    ensure!(
        buffer_size_bytes == view.buffer_len(),
        "buffer size {} does not match a {}x{} RGBA frame ({} bytes)",
        buffer_size_bytes,
        grid_size,
        grid_size,
        view.buffer_len()
    );
    CpuBackend::new().render(&view)
}

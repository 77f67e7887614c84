// src/backend/cpu.rs

//! Data-parallel backend: one rayon task per row.

use anyhow::Result;
use log::debug;
use rayon::prelude::*;

use super::{shade, RenderBackend};
use crate::frame::{fill_row, FrameBuffer};
use crate::view::ViewParameters;

/// Fans rows out over the current rayon pool. Each task owns a disjoint
/// row slice, so writes need no synchronisation.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for CpuBackend {
    fn label(&self) -> &'static str {
        "CPU"
    }

    fn render(&self, view: &ViewParameters) -> Result<FrameBuffer> {
        let size = view.grid_size();
        let mut frame = FrameBuffer::try_new(size, size)?;
        let stride = frame.stride();
        debug!(
            "CpuBackend: rendering {}x{} on {} threads",
            size,
            size,
            rayon::current_num_threads()
        );

        frame
            .as_bytes_mut()
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y, row)| fill_row(row, y as u32, |pixel| shade(view, pixel)));

        Ok(frame)
    }
}

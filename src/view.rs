// src/view.rs

//! View parameters and the screen-space to complex-plane mapping.
//!
//! The viewport is always square. Pixel rows grow downwards while the
//! imaginary axis grows upwards, so the vertical coordinate is flipped
//! before the center offset is applied.

use anyhow::{ensure, Result};
use num_complex::Complex;

/// Bytes per RGBA pixel in every buffer this crate produces.
pub const BYTES_PER_PIXEL: usize = 4;

/// Immutable description of the region to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParameters {
    grid_size: u32,
    scale: f32,
    center_x: f32,
    center_y: f32,
}

/// A pixel position inside the grid. `0 <= x, y < grid_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoordinate {
    pub x: u32,
    pub y: u32,
}

impl ViewParameters {
    /// Validates and builds a view.
    ///
    /// Fails when the grid is empty, when its RGBA byte length does not fit
    /// in `usize`, or when the scale or center are not usable numbers.
    pub fn new(grid_size: u32, scale: f32, center_x: f32, center_y: f32) -> Result<Self> {
        ensure!(grid_size > 0, "grid size must be positive, got {}", grid_size);
        ensure!(
            scale.is_finite() && scale != 0.0,
            "scale must be finite and nonzero, got {}",
            scale
        );
        ensure!(
            center_x.is_finite() && center_y.is_finite(),
            "center must be finite, got ({}, {})",
            center_x,
            center_y
        );
        let view = Self {
            grid_size,
            scale,
            center_x,
            center_y,
        };
        ensure!(
            view.checked_buffer_len().is_some(),
            "grid size {} is too large to address as an RGBA buffer",
            grid_size
        );
        Ok(view)
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center_x, self.center_y)
    }

    /// Number of pixels in the square grid.
    pub fn pixel_count(&self) -> usize {
        let side = self.grid_size as usize;
        side * side
    }

    /// Size in bytes of the RGBA frame for this view.
    pub fn buffer_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    fn checked_buffer_len(&self) -> Option<usize> {
        let side = usize::try_from(self.grid_size).ok()?;
        side.checked_mul(side)?.checked_mul(BYTES_PER_PIXEL)
    }

    /// Maps a pixel to the complex sample `c` the field evaluator iterates on.
    ///
    /// `re = (x - half) / half * scale - center_x`
    /// `im = (half - y) / half * scale + center_y`
    pub fn to_complex(&self, pixel: PixelCoordinate) -> Complex<f32> {
        let half = self.grid_size as f32 / 2.0;
        let re = (pixel.x as f32 - half) / half * self.scale - self.center_x;
        let im = (half - pixel.y as f32) / half * self.scale + self.center_y;
        Complex::new(re, im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn rejects_zero_grid() {
        let err = ViewParameters::new(0, 2.0, 0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("grid size"));
    }

    #[test]
    fn rejects_unusable_scale() {
        assert!(ViewParameters::new(16, 0.0, 0.0, 0.0).is_err());
        assert!(ViewParameters::new(16, f32::NAN, 0.0, 0.0).is_err());
        assert!(ViewParameters::new(16, f32::INFINITY, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_non_finite_center() {
        assert!(ViewParameters::new(16, 1.0, f32::NAN, 0.0).is_err());
        assert!(ViewParameters::new(16, 1.0, 0.0, f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn center_pixel_maps_to_origin() {
        let view = ViewParameters::new(1024, 2.0, 0.0, 0.0).unwrap();
        let c = view.to_complex(PixelCoordinate { x: 512, y: 512 });
        assert_eq!(c, Complex::new(0.0, 0.0));
    }

    #[test]
    fn corners_span_the_scale_with_flipped_imaginary_axis() {
        let view = ViewParameters::new(1024, 2.0, 0.0, 0.0).unwrap();
        let top_left = view.to_complex(PixelCoordinate { x: 0, y: 0 });
        assert_eq!(top_left, Complex::new(-2.0, 2.0));

        let bottom_right = view.to_complex(PixelCoordinate { x: 1023, y: 1023 });
        assert!(bottom_right.re > 1.99 && bottom_right.re < 2.0);
        assert!(bottom_right.im < -1.99 && bottom_right.im > -2.0);
    }

    #[test]
    fn center_x_is_subtracted_and_center_y_added() {
        let view = ViewParameters::new(2, 1.0, 0.5, 0.25).unwrap();
        // half = 1.0, pixel (1, 1) sits on the grid center.
        let c = view.to_complex(PixelCoordinate { x: 1, y: 1 });
        assert_eq!(c, Complex::new(-0.5, 0.25));
    }

    #[test]
    fn single_pixel_grid_is_valid() {
        let view = ViewParameters::new(1, 2.0, 0.0, 0.0).unwrap();
        assert_eq!(view.pixel_count(), 1);
        assert_eq!(view.buffer_len(), 4);
        let c = view.to_complex(PixelCoordinate { x: 0, y: 0 });
        assert_eq!(c, Complex::new(-2.0, 2.0));
    }
}

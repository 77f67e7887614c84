// src/field.rs

//! The escape-time field evaluator.
//!
//! Each pixel is evaluated independently: map it to `c`, iterate
//! `z <- z^2 + c` from zero, and stop as soon as the squared magnitude
//! passes [`ESCAPE_NORM_SQR`]. All arithmetic is single precision.

use num_complex::Complex;

use crate::view::{PixelCoordinate, ViewParameters};

/// Iteration budget before a point is declared bounded.
pub const MAX_ITERATIONS: u32 = 1000;

/// Squared-magnitude escape threshold.
///
/// The conventional test is `|z|^2 > 4`. Rendered output depends on this
/// exact value, so it stays at 2.
pub const ESCAPE_NORM_SQR: f32 = 2.0;

/// Number of distinct iteration classes (one per hue degree).
pub const CLASS_PERIOD: u32 = 360;

/// Escape iteration reduced to a hue class in `[0, 360)`.
///
/// Points that never escape share class 0 with points that escaped at a
/// multiple of 360. Use [`escape_iteration`] when the two must be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IterationClass(u16);

impl IterationClass {
    pub fn from_escape(escape: Option<u32>) -> Self {
        match escape {
            Some(i) => Self((i % CLASS_PERIOD) as u16),
            None => Self(0),
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

/// Returns the zero-based iteration at which the orbit of `c` escaped, or
/// `None` if it stayed bounded for [`MAX_ITERATIONS`] steps.
#[inline]
pub fn escape_iteration(c: Complex<f32>) -> Option<u32> {
    let mut z = Complex::new(0.0f32, 0.0f32);
    for i in 0..MAX_ITERATIONS {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return Some(i);
        }
    }
    None
}

/// Evaluates one pixel of the field.
#[inline]
pub fn evaluate(view: &ViewParameters, pixel: PixelCoordinate) -> IterationClass {
    IterationClass::from_escape(escape_iteration(view.to_complex(pixel)))
}

#[cfg(test)]
mod tests;

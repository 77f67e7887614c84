// src/color.rs

//! Maps iteration classes to colors.
//!
//! Hue comes from the iteration class, saturation and value are fixed at
//! 100. The HSV to RGB conversion runs in base-4096 fixed point so segment
//! boundaries round the same way on every platform.

use crate::field::IterationClass;

/// Saturation used for every pixel, in percent.
pub const SATURATION: i32 = 100;
/// Value (brightness) used for every pixel, in percent.
pub const VALUE: i32 = 100;
/// Alpha written for every pixel.
pub const OPAQUE: u8 = 0xFF;

// Fixed-point scale and its midpoint.
const ONE: i32 = 4096;
const HALF: i32 = ONE / 2;

/// An 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: OPAQUE }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Converts a hue in degrees (any integer, wrapped into `[0, 360)`) plus
/// saturation and value in percent into an `(r, g, b)` triple.
///
/// Saturation and value are clamped to `0..=100`.
pub fn hsv_to_rgb(h: i32, s: i32, v: i32) -> (u8, u8, u8) {
    let h = h.rem_euclid(360);
    let s = s.clamp(0, 100);
    let v = v.clamp(0, 100);

    let h1 = (h * ONE + 50) / 120;
    let s1 = (s * ONE + 50) / 100;
    let v1 = (v * ONE + 50) / 100;

    // Position inside the 120 degree sector. The first half ramps the
    // secondary channel up, the second half ramps the primary down.
    let h2 = h1 % ONE;
    let (a1, a2) = if h2 < HALF {
        ((ONE - (HALF - h2) * s1 / HALF) * v1 / ONE, v1)
    } else {
        (v1, (ONE - (h2 - HALF) * s1 / HALF) * v1 / ONE)
    };

    let primary = to_channel(a2);
    let secondary = to_channel(a1);
    let floor = to_channel((ONE - s1) * v1 / ONE);

    match h1 / ONE {
        1 => (floor, primary, secondary),
        2 => (secondary, floor, primary),
        _ => (primary, secondary, floor),
    }
}

fn to_channel(a: i32) -> u8 {
    ((a * 255 + HALF) / ONE).clamp(0, 255) as u8
}

/// Colors one evaluated pixel.
pub fn class_to_rgba(class: IterationClass) -> Rgba {
    let (r, g, b) = hsv_to_rgb(i32::from(class.value()), SATURATION, VALUE);
    Rgba::opaque(r, g, b)
}

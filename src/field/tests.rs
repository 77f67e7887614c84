// src/field/tests.rs

use super::*;
use test_log::test;

fn view(grid_size: u32, scale: f32, cx: f32, cy: f32) -> ViewParameters {
    ViewParameters::new(grid_size, scale, cx, cy).expect("valid view")
}

#[test]
fn origin_never_escapes() {
    assert_eq!(escape_iteration(Complex::new(0.0, 0.0)), None);
}

#[test]
fn period_two_cycle_never_escapes() {
    // -1 -> 0 -> -1 -> ... stays exact in f32.
    assert_eq!(escape_iteration(Complex::new(-1.0, 0.0)), None);
}

#[test]
fn known_escape_iteration() {
    // Orbit of 0.5: 0.5, 0.75, 1.0625, 1.62890625 (|z|^2 ~ 2.65).
    assert_eq!(escape_iteration(Complex::new(0.5, 0.0)), Some(3));
}

#[test]
fn threshold_is_two_not_four() {
    // |c|^2 = 2.25 escapes on the first step under the reproduced threshold,
    // while the conventional |z|^2 > 4 test would keep iterating.
    assert_eq!(escape_iteration(Complex::new(1.5, 0.0)), Some(0));
}

#[test]
fn escape_test_is_strictly_greater_than() {
    // |c|^2 is exactly 2.0 after the first step, which does not count as
    // escaping. The second step lands on 1 + 3i.
    assert_eq!(escape_iteration(Complex::new(1.0, 1.0)), Some(1));
    assert_eq!(escape_iteration(Complex::new(1.0, -1.0)), Some(1));
}

#[test]
fn far_points_escape_quickly() {
    for c in [
        Complex::new(3.0, 3.0),
        Complex::new(-10.0, 0.5),
        Complex::new(0.0, -7.25),
        Complex::new(100.0, 100.0),
    ] {
        let i = escape_iteration(c).expect("far point must escape");
        assert!(i < 10, "{:?} escaped at {}", c, i);
    }
}

#[test]
fn class_reduces_modulo_360() {
    assert_eq!(IterationClass::from_escape(Some(0)).value(), 0);
    assert_eq!(IterationClass::from_escape(Some(359)).value(), 359);
    assert_eq!(IterationClass::from_escape(Some(360)).value(), 0);
    assert_eq!(IterationClass::from_escape(Some(361)).value(), 1);
    assert_eq!(IterationClass::from_escape(Some(999)).value(), 279);
}

#[test]
fn bounded_points_share_class_zero() {
    assert_eq!(IterationClass::from_escape(None).value(), 0);
    assert_eq!(
        IterationClass::from_escape(None),
        IterationClass::from_escape(Some(720))
    );
}

#[test]
fn center_pixel_of_full_view_reports_class_zero() {
    let v = view(1024, 2.0, 0.0, 0.0);
    let pixel = PixelCoordinate { x: 512, y: 512 };
    assert_eq!(escape_iteration(v.to_complex(pixel)), None);
    assert_eq!(evaluate(&v, pixel).value(), 0);
}

#[test]
fn corner_pixels_evaluate_without_panicking() {
    let v = view(1024, 2.0, 0.0, 0.0);
    let top_left = evaluate(&v, PixelCoordinate { x: 0, y: 0 });
    let bottom_right = evaluate(&v, PixelCoordinate { x: 1023, y: 1023 });
    // (-2, 2) has |c|^2 = 8 and leaves on the first step.
    assert_eq!(top_left.value(), 0);
    assert!(bottom_right.value() < 360);
}

#[test]
fn evaluation_is_deterministic() {
    let v = view(64, 0.00002, 0.743643135, 0.131825963);
    for y in (0..64).step_by(7) {
        for x in (0..64).step_by(5) {
            let p = PixelCoordinate { x, y };
            assert_eq!(evaluate(&v, p), evaluate(&v, p));
        }
    }
}

#![cfg(feature = "dev")]

use zahlenmauer_rs::internals::math::rounding::{snap_slice, snap_to_pow2};

#[test]
fn test_snap_to_sixteenths() {
    // Exponent -4 snaps to multiples of 1/16, the original widget's grid.
    assert_eq!(snap_to_pow2(0.3, -4), 0.3125);
    assert_eq!(snap_to_pow2(-0.3, -4), -0.3125);
    assert_eq!(snap_to_pow2(5.0, -4), 5.0);
    assert_eq!(snap_to_pow2(0.0625, -4), 0.0625);
}

#[test]
fn test_snap_flushes_noise_to_zero() {
    assert_eq!(snap_to_pow2(1e-9, -4), 0.0);
    assert_eq!(snap_to_pow2(-1e-12, -4), 0.0);
    assert_eq!(snap_to_pow2(2.0000000000000004, -4), 2.0);
}

#[test]
fn test_snap_exponent_zero_rounds_to_integers() {
    assert_eq!(snap_to_pow2(2.4, 0), 2.0);
    assert_eq!(snap_to_pow2(2.5, 0), 3.0);
    assert_eq!(snap_to_pow2(-1.6, 0), -2.0);
}

#[test]
fn test_snap_positive_exponent() {
    assert_eq!(snap_to_pow2(5.0, 1), 6.0);
    assert_eq!(snap_to_pow2(7.9, 2), 8.0);
}

#[test]
fn test_snap_slice() {
    let mut values = [0.3, 1e-9, 5.0];
    snap_slice(&mut values, -4);

    assert_eq!(values, [0.3125, 0.0, 5.0]);
}

#[test]
fn test_snap_f32() {
    assert_eq!(snap_to_pow2(0.3f32, -4), 0.3125f32);
    assert_eq!(snap_to_pow2(1e-6f32, -4), 0.0f32);
}

//! Snapping values to a power-of-two grid.
//!
//! ## Purpose
//!
//! This module snaps floating-point values to the nearest multiple of
//! `2^exponent`. Applied to a reduced matrix, it flushes elimination noise
//! to exact zeros so the extractor's nonzero scan sees clean coefficients.
//!
//! ## Design notes
//!
//! * **Formula**: `snap(v) = round(v / 2^e) * 2^e`. Powers of two keep the
//!   scaling itself exact in binary floating point.
//! * The solve pipeline applies snapping only when explicitly configured;
//!   the core reduction and extraction stay exact.

// External dependencies
use num_traits::Float;

// ============================================================================
// Snapping
// ============================================================================

/// Snap a single value to the nearest multiple of `2^exponent`.
#[inline]
pub fn snap_to_pow2<T: Float>(value: T, exponent: i32) -> T {
    let scale = T::from(2.0).unwrap().powi(exponent);
    (value / scale).round() * scale
}

/// Snap every value in the slice to the nearest multiple of `2^exponent`.
pub fn snap_slice<T: Float>(values: &mut [T], exponent: i32) {
    for value in values.iter_mut() {
        *value = snap_to_pow2(*value, exponent);
    }
}

//! Triangular pyramid geometry.
//!
//! ## Purpose
//!
//! This module maps between the pyramid's triangular `(row, col)` coordinates
//! and the flat 0-based cell index used as the canonical exchange format, and
//! computes cell counts for a given row count.
//!
//! ## Key concepts
//!
//! * Row `r` (0-indexed) holds `r + 1` cells; a pyramid with `R` rows holds
//!   `R * (R + 1) / 2` cells in total.
//! * Flattening is row-major: `flatten_index(row, col) = row*(row+1)/2 + col`.
//!
//! ## Non-goals
//!
//! * No flat-to-(row, col) inverse; consumers expand the flat array by
//!   iterating rows and columns in order.

// ============================================================================
// Geometry
// ============================================================================

/// Total number of cells in a pyramid with the given number of rows.
///
/// `cell_count(0) == 0`.
#[inline]
pub fn cell_count(rows: usize) -> usize {
    rows * (rows + 1) / 2
}

/// Flat index of the cell at `(row, col)`.
///
/// Precondition: `col <= row`. Calling with a column outside its row is a
/// caller bug; the result would alias a different cell.
#[inline]
pub fn flatten_index(row: usize, col: usize) -> usize {
    debug_assert!(col <= row, "column {} outside row {}", col, row);
    row * (row + 1) / 2 + col
}

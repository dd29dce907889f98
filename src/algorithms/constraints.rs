//! Building the linear system from pyramid structure and known cells.
//!
//! ## Purpose
//!
//! This module translates a pyramid's sum constraints and its known cell
//! values into an augmented matrix over the flat cell variables.
//!
//! ## Design notes
//!
//! * **Equation order is fixed**: all structural equations first (row-major
//!   over the pyramid, then by column), then one pinning equation per known
//!   cell in flat-index order. The reduced matrix does not depend on this
//!   order mathematically, but pivot selection does, so the order is part
//!   of the contract for reproducible output.
//! * **Pre-validated input**: The engine validates `rows >= 1` and the flat
//!   array length before calling; violations here are debug-asserted.
//!
//! ## Key concepts
//!
//! * **Structural equation**: `cell(r,c) - cell(r+1,c) - cell(r+1,c+1) = 0`
//!   for every cell with a row beneath it.
//! * **Pinning equation**: `cell(i) = v` for every known cell.
//!
//! ## Invariants
//!
//! * The matrix has `cell_count(rows) + 1` columns.
//! * A pyramid with `rows == 1` and no known cells yields an empty matrix;
//!   the executor short-circuits that case before reduction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::geometry::{cell_count, flatten_index};
use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Constraint Builder
// ============================================================================

/// Build the augmented matrix for a pyramid with the given known cells.
///
/// `flat[i]` is `Some(value)` for a known cell and `None` for an unknown
/// one, indexed by `flatten_index`.
///
/// Preconditions (validated by the engine): `rows >= 1` and
/// `flat.len() == cell_count(rows)`.
pub fn build_constraints<T: Float>(rows: usize, flat: &[Option<T>]) -> AugmentedMatrix<T> {
    debug_assert!(rows >= 1, "a pyramid needs at least one row");
    debug_assert_eq!(flat.len(), cell_count(rows), "flat array length mismatch");

    let variables = cell_count(rows);
    let mut matrix = AugmentedMatrix::with_columns(variables + 1);
    let mut equation: Vec<T> = vec![T::zero(); variables + 1];

    // Structural equations: each cell is the sum of the two beneath it.
    for row in 0..rows.saturating_sub(1) {
        for col in 0..=row {
            for entry in equation.iter_mut() {
                *entry = T::zero();
            }
            equation[flatten_index(row, col)] = T::one();
            equation[flatten_index(row + 1, col)] = -T::one();
            equation[flatten_index(row + 1, col + 1)] = -T::one();
            matrix.push_row(&equation);
        }
    }

    // Pinning equations for the known cells.
    for (index, value) in flat.iter().enumerate() {
        if let Some(value) = value {
            for entry in equation.iter_mut() {
                *entry = T::zero();
            }
            equation[index] = T::one();
            equation[variables] = *value;
            matrix.push_row(&equation);
        }
    }

    matrix
}

//! Reduced row-echelon form for augmented matrices.
//!
//! ## Purpose
//!
//! This module reduces an augmented matrix to reduced row-echelon form
//! (RREF) via Gauss–Jordan elimination with column-wise partial pivoting,
//! standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * **Value transformation**: `reduce_to_rref` consumes the matrix and
//!   returns the reduced matrix; the working copy is owned solely by the
//!   reduction. Callers decide whether to keep the original around.
//! * **Exact-zero pivoting**: Only entries that compare equal to zero are
//!   skipped during pivot search. Near-zero pivots are used as-is; there is
//!   no epsilon guard. Pyramid systems have ±1 coefficients, so the usual
//!   ill-conditioning concerns do not apply.
//! * **Determinism**: Given a fixed equation order, pivot selection (first
//!   nonzero from the top) and elimination order are fully deterministic.
//! * **Generics**: Generic code is written against `FloatLinalg`, which
//!   bridges `f32` and `f64` to concrete nalgebra routines.
//!
//! ## Invariants
//!
//! * Every pivot in the output equals exactly 1 and is the only nonzero
//!   entry in its column.
//! * Rows below the last pivot row are all-zero in their coefficient
//!   columns (their RHS may be nonzero for inconsistent systems).
//! * Reducing an already-reduced matrix leaves it unchanged.
//!
//! ## Non-goals
//!
//! * No rank reporting, determinant, or inverse computation.
//! * No numerical-stability tuning beyond the pivot-search skip of exact
//!   zeros.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic `Float` types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Reduce a row-major `n_rows x n_cols` matrix to RREF in place.
    fn rref_in_place(data: &mut [Self], n_rows: usize, n_cols: usize);
}

impl FloatLinalg for f64 {
    #[inline]
    fn rref_in_place(data: &mut [Self], n_rows: usize, n_cols: usize) {
        nalgebra_backend::reduce_rref_f64(data, n_rows, n_cols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn rref_in_place(data: &mut [Self], n_rows: usize, n_cols: usize) {
        nalgebra_backend::reduce_rref_f32(data, n_rows, n_cols)
    }
}

// ============================================================================
// Public Entry Point
// ============================================================================

/// Reduce an augmented matrix to reduced row-echelon form.
///
/// Consumes the input and returns the reduced matrix. The reduction runs
/// in place on the matrix's backing storage; no intermediate copies of the
/// system are kept.
///
/// # Panics
///
/// Panics if the matrix holds no equations. An empty system is a contract
/// violation here; the engine short-circuits it before reduction.
pub fn reduce_to_rref<T: FloatLinalg>(mut matrix: AugmentedMatrix<T>) -> AugmentedMatrix<T> {
    assert!(!matrix.is_empty(), "cannot reduce an empty system");

    let (n_rows, n_cols) = (matrix.rows(), matrix.cols());
    T::rref_in_place(matrix.as_mut_slice(), n_rows, n_cols);
    matrix
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based Gauss–Jordan elimination.
pub mod nalgebra_backend {
    use nalgebra::DMatrix;

    /// Reduce a row-major matrix to RREF using f64 precision.
    pub fn reduce_rref_f64(data: &mut [f64], n_rows: usize, n_cols: usize) {
        let mut matrix = DMatrix::from_row_slice(n_rows, n_cols, data);
        gauss_jordan_f64(&mut matrix);
        for row in 0..n_rows {
            for col in 0..n_cols {
                data[row * n_cols + col] = matrix[(row, col)];
            }
        }
    }

    /// Reduce a row-major matrix to RREF using f32 precision.
    pub fn reduce_rref_f32(data: &mut [f32], n_rows: usize, n_cols: usize) {
        let mut matrix = DMatrix::from_row_slice(n_rows, n_cols, data);
        gauss_jordan_f32(&mut matrix);
        for row in 0..n_rows {
            for col in 0..n_cols {
                data[row * n_cols + col] = matrix[(row, col)];
            }
        }
    }

    /// Gauss–Jordan elimination with column-wise partial pivoting (f64).
    ///
    /// Maintains a pivot column cursor `lead`. For each row, the first row
    /// at or below it with a nonzero entry in column `lead` is swapped into
    /// place, scaled so the pivot becomes 1, and eliminated from every
    /// other row. When a column holds no usable pivot the cursor advances
    /// without consuming a row; when the columns are exhausted the
    /// remaining rows stay untouched.
    fn gauss_jordan_f64(matrix: &mut DMatrix<f64>) {
        let n_rows = matrix.nrows();
        let n_cols = matrix.ncols();
        let mut lead = 0;

        for row in 0..n_rows {
            if lead >= n_cols {
                return;
            }

            // Find the first row at or below `row` with a nonzero pivot.
            let mut i = row;
            while matrix[(i, lead)] == 0.0 {
                i += 1;
                if i == n_rows {
                    i = row;
                    lead += 1;
                    if lead == n_cols {
                        return;
                    }
                }
            }
            matrix.swap_rows(i, row);

            // Scale the pivot row so the pivot entry becomes exactly 1.
            let pivot = matrix[(row, lead)];
            if pivot != 0.0 {
                for col in 0..n_cols {
                    matrix[(row, col)] /= pivot;
                }
            }

            // Eliminate the pivot column from every other row.
            for other in 0..n_rows {
                if other == row {
                    continue;
                }
                let factor = matrix[(other, lead)];
                if factor == 0.0 {
                    continue;
                }
                for col in 0..n_cols {
                    let value = matrix[(row, col)];
                    matrix[(other, col)] -= factor * value;
                }
            }

            lead += 1;
        }
    }

    /// Gauss–Jordan elimination with column-wise partial pivoting (f32).
    fn gauss_jordan_f32(matrix: &mut DMatrix<f32>) {
        let n_rows = matrix.nrows();
        let n_cols = matrix.ncols();
        let mut lead = 0;

        for row in 0..n_rows {
            if lead >= n_cols {
                return;
            }

            let mut i = row;
            while matrix[(i, lead)] == 0.0 {
                i += 1;
                if i == n_rows {
                    i = row;
                    lead += 1;
                    if lead == n_cols {
                        return;
                    }
                }
            }
            matrix.swap_rows(i, row);

            let pivot = matrix[(row, lead)];
            if pivot != 0.0 {
                for col in 0..n_cols {
                    matrix[(row, col)] /= pivot;
                }
            }

            for other in 0..n_rows {
                if other == row {
                    continue;
                }
                let factor = matrix[(other, lead)];
                if factor == 0.0 {
                    continue;
                }
                for col in 0..n_cols {
                    let value = matrix[(row, col)];
                    matrix[(other, col)] -= factor * value;
                }
            }

            lead += 1;
        }
    }
}

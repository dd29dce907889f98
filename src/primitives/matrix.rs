//! Augmented-matrix storage for the pyramid's linear system.
//!
//! ## Purpose
//!
//! This module provides `AugmentedMatrix`, the exchange format between the
//! constraint builder, the RREF reduction, and the solution extractor. Each
//! row encodes one linear equation; the last column holds the right-hand
//! side.
//!
//! ## Design notes
//!
//! * **Storage**: Row-major flat vector. Row operations stay cache-friendly
//!   and the backing slice can be handed to the linear-algebra backend
//!   without conversion.
//! * **Rectangular by construction**: The column count is fixed at creation;
//!   `push_row` asserts it, `from_rows` reports ragged input as an error.
//! * **Exclusive ownership**: A matrix belongs to the solve that created it.
//!   Nothing in the crate shares or aliases matrix storage.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` at all times.
//! * `cols >= 2` (at least one variable column plus the RHS).
//!
//! ## Non-goals
//!
//! * General matrix arithmetic (products, decompositions). The reduction in
//!   the math layer is the only consumer of row operations.
//! * Sparse representation. Pyramid systems are small and dense enough.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WallError;

// ============================================================================
// AugmentedMatrix
// ============================================================================

/// Augmented coefficient matrix: `cols - 1` variable columns plus one RHS
/// column, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Float> AugmentedMatrix<T> {
    /// Create an empty matrix with the given column count, ready for
    /// `push_row`.
    ///
    /// # Panics
    ///
    /// Panics if `cols < 2` (a system needs at least one variable and the
    /// RHS column).
    pub fn with_columns(cols: usize) -> Self {
        assert!(cols >= 2, "augmented matrix needs at least 2 columns");
        Self {
            data: Vec::new(),
            rows: 0,
            cols,
        }
    }

    /// Create a zero-filled matrix of the given shape.
    ///
    /// # Panics
    ///
    /// Panics if `cols < 2`.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        assert!(cols >= 2, "augmented matrix needs at least 2 columns");
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Build a matrix from explicit equation rows.
    ///
    /// All rows must share the length of the first; ragged input is
    /// reported as `WallError::RaggedMatrix`. An empty row list is
    /// reported as `WallError::EmptyInput`.
    pub fn from_rows(source: &[Vec<T>]) -> Result<Self, WallError> {
        let first = source.first().ok_or(WallError::EmptyInput)?;
        let cols = first.len();
        if cols < 2 {
            return Err(WallError::RaggedMatrix {
                row: 0,
                expected: 2,
                got: cols,
            });
        }

        let mut matrix = Self::with_columns(cols);
        for (index, row) in source.iter().enumerate() {
            if row.len() != cols {
                return Err(WallError::RaggedMatrix {
                    row: index,
                    expected: cols,
                    got: row.len(),
                });
            }
            matrix.push_row(row);
        }
        Ok(matrix)
    }

    /// Append one equation row.
    ///
    /// # Panics
    ///
    /// Panics if `row.len() != self.cols()`; appending a mis-sized row is a
    /// caller bug, not recoverable state.
    pub fn push_row(&mut self, row: &[T]) {
        assert_eq!(
            row.len(),
            self.cols,
            "equation row length must match the column count"
        );
        self.data.extend_from_slice(row);
        self.rows += 1;
    }

    /// Number of equation rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, including the RHS column.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of variable columns (all columns except the RHS).
    #[inline]
    pub fn variables(&self) -> usize {
        self.cols - 1
    }

    /// True if the matrix holds no equations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Borrow one equation row as a slice.
    #[inline]
    pub fn row(&self, index: usize) -> &[T] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Borrow the row-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrow the row-major backing storage.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<(usize, usize)> for AugmentedMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for AugmentedMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.cols + col]
    }
}

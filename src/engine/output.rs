//! Solve results and pyramid-shape reshaping.
//!
//! ## Purpose
//!
//! This module defines `WallSolution`, the result of one solve, and the
//! reshaping helper that expands a flat cell array back into triangular
//! row/column form for presentation.
//!
//! ## Design notes
//!
//! * **Given vs derived**: The solution keeps the input alongside the
//!   solved values, so consumers can distinguish cells the user supplied
//!   from cells the solver determined (UIs typically render the two
//!   differently).
//! * **Reshaping is pure**: `to_pyramid_shape` carries no numeric logic; it
//!   exists so boundary code cannot reintroduce coordinate-mapping bugs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::extraction::Solution;
use crate::math::geometry::cell_count;

// ============================================================================
// Pyramid Reshaping
// ============================================================================

/// Expand a flat cell array into triangular shape: element `[r][c]` is
/// `flat[flatten_index(r, c)]`.
///
/// # Panics
///
/// Panics if `flat.len() != cell_count(rows)`.
pub fn to_pyramid_shape<T: Clone>(rows: usize, flat: &[T]) -> Vec<Vec<T>> {
    assert_eq!(
        flat.len(),
        cell_count(rows),
        "flat array length must match the cell count"
    );

    let mut result = Vec::with_capacity(rows);
    let mut index = 0;
    for row in 0..rows {
        let mut cells = Vec::with_capacity(row + 1);
        for _ in 0..=row {
            cells.push(flat[index].clone());
            index += 1;
        }
        result.push(cells);
    }
    result
}

// ============================================================================
// WallSolution
// ============================================================================

/// Result of solving one number pyramid.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSolution<T> {
    rows: usize,
    given: Vec<Option<T>>,
    values: Vec<Option<T>>,
    inconsistent: bool,
}

impl<T: Float> WallSolution<T> {
    /// Assemble a solution from the extractor's output.
    pub(crate) fn from_extraction(rows: usize, given: &[Option<T>], solution: Solution<T>) -> Self {
        let values = if solution.inconsistent {
            vec![None; given.len()]
        } else {
            solution.values
        };
        Self {
            rows,
            given: given.to_vec(),
            values,
            inconsistent: solution.inconsistent,
        }
    }

    /// A solution where nothing beyond the input could be determined.
    pub(crate) fn undetermined(rows: usize, given: &[Option<T>]) -> Self {
        Self {
            rows,
            given: given.to_vec(),
            values: given.to_vec(),
            inconsistent: false,
        }
    }

    /// Number of pyramid rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True if the puzzle admits no solution (the system implies `0 = 1`).
    #[inline]
    pub fn is_inconsistent(&self) -> bool {
        self.inconsistent
    }

    /// The flat input array the solve started from.
    #[inline]
    pub fn given(&self) -> &[Option<T>] {
        &self.given
    }

    /// The solved flat array: every determined cell carries its value,
    /// underdetermined cells stay `None`. All-`None` when inconsistent.
    #[inline]
    pub fn values(&self) -> &[Option<T>] {
        &self.values
    }

    /// Cells the solver determined that were not part of the input.
    pub fn derived(&self) -> Vec<Option<T>> {
        self.values
            .iter()
            .zip(self.given.iter())
            .map(|(solved, given)| match given {
                Some(_) => None,
                None => *solved,
            })
            .collect()
    }

    /// The solved values in triangular row/column shape.
    pub fn pyramid(&self) -> Vec<Vec<Option<T>>> {
        to_pyramid_shape(self.rows, &self.values)
    }

    /// The original input in triangular row/column shape.
    pub fn given_pyramid(&self) -> Vec<Vec<Option<T>>> {
        to_pyramid_shape(self.rows, &self.given)
    }
}

// ============================================================================
// Display
// ============================================================================

#[cfg(feature = "std")]
impl<T: Float + core::fmt::Display> core::fmt::Display for WallSolution<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.inconsistent {
            return writeln!(f, "no solution (contradictory cells)");
        }

        for row in self.pyramid() {
            let mut first = true;
            for cell in row {
                if !first {
                    write!(f, "  ")?;
                }
                first = false;
                match cell {
                    Some(value) => write!(f, "{}", value)?,
                    None => write!(f, "?")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Extracting determined cells from the reduced system.
//!
//! ## Purpose
//!
//! This module inspects a matrix in reduced row-echelon form and recovers
//! which cells have a uniquely determined value, or reports that the system
//! is globally inconsistent.
//!
//! ## Design notes
//!
//! * **Inconsistency heuristic**: Only the last row is checked for the
//!   `0 = 1` pattern (all-zero coefficients, nonzero RHS). Gauss–Jordan
//!   elimination pushes zero rows to the bottom, so this catches the common
//!   case, but it is not a fully general inconsistency scan — an
//!   inconsistent row elsewhere would go unnoticed. The behavior is kept
//!   deliberately; generalizing it would change solve outcomes.
//! * **Single-nonzero scan**: A row with exactly one nonzero coefficient
//!   pins one variable to `rhs / coefficient`. Pivots are normalized to 1
//!   by the reduction, so the division is usually by 1; dividing anyway
//!   keeps the extractor correct on any RREF-shaped input.
//!
//! ## Invariants
//!
//! * `values.len() == matrix.variables()` on consistent systems.
//! * An inconsistent result carries no values.
//!
//! ## Non-goals
//!
//! * No parametric description of underdetermined cells; they simply stay
//!   unknown.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Solution
// ============================================================================

/// Outcome of inspecting a reduced system.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// True if the system implies a false equality such as `0 = 1`.
    pub inconsistent: bool,

    /// Determined value per flat cell index; `None` where underdetermined.
    /// Empty when the system is inconsistent.
    pub values: Vec<Option<T>>,
}

impl<T> Solution<T> {
    /// An inconsistent outcome carrying no values.
    pub fn inconsistent() -> Self {
        Self {
            inconsistent: true,
            values: Vec::new(),
        }
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Recover determined cells from a matrix in reduced row-echelon form.
///
/// # Panics
///
/// Panics if the matrix holds no equations; the engine short-circuits
/// empty systems before extraction.
pub fn extract_solution<T: Float>(matrix: &AugmentedMatrix<T>) -> Solution<T> {
    assert!(!matrix.is_empty(), "cannot extract from an empty system");

    let variables = matrix.variables();
    let rhs = variables;

    // Inconsistency check on the last row only (see module notes).
    let last = matrix.row(matrix.rows() - 1);
    if last[..variables].iter().all(|entry| entry.is_zero()) && !last[rhs].is_zero() {
        return Solution::inconsistent();
    }

    let mut values: Vec<Option<T>> = vec![None; variables];
    for index in 0..matrix.rows() {
        let row = matrix.row(index);

        let mut nonzero = row[..variables]
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_zero());

        // Only rows with exactly one nonzero coefficient pin a value.
        let (column, coefficient) = match nonzero.next() {
            Some((column, coefficient)) => (column, *coefficient),
            None => continue,
        };
        if nonzero.next().is_some() {
            continue;
        }

        values[column] = Some(row[rhs] / coefficient);
    }

    Solution {
        inconsistent: false,
        values,
    }
}

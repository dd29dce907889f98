//! The solve pipeline.
//!
//! ## Purpose
//!
//! This module runs one complete solve: validate the input, build the
//! linear system, reduce it to RREF, optionally snap the reduced matrix to
//! a power-of-two grid, extract determined cells, and assemble the result.
//!
//! ## Design notes
//!
//! * **Stateless**: Each run builds, consumes, and discards its own matrix.
//!   Repeated solves are independent; callers wanting memoization cache at
//!   their own layer.
//! * **Snapping**: Off by default. When enabled, the reduced matrix is
//!   snapped to the configured power-of-two grid before extraction,
//!   flushing elimination noise at the cost of distorting values that do
//!   not lie on the grid.
//! * **Empty system**: A single-row pyramid with no known cells produces no
//!   equations at all. The reduction requires a non-empty matrix, so that
//!   case short-circuits to an all-unknown result.
//!
//! ## Non-goals
//!
//! * No caching across solves.
//! * No cancellation; a solve completes in time polynomial in the (small)
//!   pyramid size.

// Internal dependencies
use crate::algorithms::constraints::build_constraints;
use crate::algorithms::extraction::extract_solution;
use crate::engine::output::WallSolution;
use crate::engine::validator::Validator;
use crate::math::linalg::{reduce_to_rref, FloatLinalg};
use crate::math::rounding::snap_slice;
use crate::primitives::errors::WallError;

// ============================================================================
// Solve Configuration
// ============================================================================

/// Configuration for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveConfig {
    /// Snap every entry of the reduced matrix to the nearest multiple of
    /// `2^exponent` before extraction. `None` leaves the matrix exact.
    pub snap_exponent: Option<i32>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the build → reduce → extract pipeline.
pub struct WallExecutor;

impl WallExecutor {
    /// Solve a pyramid from its row count and flat known-value array.
    pub fn run<T: FloatLinalg>(
        rows: usize,
        flat: &[Option<T>],
        config: &SolveConfig,
    ) -> Result<WallSolution<T>, WallError> {
        Validator::validate_rows(rows)?;
        Validator::validate_flat(rows, flat)?;
        if let Some(exponent) = config.snap_exponent {
            Validator::validate_snap_exponent(exponent)?;
        }

        let matrix = build_constraints(rows, flat);
        if matrix.is_empty() {
            // rows == 1 with no known cells: nothing to derive from.
            return Ok(WallSolution::undetermined(rows, flat));
        }

        let mut reduced = reduce_to_rref(matrix);
        if let Some(exponent) = config.snap_exponent {
            snap_slice(reduced.as_mut_slice(), exponent);
        }

        let solution = extract_solution(&reduced);
        Ok(WallSolution::from_extraction(rows, flat, solution))
    }
}

//! Input validation for pyramid configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions guarding the solve
//! pipeline: row counts, flat-array shape, cell coordinates, value
//! finiteness, and snapping configuration.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Value checks are generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not repair invalid inputs.
//! * This module does not parse text (see the text adapter).
//! * This module does not perform the solve itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::geometry::cell_count;
use crate::primitives::errors::WallError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pyramid configuration and input data.
///
/// Provides static methods returning `Result<(), WallError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Largest snapping exponent magnitude accepted by the pipeline.
    const MAX_SNAP_EXPONENT: i32 = 32;

    /// Validate the pyramid row count.
    pub fn validate_rows(rows: usize) -> Result<(), WallError> {
        if rows < 1 {
            return Err(WallError::InvalidRows(rows));
        }
        Ok(())
    }

    /// Validate the flat value array against the row count.
    ///
    /// Checks the length first, then that every known value is finite.
    pub fn validate_flat<T: Float>(rows: usize, flat: &[Option<T>]) -> Result<(), WallError> {
        let expected = cell_count(rows);
        if flat.len() != expected {
            return Err(WallError::MismatchedInput {
                expected,
                got: flat.len(),
            });
        }

        for (index, value) in flat.iter().enumerate() {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(WallError::InvalidNumericValue(format!(
                        "cell[{}]={}",
                        index,
                        value.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate that a cell coordinate lies inside its row.
    pub fn validate_cell(row: usize, col: usize) -> Result<(), WallError> {
        if col > row {
            return Err(WallError::InvalidCellIndex { row, col });
        }
        Ok(())
    }

    /// Validate the snapping exponent.
    pub fn validate_snap_exponent(exponent: i32) -> Result<(), WallError> {
        if exponent.abs() > Self::MAX_SNAP_EXPONENT {
            return Err(WallError::InvalidSnapExponent(exponent));
        }
        Ok(())
    }
}

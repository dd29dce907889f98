//! Error types for pyramid construction and solving.
//!
//! ## Purpose
//!
//! This module defines `WallError`, the single error type returned by every
//! fallible operation in the crate: builder validation, textual parsing, and
//! matrix construction from external data.
//!
//! ## Design notes
//!
//! * An inconsistent puzzle is NOT an error — it is a normal solve outcome
//!   reported through the solution's `inconsistent` flag. `WallError` covers
//!   malformed input and contract violations only.
//! * `Display` is hand-written so the type works without `std`; the
//!   `std::error::Error` impl is feature-gated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// WallError
// ============================================================================

/// Errors that can occur while building or solving a number pyramid.
#[derive(Debug, Clone, PartialEq)]
pub enum WallError {
    /// The input contained no pyramid rows at all.
    EmptyInput,

    /// The row count is outside the supported range (must be at least 1).
    InvalidRows(usize),

    /// The flat value array does not match the cell count for the row count.
    MismatchedInput {
        /// Number of cells implied by the row count.
        expected: usize,
        /// Number of cells actually supplied.
        got: usize,
    },

    /// A cell coordinate lies outside its row.
    InvalidCellIndex {
        /// Row of the offending coordinate.
        row: usize,
        /// Column of the offending coordinate.
        col: usize,
    },

    /// A supplied value is not finite (NaN or infinite).
    InvalidNumericValue(String),

    /// A matrix row has the wrong number of columns.
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Expected column count.
        expected: usize,
        /// Actual column count.
        got: usize,
    },

    /// A textual pyramid row holds the wrong number of cells.
    MalformedRow {
        /// One-based pyramid row number (blank lines not counted).
        line: usize,
        /// Expected cell count for that row.
        expected: usize,
        /// Actual cell count found.
        got: usize,
    },

    /// A textual cell is neither a finite number nor `?`.
    InvalidToken {
        /// One-based pyramid row number (blank lines not counted).
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The snapping exponent is outside the supported range.
    InvalidSnapExponent(i32),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for WallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input contains no pyramid rows"),
            Self::InvalidRows(rows) => {
                write!(f, "Invalid row count: {} (must be at least 1)", rows)
            }
            Self::MismatchedInput { expected, got } => {
                write!(f, "Cell count mismatch: expected {} cells, got {}", expected, got)
            }
            Self::InvalidCellIndex { row, col } => {
                write!(f, "Invalid cell ({}, {}): column must not exceed row", row, col)
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::RaggedMatrix { row, expected, got } => {
                write!(
                    f,
                    "Ragged matrix: row {} has {} columns, expected {}",
                    row, got, expected
                )
            }
            Self::MalformedRow { line, expected, got } => {
                write!(
                    f,
                    "Malformed pyramid row {}: expected {} cells, got {}",
                    line, expected, got
                )
            }
            Self::InvalidToken { line, token } => {
                write!(
                    f,
                    "Invalid cell '{}' in pyramid row {} (expected a finite number or '?')",
                    token, line
                )
            }
            Self::InvalidSnapExponent(exponent) => {
                write!(
                    f,
                    "Invalid snap exponent: {} (must be in [-32, 32])",
                    exponent
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WallError {}

//! Line-oriented textual pyramid format.
//!
//! ## Purpose
//!
//! This module parses and serializes pyramids in a line-oriented text
//! form: one pyramid row per line, cells comma-separated, `?` for an
//! unknown cell, blank lines ignored:
//!
//! ```text
//! 14
//! ?, ?
//! 5, ?, 3
//! ```
//!
//! ## Design notes
//!
//! * **Shape check**: Row `r` (0-indexed) must hold exactly `r + 1` cells;
//!   anything else is `WallError::MalformedRow`.
//! * **Token check**: A cell is `?` or a finite number. Tokens that parse
//!   to NaN or infinity are rejected like any other garbage, so malformed
//!   input never reaches the solver.
//!
//! ## Non-goals
//!
//! * No streaming input; puzzles are a handful of lines.
//! * No locale-aware number formats; plain `f64`-style literals only.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Display;
use core::fmt::Write as _;
use num_traits::Float;

// Internal dependencies
use crate::math::geometry::cell_count;
use crate::primitives::errors::WallError;

// ============================================================================
// WallInput
// ============================================================================

/// A parsed pyramid: row count plus flat known-value array.
#[derive(Debug, Clone, PartialEq)]
pub struct WallInput<T> {
    /// Number of pyramid rows.
    pub rows: usize,

    /// Known values in flat row-major order; `None` = unknown.
    pub flat: Vec<Option<T>>,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a pyramid from its textual form.
///
/// Blank lines are skipped; the remaining lines are pyramid rows from top
/// to bottom. Returns `WallError::EmptyInput` when no rows are present.
pub fn parse_wall<T: Float>(input: &str) -> Result<WallInput<T>, WallError> {
    let mut flat: Vec<Option<T>> = Vec::new();
    let mut rows = 0;

    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let expected = rows + 1;
        let mut cells = 0;
        for token in line.split(',') {
            cells += 1;
            if cells > expected {
                // Keep counting for the error message below.
                continue;
            }
            flat.push(parse_cell(token, rows + 1)?);
        }

        if cells != expected {
            return Err(WallError::MalformedRow {
                line: rows + 1,
                expected,
                got: cells,
            });
        }
        rows += 1;
    }

    if rows == 0 {
        return Err(WallError::EmptyInput);
    }

    debug_assert_eq!(flat.len(), cell_count(rows));
    Ok(WallInput { rows, flat })
}

/// Parse one cell token: `?` = unknown, otherwise a finite number.
fn parse_cell<T: Float>(token: &str, line: usize) -> Result<Option<T>, WallError> {
    let token = token.trim();
    if token == "?" {
        return Ok(None);
    }

    let value: f64 = token.parse().map_err(|_| WallError::InvalidToken {
        line,
        token: token.to_string(),
    })?;

    if !value.is_finite() {
        return Err(WallError::InvalidToken {
            line,
            token: token.to_string(),
        });
    }

    T::from(value).map(Some).ok_or(WallError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

// ============================================================================
// Serialization
// ============================================================================

/// Serialize a pyramid back to its textual form.
///
/// Inverse of `parse_wall` up to whitespace: one row per line, cells
/// comma-separated, `?` for unknowns, no trailing newline.
///
/// # Panics
///
/// Panics if `flat.len() != cell_count(rows)`.
pub fn format_wall<T: Float + Display>(rows: usize, flat: &[Option<T>]) -> String {
    assert_eq!(
        flat.len(),
        cell_count(rows),
        "flat array length must match the cell count"
    );

    let mut output = String::new();
    let mut index = 0;
    for row in 0..rows {
        if row > 0 {
            output.push('\n');
        }
        for col in 0..=row {
            if col > 0 {
                output.push(',');
            }
            match &flat[index] {
                Some(value) => {
                    let _ = write!(output, "{}", value);
                }
                None => output.push('?'),
            }
            index += 1;
        }
    }
    output
}

//! High-level API for number-pyramid solving.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for describing a pyramid (row count, known cells, solve
//! options), and the immutable `Wall` model it produces.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults; only the row
//!   count is mandatory.
//! * **Validated**: Parameters are checked when `.build()` is called;
//!   setting the same parameter twice is a build-time error.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WallBuilder`] via `WallBuilder::new()` (or
//!    [`WallBuilder::from_text`]).
//! 2. Chain configuration methods (`.rows()`, `.known()`, etc.).
//! 3. Call `.build()` to obtain a [`Wall`], then `.solve()` it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::text::parse_wall;
use crate::engine::executor::{SolveConfig, WallExecutor};
use crate::engine::validator::Validator;
use crate::math::geometry::{cell_count, flatten_index};

// Publicly re-exported types
pub use crate::adapters::text::{format_wall, WallInput};
pub use crate::algorithms::constraints::build_constraints;
pub use crate::algorithms::extraction::{extract_solution, Solution};
pub use crate::engine::output::{to_pyramid_shape, WallSolution};
pub use crate::math::linalg::{reduce_to_rref, FloatLinalg};
pub use crate::primitives::errors::WallError;
pub use crate::primitives::matrix::AugmentedMatrix;

// ============================================================================
// Wall Builder
// ============================================================================

/// Fluent builder for describing a number pyramid.
#[derive(Debug, Clone)]
pub struct WallBuilder<T: Float> {
    /// Number of pyramid rows.
    pub rows: Option<usize>,

    /// Full flat known-value array, if supplied in one piece.
    pub values: Option<Vec<Option<T>>>,

    /// Individually supplied known cells as `(row, col, value)`.
    pub known: Vec<(usize, usize, T)>,

    /// Snapping exponent for the reduced matrix.
    pub snap_exponent: Option<i32>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for WallBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WallBuilder<T> {
    /// Create a new builder with no configuration.
    pub fn new() -> Self {
        Self {
            rows: None,
            values: None,
            known: Vec::new(),
            snap_exponent: None,
            duplicate_param: None,
        }
    }

    /// Create a builder preconfigured from the textual pyramid format
    /// (`"14\n?,?\n5,?,3"`, `?` = unknown).
    pub fn from_text(input: &str) -> Result<Self, WallError> {
        let parsed = parse_wall::<T>(input)?;
        Ok(Self {
            rows: Some(parsed.rows),
            values: Some(parsed.flat),
            known: Vec::new(),
            snap_exponent: None,
            duplicate_param: None,
        })
    }

    /// Set the number of pyramid rows.
    pub fn rows(mut self, rows: usize) -> Self {
        if self.rows.is_some() {
            self.duplicate_param = Some("rows");
        }
        self.rows = Some(rows);
        self
    }

    /// Supply the full flat known-value array at once
    /// (`None` = unknown cell, indexed by `flatten_index`).
    pub fn values(mut self, values: &[Option<T>]) -> Self {
        if self.values.is_some() {
            self.duplicate_param = Some("values");
        }
        self.values = Some(values.to_vec());
        self
    }

    /// Pin one cell to a known value. May be called repeatedly; cells
    /// pinned here override entries of a `values` array.
    pub fn known(mut self, row: usize, col: usize, value: T) -> Self {
        self.known.push((row, col, value));
        self
    }

    /// Snap the reduced matrix to multiples of `2^exponent` before
    /// extraction; `-4` snaps to a 1/16 grid.
    pub fn snap_exponent(mut self, exponent: i32) -> Self {
        if self.snap_exponent.is_some() {
            self.duplicate_param = Some("snap_exponent");
        }
        self.snap_exponent = Some(exponent);
        self
    }

    /// Validate the configuration and build the pyramid model.
    pub fn build(self) -> Result<Wall<T>, WallError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(WallError::DuplicateParameter { parameter });
        }

        let rows = self.rows.ok_or(WallError::InvalidRows(0))?;
        Validator::validate_rows(rows)?;

        let mut flat = match self.values {
            Some(values) => values,
            None => vec![None; cell_count(rows)],
        };
        Validator::validate_flat(rows, &flat)?;

        for (row, col, value) in &self.known {
            Validator::validate_cell(*row, *col)?;
            if *row >= rows {
                return Err(WallError::InvalidCellIndex {
                    row: *row,
                    col: *col,
                });
            }
            flat[flatten_index(*row, *col)] = Some(*value);
        }
        // Re-check finiteness: known() entries may have introduced values.
        Validator::validate_flat(rows, &flat)?;

        if let Some(exponent) = self.snap_exponent {
            Validator::validate_snap_exponent(exponent)?;
        }

        Ok(Wall {
            rows,
            flat,
            config: SolveConfig {
                snap_exponent: self.snap_exponent,
            },
        })
    }
}

// ============================================================================
// Wall Model
// ============================================================================

/// An immutable, validated number pyramid ready to solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall<T: Float> {
    rows: usize,
    flat: Vec<Option<T>>,
    config: SolveConfig,
}

impl<T: Float> Wall<T> {
    /// Number of pyramid rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The flat known-value array.
    #[inline]
    pub fn flat(&self) -> &[Option<T>] {
        &self.flat
    }
}

impl<T: FloatLinalg> Wall<T> {
    /// Parse and build a pyramid from the textual format in one step.
    pub fn from_text(input: &str) -> Result<Self, WallError> {
        WallBuilder::from_text(input)?.build()
    }

    /// Compute which cells are uniquely determined.
    ///
    /// Underdetermined cells stay unknown in the result; a contradictory
    /// puzzle is reported through the solution's `inconsistent` flag, not
    /// as an error.
    pub fn solve(&self) -> Result<WallSolution<T>, WallError> {
        WallExecutor::run(self.rows, &self.flat, &self.config)
    }
}

impl<T: Float + core::fmt::Display> Wall<T> {
    /// Serialize the pyramid back to the textual format.
    pub fn to_text(&self) -> String {
        format_wall(self.rows, &self.flat)
    }
}

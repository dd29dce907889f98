//! # Zahlenmauer — Number-Pyramid Solver for Rust
//!
//! A solver for "Zahlenmauer" (number wall / number pyramid) puzzles: a
//! triangular arrangement of numbers in which every cell equals the sum of
//! the two cells directly beneath it.
//!
//! ## What does it solve?
//!
//! Given a pyramid where only some cells are known, the solver computes
//! which of the missing cells are *uniquely determined* by the structure
//! and the known values. Cells the constraints do not pin down stay
//! unknown; contradictory inputs are reported as having no solution.
//!
//! ```text
//!       14                 14
//!     ?    ?      →      8    6
//!   5    ?    3        5    3    3
//! ```
//!
//! **How it works:**
//!
//! 1. Every cell becomes a variable; every "cell = sum of the two below"
//!    relation and every known value becomes a linear equation.
//! 2. The augmented matrix is reduced to reduced row-echelon form (RREF)
//!    via Gauss–Jordan elimination with partial pivoting.
//! 3. Rows of the reduced matrix with exactly one nonzero coefficient pin
//!    one cell each; a `0 = 1` row means the puzzle is contradictory.
//!
//! ## Quick Start
//!
//! ```rust
//! use zahlenmauer_rs::prelude::*;
//!
//! // Row 0 is the top of the pyramid; `None` marks an unknown cell.
//! let wall = WallBuilder::new()
//!     .rows(3)
//!     .values(&[Some(14.0), None, None, Some(5.0), None, Some(3.0)])
//!     .build()?;
//!
//! let solution = wall.solve()?;
//! assert!(!solution.is_inconsistent());
//! assert_eq!(solution.values()[1], Some(8.0));
//! assert_eq!(solution.values()[2], Some(6.0));
//! assert_eq!(solution.values()[4], Some(3.0));
//! # Result::<(), WallError>::Ok(())
//! ```
//!
//! ### Text format
//!
//! The builder also accepts a line-oriented text form: one pyramid row per
//! line, cells comma-separated, `?` for an unknown cell.
//!
//! ```rust
//! use zahlenmauer_rs::prelude::*;
//!
//! let wall: Wall<f64> = Wall::from_text("14\n?,?\n5,?,3")?;
//! let solution = wall.solve()?;
//! assert_eq!(solution.values()[1], Some(8.0));
//! # Result::<(), WallError>::Ok(())
//! ```
//!
//! ### Pinning individual cells
//!
//! ```rust
//! use zahlenmauer_rs::prelude::*;
//!
//! let wall = WallBuilder::new()
//!     .rows(2)
//!     .known(1, 0, 4.0)
//!     .known(1, 1, 6.0)
//!     .build()?;
//!
//! let solution = wall.solve()?;
//! assert_eq!(solution.values()[0], Some(10.0));
//! # Result::<(), WallError>::Ok(())
//! ```
//!
//! ### Outcomes
//!
//! A solve distinguishes three situations:
//!
//! - **Determined cells** carry `Some(value)` in `WallSolution::values`.
//! - **Underdetermined cells** stay `None` — not an error.
//! - **Contradictory puzzles** (e.g. a cell that is not the sum of the two
//!   beneath it) set `WallSolution::is_inconsistent()`; values are empty.
//!
//! ```rust
//! use zahlenmauer_rs::prelude::*;
//!
//! // 10 is not 4 + 5: no assignment satisfies the pyramid.
//! let wall: Wall<f64> = Wall::from_text("10\n4,5")?;
//! assert!(wall.solve()?.is_inconsistent());
//! # Result::<(), WallError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (an allocator is required).
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! zahlenmauer-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Parameters
//!
//! | Parameter         | Default | Description                                        |
//! |-------------------|---------|----------------------------------------------------|
//! | **rows**          | —       | Number of pyramid rows (required, at least 1)      |
//! | **values**        | all `?` | Full flat known-value array                        |
//! | **known**         | —       | Pin one `(row, col)` cell to a value               |
//! | **snap_exponent** | off     | Snap the reduced matrix to a `2^e` grid (`-4` = sixteenths) |
//!
//! ## References
//!
//! - Reduced row-echelon form via Gauss–Jordan elimination with partial
//!   pivoting; see any introductory linear-algebra text.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the crate error type (`WallError`) and the augmented-matrix
// storage the solving pipeline operates on.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains triangular pyramid geometry, the Gauss–Jordan reduction to
// reduced row-echelon form, and power-of-two value snapping.
mod math;

// Layer 3: Algorithms - puzzle-specific algorithms.
//
// Contains the constraint builder (pyramid structure + known cells →
// augmented matrix) and the solution extractor.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains input validation, the solve pipeline, and result assembly.
mod engine;

// Layer 5: Adapters - external exchange formats.
//
// Contains the line-oriented textual pyramid format.
mod adapters;

// High-level fluent API for pyramid solving.
//
// Provides the `WallBuilder` for configuring and solving pyramids.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard solver prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use zahlenmauer_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        build_constraints, extract_solution, format_wall, reduce_to_rref, to_pyramid_shape,
        AugmentedMatrix, Solution, Wall, WallBuilder, WallError, WallInput, WallSolution,
    };
    pub use crate::math::geometry::{cell_count, flatten_index};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks of the solver:
//! - Triangular pyramid geometry (coordinate flattening, cell counts)
//! - Gauss–Jordan reduction to reduced row-echelon form
//! - Power-of-two value snapping
//!
//! These are reusable functions with no puzzle-specific orchestration.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Triangular coordinate mapping and cell counts.
pub mod geometry;

/// Reduced row-echelon form via the nalgebra backend.
pub mod linalg;

/// Snapping values to a power-of-two grid.
pub mod rounding;

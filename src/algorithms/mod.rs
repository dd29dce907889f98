//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the puzzle-specific algorithmic content:
//! - Translating pyramid structure and known cells into a linear system
//! - Recovering uniquely determined cells from the reduced system
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Building the augmented matrix from pyramid structure and known cells.
pub mod constraints;

/// Extracting determined cells from the reduced matrix.
pub mod extraction;

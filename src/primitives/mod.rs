//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures shared by every
//! other layer:
//! - The crate-wide error type (`WallError`)
//! - Augmented-matrix storage for the linear system
//!
//! These carry no solving logic of their own.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for pyramid solving.
pub mod errors;

/// Augmented-matrix storage.
pub mod matrix;

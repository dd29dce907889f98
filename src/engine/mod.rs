//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates one solve: input validation, the
//! build → reduce → extract pipeline, and assembly of the result.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation for pyramid configuration and data.
pub mod validator;

/// The solve pipeline.
pub mod executor;

/// Solve results and pyramid-shape reshaping.
pub mod output;

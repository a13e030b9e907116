//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the three core operations on validated inputs:
//! - Polynomial evaluation by Horner's method
//! - Least-squares polynomial fitting via the normal equations
//! - Piecewise-linear interpolation with binary-search bracketing
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial evaluation over sequences and arrays.
pub mod evaluate;

/// Least-squares polynomial fitting.
pub mod fit;

/// Piecewise-linear interpolation.
pub mod interp;

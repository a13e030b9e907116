//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the algorithms:
//! - Horner evaluation kernels (scalar and SIMD)
//! - Vandermonde design-matrix and normal-matrix construction
//! - In-place matrix inversion
//!
//! These are reusable mathematical building blocks with no operation-specific
//! validation or shape logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Horner evaluation kernels.
pub mod horner;

/// Vandermonde design-matrix construction and matrix-vector products.
pub mod vandermonde;

/// In-place Gauss-Jordan matrix inversion.
pub mod linalg;

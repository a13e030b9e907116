//! Input validation for polynomial and interpolation operations.
//!
//! ## Purpose
//!
//! This module checks the structural requirements of each operation before
//! any buffer is built: sample lengths, degree bounds, table shapes, and the
//! distinctness of fitting samples.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Well-posedness**: A degree-`d` fit needs at least `d + 1` samples.
//! * **Distinctness**: Duplicate x-samples make the Vandermonde basis
//!   rank-deficient, so they are rejected as singular before any matrix is
//!   built rather than left to a floating-point pivot threshold.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective structural constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not verify that interpolation nodes are increasing;
//!   that is a documented precondition of `interp`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyError;

/// Highest degree the fitter accepts.
///
/// Degree and sample counts are bounded by small integer ranges appropriate
/// to constrained-memory evaluation.
pub const MAX_DEGREE: usize = 255;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for polynomial and interpolation inputs.
///
/// Provides static methods that return `Result<(), PolyError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate paired sample sequences for fitting.
    pub fn validate_samples(x_len: usize, y_len: usize) -> Result<(), PolyError> {
        // Check 1: Non-empty input
        if y_len == 0 {
            return Err(PolyError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x_len != y_len {
            return Err(PolyError::MismatchedInputs { x_len, y_len });
        }

        Ok(())
    }

    /// Validate the requested degree against the sample count.
    pub fn validate_degree(degree: usize, samples: usize) -> Result<(), PolyError> {
        if degree > MAX_DEGREE {
            return Err(PolyError::DegreeTooLarge { degree });
        }

        // Well-posedness: degree + 1 unknowns need at least degree + 1 samples
        if degree + 1 > samples {
            return Err(PolyError::DegreeTooHigh { degree, samples });
        }

        Ok(())
    }

    /// Validate that the x-samples are pairwise distinct.
    ///
    /// Duplicate x-values leave the normal matrix rank-deficient under the
    /// Vandermonde basis; rejecting them here makes the singular case
    /// deterministic instead of depending on inversion round-off.
    pub fn validate_distinct<T: Float>(x: &[T]) -> Result<(), PolyError> {
        let mut sorted: Vec<T> = x.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(PolyError::SingularMatrix);
        }

        Ok(())
    }

    // ========================================================================
    // Table Validation
    // ========================================================================

    /// Validate an interpolation table (`xp` nodes paired with `fp` values).
    pub fn validate_table(xp_len: usize, fp_len: usize) -> Result<(), PolyError> {
        // Check 1: Matching lengths
        if xp_len != fp_len {
            return Err(PolyError::MismatchedTable { xp_len, fp_len });
        }

        // Check 2: At least two nodes to form a segment
        if xp_len < 2 {
            return Err(PolyError::TableTooShort { got: xp_len });
        }

        Ok(())
    }
}

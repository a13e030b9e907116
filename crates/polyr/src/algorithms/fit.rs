//! Least-squares polynomial fitting via the normal equations.
//!
//! ## Purpose
//!
//! This module solves `(XᵗX) β = Xᵗy` for the coefficients of the
//! least-squares polynomial of a given degree through a set of samples,
//! using the Vandermonde design matrix built in the math layer.
//!
//! ## Design notes
//!
//! * **Preconditions**: The caller (the engine validator) has already
//!   established `x.len() == y.len()` and `degree + 1 <= n`; this module only
//!   reports the one failure that cannot be detected up front, a singular
//!   normal matrix.
//! * **Scratch lifetime**: `XT`, `G`, and the length-`(degree + 1)` vectors
//!   are owned buffers scoped to the call and released by drop on every exit
//!   path, including the inversion-failure path.
//! * **Coefficient order**: The solution is reversed in place before return
//!   so index 0 holds the highest-degree coefficient, matching the
//!   evaluation convention.
//!
//! ## Invariants
//!
//! * The returned array has shape `(degree + 1, 1)`.
//! * No partial result is ever returned.
//!
//! ## Non-goals
//!
//! * No weighting, regularization, or covariance/residual reporting.

// External dependencies
use core::result::Result;
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::invert_matrix;
use crate::math::vandermonde::{design_matrix_transposed, mat_vec, normal_matrix};
use crate::primitives::array::Array;
use crate::primitives::errors::PolyError;

// ============================================================================
// Fitting
// ============================================================================

/// Fit a degree-`degree` polynomial to the samples `(x, y)`.
///
/// Returns the coefficients highest-degree-first as a `(degree + 1, 1)`
/// array, or [`PolyError::SingularMatrix`] if the normal-equations matrix
/// cannot be inverted.
pub fn fit<T: Float>(x: &[T], y: &[T], degree: usize) -> Result<Array<T>, PolyError> {
    let n = x.len();
    let d = degree + 1;
    debug_assert_eq!(n, y.len());
    debug_assert!(d <= n);

    // XT is (d, n): row 0 all ones, row j the element-wise product of
    // row j - 1 with x.
    let xt = design_matrix_transposed(x, degree);

    // G = XT · XTᵗ, shape (d, d).
    let mut g = normal_matrix(&xt, degree, n);

    // Invert G in place. A Vandermonde basis over duplicate x-samples is
    // rank-deficient, which surfaces here as a singular normal matrix.
    if !invert_matrix(&mut g, d) {
        return Err(PolyError::SingularMatrix);
    }

    // b = XT · y, then β = G⁻¹ · b.
    let b = mat_vec(&xt, y, d, n);
    let mut beta = mat_vec(&g, &b, d, d);

    // The leading coefficient comes first.
    beta.reverse();

    Array::from_vec(d, 1, beta)
}

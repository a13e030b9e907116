//! Vandermonde design-matrix construction and matrix products.
//!
//! ## Purpose
//!
//! This module builds the flat row-major buffers the fitter feeds into the
//! normal equations: the transposed Vandermonde design matrix `XT`, the
//! normal matrix `G = XT · XTᵗ`, and the matrix-vector products used to form
//! and apply the solution.
//!
//! ## Design notes
//!
//! * **Incremental rows**: Row 0 of `XT` is all ones; row `j` is row `j - 1`
//!   multiplied element-wise by `x`, avoiding explicit exponentiation.
//! * **Sizing**: Every buffer is sized from the actual dimensions in use —
//!   `degree + 1` rows and `n` samples — never from a second, nominally equal
//!   length.
//!
//! ## Invariants
//!
//! * `XT` has shape `(degree + 1, n)` with `XT[j * n + i] = x[i]^j`.
//! * `G` has shape `(degree + 1, degree + 1)` and is symmetric.
//!
//! ## Non-goals
//!
//! * This module does not invert matrices or validate sample shapes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Design Matrix
// ============================================================================

/// Build the transposed Vandermonde matrix `XT` of shape `(degree + 1, n)`.
pub fn design_matrix_transposed<T: Float>(x: &[T], degree: usize) -> Vec<T> {
    let n = x.len();
    let rows = degree + 1;
    let mut xt = vec![T::zero(); rows * n];

    // Top row is all ones
    for entry in xt.iter_mut().take(n) {
        *entry = T::one();
    }

    // Each subsequent row multiplies the previous one by x element-wise
    for j in 1..rows {
        for i in 0..n {
            xt[j * n + i] = xt[(j - 1) * n + i] * x[i];
        }
    }

    xt
}

// ============================================================================
// Normal Matrix
// ============================================================================

/// Form the normal matrix `G = XT · XTᵗ` of shape `(degree + 1, degree + 1)`.
///
/// `G[j * d + i] = Σ_k XT[j * n + k] · XT[i * n + k]`, exploiting that the
/// right factor is simply the transpose of the left.
pub fn normal_matrix<T: Float>(xt: &[T], degree: usize, n: usize) -> Vec<T> {
    let d = degree + 1;
    debug_assert_eq!(xt.len(), d * n);
    let mut g = vec![T::zero(); d * d];

    for j in 0..d {
        for i in 0..d {
            let mut sum = T::zero();
            for k in 0..n {
                sum = sum + xt[j * n + k] * xt[i * n + k];
            }
            g[j * d + i] = sum;
        }
    }

    g
}

// ============================================================================
// Matrix-Vector Product
// ============================================================================

/// Multiply a `(rows, cols)` row-major matrix by a length-`cols` vector.
pub fn mat_vec<T: Float>(a: &[T], v: &[T], rows: usize, cols: usize) -> Vec<T> {
    debug_assert_eq!(a.len(), rows * cols);
    debug_assert_eq!(v.len(), cols);
    let mut out = vec![T::zero(); rows];

    for (i, entry) in out.iter_mut().enumerate() {
        let mut sum = T::zero();
        for j in 0..cols {
            sum = sum + a[i * cols + j] * v[j];
        }
        *entry = sum;
    }

    out
}

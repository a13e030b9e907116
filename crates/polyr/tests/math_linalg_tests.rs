#![cfg(feature = "dev")]
//! Tests for the in-place Gauss-Jordan matrix inversion primitive.
//!
//! These tests verify the inversion contract the polynomial fitter relies on:
//! - Known inverses are recovered in place
//! - Singular matrices are reported via the success flag
//! - Partial pivoting handles zero diagonal entries
//!
//! ## Test Organization
//!
//! 1. **Known Inverses** - Identity, 2x2, 3x3
//! 2. **Singularity** - Rank-deficient inputs return false
//! 3. **Pivoting** - Row swaps rescue zero-diagonal systems

use approx::assert_relative_eq;

use polyr::internals::math::linalg::invert_matrix;

// ============================================================================
// Known Inverse Tests
// ============================================================================

/// Test that the identity matrix is its own inverse.
#[test]
fn test_invert_identity() {
    let mut a = vec![1.0f64, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

    assert!(invert_matrix(&mut a, 3));
    let expected = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    for (got, want) in a.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
}

/// Test a 2x2 matrix against its hand-computed inverse.
#[test]
fn test_invert_2x2() {
    // [[4, 7], [2, 6]] has inverse (1/10) [[6, -7], [-2, 4]]
    let mut a = vec![4.0f64, 7.0, 2.0, 6.0];

    assert!(invert_matrix(&mut a, 2));
    assert_relative_eq!(a[0], 0.6, epsilon = 1e-12);
    assert_relative_eq!(a[1], -0.7, epsilon = 1e-12);
    assert_relative_eq!(a[2], -0.2, epsilon = 1e-12);
    assert_relative_eq!(a[3], 0.4, epsilon = 1e-12);
}

/// Test a 3x3 inverse by multiplying back to the identity.
#[test]
fn test_invert_3x3_product() {
    let original = [2.0f64, 1.0, 1.0, 1.0, 3.0, 2.0, 1.0, 0.0, 0.5];
    let mut a = original.to_vec();

    assert!(invert_matrix(&mut a, 3));

    // original * inverse must be the identity
    for i in 0..3 {
        for j in 0..3 {
            let mut sum = 0.0;
            for k in 0..3 {
                sum += original[i * 3 + k] * a[k * 3 + j];
            }
            let want = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(sum, want, epsilon = 1e-10);
        }
    }
}

// ============================================================================
// Singularity Tests
// ============================================================================

/// Test that a rank-deficient matrix is reported as singular.
#[test]
fn test_invert_singular() {
    // Second row is twice the first
    let mut a = vec![1.0f64, 2.0, 2.0, 4.0];

    assert!(!invert_matrix(&mut a, 2));
}

/// Test that the all-zero matrix is reported as singular.
#[test]
fn test_invert_zero_matrix() {
    let mut a = vec![0.0f64; 9];

    assert!(!invert_matrix(&mut a, 3));
}

/// Test a 1x1 singular case.
#[test]
fn test_invert_1x1() {
    let mut a = vec![4.0f64];
    assert!(invert_matrix(&mut a, 1));
    assert_relative_eq!(a[0], 0.25, epsilon = 1e-12);

    let mut zero = vec![0.0f64];
    assert!(!invert_matrix(&mut zero, 1));
}

// ============================================================================
// Pivoting Tests
// ============================================================================

/// Test that a zero diagonal entry is handled by a row swap.
///
/// Without partial pivoting this invertible matrix would be misreported as
/// singular.
#[test]
fn test_invert_requires_pivot() {
    // [[0, 1], [1, 0]] is a permutation matrix, its own inverse
    let mut a = vec![0.0f64, 1.0, 1.0, 0.0];

    assert!(invert_matrix(&mut a, 2));
    assert_relative_eq!(a[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(a[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(a[2], 1.0, epsilon = 1e-12);
    assert_relative_eq!(a[3], 0.0, epsilon = 1e-12);
}

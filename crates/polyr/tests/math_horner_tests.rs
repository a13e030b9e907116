#![cfg(feature = "dev")]
//! Tests for the Horner evaluation kernels.
//!
//! These tests verify the scalar kernel against hand-computed values and the
//! SIMD batch kernels against the scalar reference, including the remainder
//! lanes that fall outside full SIMD blocks.
//!
//! ## Test Organization
//!
//! 1. **Scalar Kernel** - Hand-computed polynomial values
//! 2. **SIMD Parity** - f32/f64 batch kernels match the scalar path
//! 3. **Degenerate Polynomials** - Single coefficient, negative inputs

use approx::assert_relative_eq;

use polyr::internals::math::horner::{
    horner_batch_scalar, horner_batch_simd_f32, horner_batch_simd_f64, horner_scalar,
};

// ============================================================================
// Scalar Kernel Tests
// ============================================================================

/// Test Horner evaluation against direct computation.
#[test]
fn test_horner_scalar_cubic() {
    // 2x^3 - x^2 + 3x - 5 at x = 2: 16 - 4 + 6 - 5 = 13
    let p = [2.0f64, -1.0, 3.0, -5.0];

    assert_relative_eq!(horner_scalar(&p, 2.0), 13.0, epsilon = 1e-12);
    assert_relative_eq!(horner_scalar(&p, 0.0), -5.0, epsilon = 1e-12);
    assert_relative_eq!(horner_scalar(&p, -1.0), -11.0, epsilon = 1e-12);
}

/// Test that a single coefficient evaluates as a constant.
#[test]
fn test_horner_scalar_constant() {
    assert_relative_eq!(horner_scalar(&[7.5f64], 1234.0), 7.5, epsilon = 1e-12);
}

// ============================================================================
// SIMD Parity Tests
// ============================================================================

/// Test that the f64 SIMD kernel matches the scalar kernel.
///
/// Uses 7 points so one point falls outside the two-lane blocks.
#[test]
fn test_horner_simd_f64_parity() {
    let p = [0.5f64, -2.0, 1.0, 4.0];
    let xs: Vec<f64> = (0..7).map(|i| i as f64 - 3.0).collect();

    let mut scalar_out = vec![0.0; xs.len()];
    let mut simd_out = vec![0.0; xs.len()];
    horner_batch_scalar(&p, &xs, &mut scalar_out);
    horner_batch_simd_f64(&p, &xs, &mut simd_out);

    for (s, v) in scalar_out.iter().zip(&simd_out) {
        assert_relative_eq!(*s, *v, epsilon = 1e-12);
    }
}

/// Test that the f32 SIMD kernel matches the scalar kernel.
///
/// Uses 13 points so five points fall outside the eight-lane block.
#[test]
fn test_horner_simd_f32_parity() {
    let p = [1.5f32, 0.0, -2.5];
    let xs: Vec<f32> = (0..13).map(|i| i as f32 * 0.25 - 1.0).collect();

    let mut scalar_out = vec![0.0; xs.len()];
    let mut simd_out = vec![0.0; xs.len()];
    horner_batch_scalar(&p, &xs, &mut scalar_out);
    horner_batch_simd_f32(&p, &xs, &mut simd_out);

    for (s, v) in scalar_out.iter().zip(&simd_out) {
        assert_relative_eq!(*s, *v, epsilon = 1e-6);
    }
}

/// Test batch evaluation over an empty point set.
#[test]
fn test_horner_batch_empty() {
    let p = [1.0f64, 2.0];
    let xs: [f64; 0] = [];
    let mut out: [f64; 0] = [];

    horner_batch_simd_f64(&p, &xs, &mut out);
}

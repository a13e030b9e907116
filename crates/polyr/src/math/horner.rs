//! Horner Evaluation Kernels
//!
//! ## Purpose
//!
//! This module provides the core kernels for evaluating a polynomial, given as
//! coefficients highest-degree-first, at a batch of points:
//! - A generic scalar kernel for any `Float` type.
//! - SIMD-optimized batch kernels for `f32` and `f64` that vectorize across
//!   evaluation points (the coefficient recurrence itself is serial).
//! - The [`HornerEval`] trait for type-specific dispatch.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Scalar Kernels
// ============================================================================

/// Evaluate a polynomial at a single point by nested multiply-add.
///
/// `p[0]` is the highest-degree coefficient, `p[p.len() - 1]` the constant
/// term. The caller guarantees `p` is non-empty.
#[inline]
pub fn horner_scalar<T: Float>(p: &[T], x: T) -> T {
    let mut y = p[0];
    for &c in &p[1..] {
        y = y * x + c;
    }
    y
}

/// Evaluate a polynomial at every point of `xs`, writing into `out`.
#[inline]
pub fn horner_batch_scalar<T: Float>(p: &[T], xs: &[T], out: &mut [T]) {
    debug_assert_eq!(xs.len(), out.len());
    for (o, &x) in out.iter_mut().zip(xs) {
        *o = horner_scalar(p, x);
    }
}

// ============================================================================
// Specialized Kernels (SIMD)
// ============================================================================

/// SIMD-optimized batch evaluation for `f64` (2 lanes across points).
#[inline]
pub fn horner_batch_simd_f64(p: &[f64], xs: &[f64], out: &mut [f64]) {
    debug_assert_eq!(xs.len(), out.len());
    let n = xs.len();
    let mut i = 0;

    while i + 2 <= n {
        let x = f64x2::new([xs[i], xs[i + 1]]);
        let mut y = f64x2::splat(p[0]);
        for &c in &p[1..] {
            y = y * x + f64x2::splat(c);
        }
        let lanes = y.to_array();
        out[i] = lanes[0];
        out[i + 1] = lanes[1];
        i += 2;
    }

    while i < n {
        out[i] = horner_scalar(p, xs[i]);
        i += 1;
    }
}

/// SIMD-optimized batch evaluation for `f32` (8 lanes across points).
#[inline]
pub fn horner_batch_simd_f32(p: &[f32], xs: &[f32], out: &mut [f32]) {
    debug_assert_eq!(xs.len(), out.len());
    let n = xs.len();
    let mut i = 0;

    while i + 8 <= n {
        let x = f32x8::new([
            xs[i],
            xs[i + 1],
            xs[i + 2],
            xs[i + 3],
            xs[i + 4],
            xs[i + 5],
            xs[i + 6],
            xs[i + 7],
        ]);
        let mut y = f32x8::splat(p[0]);
        for &c in &p[1..] {
            y = y * x + f32x8::splat(c);
        }
        let lanes = y.to_array();
        out[i..i + 8].copy_from_slice(&lanes);
        i += 8;
    }

    while i < n {
        out[i] = horner_scalar(p, xs[i]);
        i += 1;
    }
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific polynomial batch evaluation.
pub trait HornerEval: Float {
    /// Evaluate the polynomial `p` at every point of `xs`, writing into `out`.
    #[inline]
    fn horner_batch(p: &[Self], xs: &[Self], out: &mut [Self]) {
        horner_batch_scalar(p, xs, out)
    }
}

impl HornerEval for f64 {
    #[inline]
    fn horner_batch(p: &[f64], xs: &[f64], out: &mut [f64]) {
        horner_batch_simd_f64(p, xs, out)
    }
}

impl HornerEval for f32 {
    #[inline]
    fn horner_batch(p: &[f32], xs: &[f32], out: &mut [f32]) {
        horner_batch_simd_f32(p, xs, out)
    }
}

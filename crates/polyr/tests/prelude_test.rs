//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types and
//! functions for convenient usage of the API. The prelude should provide a
//! one-stop import for the three operations, the array type, and the error
//! type.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Complete Workflow** - Fit-then-evaluate works with prelude imports
//! 3. **Error Handling** - Error variants can be matched from the prelude

use polyr::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
#[test]
fn test_prelude_imports() {
    let out = polyval(&[1.0, 0.0], &[1.0, 2.0, 3.0]);
    assert!(out.is_ok(), "Basic evaluation should work with prelude imports");

    let arr: Array<f64> = Array::zeros(2, 2);
    assert_eq!(arr.shape(), (2, 2));
}

/// Test that the Sequence trait is usable from the prelude.
#[test]
fn test_prelude_sequence_trait() {
    fn total_len<S: Sequence<f64> + ?Sized>(s: &S) -> usize {
        s.len()
    }

    assert_eq!(total_len(&[1.0f64, 2.0, 3.0]), 3);
    assert_eq!(total_len(&Array::<f64>::zeros(2, 3)), 6);
}

/// Test that the evaluation dispatch trait is nameable from the crate root.
///
/// Downstream generic code needs the bound to wrap `polyval`.
#[test]
fn test_horner_eval_bound_nameable() {
    fn eval_at<T: polyr::HornerEval>(coeffs: &[T], x: T) -> T {
        polyval(coeffs, &[x]).unwrap().get(0).unwrap()
    }

    assert_eq!(eval_at(&[2.0f64, 1.0], 3.0), 7.0);
    assert_eq!(eval_at(&[2.0f32, 1.0], 3.0), 7.0);
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test a complete fit-then-evaluate workflow with prelude imports.
#[test]
fn test_prelude_complete_workflow() {
    let y: Vec<f64> = vec![1.0, 3.0, 5.0, 7.0, 9.0];

    let coeffs = polyfit(&y, 1).expect("Linear fit should succeed");
    let fitted =
        polyval(coeffs.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]).expect("Evaluation should succeed");

    for i in 0..y.len() {
        assert!((fitted.get(i).unwrap() - y[i]).abs() < 1e-8);
    }
}

/// Test error handling with prelude imports.
#[test]
fn test_prelude_error_handling() {
    let y: Vec<f64> = vec![];

    match polyfit(&y, 1) {
        Err(PolyError::EmptyInput) => {}
        other => panic!("Expected EmptyInput, got {:?}", other),
    }
}

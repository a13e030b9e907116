//! # polyr — Polynomial kernels for dense numeric arrays
//!
//! A small, allocation-disciplined numeric kernel offering three stateless
//! operations on one- and two-dimensional numeric arrays:
//!
//! - **Polynomial evaluation** via Horner's method ([`polyval`])
//! - **Least-squares polynomial fitting** via the normal equations on a
//!   Vandermonde design matrix ([`polyfit`], [`polyfit_with_x`])
//! - **Piecewise-linear interpolation** with binary-search bracketing
//!   ([`interp`])
//!
//! ## Quick Start
//!
//! ```rust
//! use polyr::prelude::*;
//!
//! // y = 2x + 3 sampled at x = 0, 1, 2, 3, 4
//! let y: [f64; 5] = [3.0, 5.0, 7.0, 9.0, 11.0];
//!
//! // Fit a line; coefficients come back highest-degree-first.
//! let coeffs = polyfit(&y, 1)?;
//! assert!((coeffs.get(0).unwrap() - 2.0).abs() < 1e-9);
//! assert!((coeffs.get(1).unwrap() - 3.0).abs() < 1e-9);
//!
//! // Evaluate the fitted polynomial at new points.
//! let fitted = polyval(coeffs.as_slice(), &[0.0, 4.0])?;
//! assert!((fitted.get(0).unwrap() - 3.0).abs() < 1e-9);
//!
//! // Piecewise-linear interpolation with boundary fill.
//! let out = interp(&[-5.0, 0.0, 5.0, 10.0, 15.0], &[0.0, 10.0], &[0.0, 100.0], None, None)?;
//! assert_eq!(out.as_slice(), &[0.0, 0.0, 50.0, 100.0, 100.0]);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every entry point returns `Result<Array<T>, PolyError>`. The `?` operator
//! is idiomatic; no operation panics on user input, returns a partial result,
//! or retries.
//!
//! ```rust
//! use polyr::prelude::*;
//!
//! // Two samples cannot support a degree-5 fit.
//! let err = polyfit(&[1.0, 2.0], 5).unwrap_err();
//! assert_eq!(err, PolyError::DegreeTooHigh { degree: 5, samples: 2 });
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for embedded devices and
//! resource-constrained systems. Disable default features to remove the
//! standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polyr = { version = "0.1", default-features = false }
//! ```
//!
//! Degree and sample counts are bounded by small integer ranges appropriate
//! to constrained-memory evaluation; this is not a general-purpose numerical
//! computing library.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error type, dense array, sequence protocol.
mod primitives;

// Layer 2: Math - Horner kernels, Vandermonde construction, matrix inversion.
mod math;

// Layer 3: Algorithms - the three core operations.
mod algorithms;

// Layer 4: Engine - input validation.
mod engine;

// High-level API for polynomial evaluation, fitting, and interpolation.
mod api;

// Standard polyr prelude.
pub mod prelude {
    pub use crate::api::{
        Array, HornerEval, PolyError, Sequence, interp, polyfit, polyfit_with_x, polyval,
    };
}

pub use api::{Array, HornerEval, PolyError, Sequence, interp, polyfit, polyfit_with_x, polyval};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs before the algorithms run. Validation is
//! fail-fast: the first violated requirement aborts the operation with a
//! contextual error and nothing is computed.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

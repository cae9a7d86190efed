//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Forward-mode automatic differentiation (dual numbers)
//! - The log-normal predictive distribution
//!
//! These carry no model-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dual numbers and the `Scalar` abstraction.
pub mod dual;

/// Log-normal distribution helpers.
pub mod lognormal;

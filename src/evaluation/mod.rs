//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer reads results off fitted parameters:
//! - Point estimates, quantiles, and intervals for new range estimates
//! - Fit-quality diagnostics on observed data
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Predictive point estimates, quantiles, and intervals.
pub mod prediction;

/// Log-space fit diagnostics.
pub mod diagnostics;

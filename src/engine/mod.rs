//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit:
//! - Validation of configuration and data
//! - The optimization loop and divergence detection
//! - The immutable fitted model and its query methods
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Optimization loop.
pub mod executor;

/// Fitted model.
pub mod output;

/// Configuration and input validation.
pub mod validator;

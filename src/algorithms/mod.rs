//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core numerical routines of the estimator:
//! - The negative log-posterior and its per-observation terms
//! - First-order optimizers and learning-rate schedules
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// MAP objective.
pub mod objective;

/// Parameter update rules.
pub mod optimizer;

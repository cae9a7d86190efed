//! Input validation for estimator configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for estimator configuration
//! parameters and input data. It checks requirements such as column
//! lengths, positive values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Column validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like confidence in (0, 1).
//! * **Positivity**: Every observation value must be finite and > 0 before the log transform.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the optimization itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EstimatorError;
use crate::primitives::parameters::{Hyperparameters, Parameters};

/// Upper bound on the iteration budget.
pub const MAX_ITERATIONS: usize = 1_000_000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for estimator configuration and input data.
///
/// Provides static methods returning `Result<(), EstimatorError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate `(low, high, actual)` columns.
    pub fn validate_columns<T: Float>(
        low: &[T],
        high: &[T],
        actual: &[T],
    ) -> Result<(), EstimatorError> {
        // Check 1: Non-empty columns
        if low.is_empty() && high.is_empty() && actual.is_empty() {
            return Err(EstimatorError::EmptyInput);
        }

        // Check 2: Matching lengths
        if low.len() != high.len() || low.len() != actual.len() {
            return Err(EstimatorError::MismatchedInputs {
                low_len: low.len(),
                high_len: high.len(),
                actual_len: actual.len(),
            });
        }

        // Check 3: Finite and strictly positive
        for (field, column) in [("low", low), ("high", high), ("actual", actual)] {
            for (index, &val) in column.iter().enumerate() {
                Self::validate_positive(val, index, field)?;
            }
        }

        Ok(())
    }

    /// Validate a single observation value.
    pub fn validate_positive<T: Float>(
        val: T,
        index: usize,
        field: &'static str,
    ) -> Result<(), EstimatorError> {
        if !val.is_finite() || val <= T::zero() {
            return Err(EstimatorError::NonPositiveValue {
                index,
                field,
                value: val.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the confidence level of a quantile or interval.
    pub fn validate_confidence<T: Float>(level: T) -> Result<(), EstimatorError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(EstimatorError::InvalidConfidence(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the base learning rate.
    pub fn validate_learning_rate<T: Float>(rate: T) -> Result<(), EstimatorError> {
        if !rate.is_finite() || rate <= T::zero() {
            return Err(EstimatorError::InvalidLearningRate(
                rate.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of optimizer iterations.
    ///
    /// # Notes
    ///
    /// * At least one iteration is required.
    /// * Maximum of [`MAX_ITERATIONS`] to bound computation.
    pub fn validate_iterations(iterations: usize) -> Result<(), EstimatorError> {
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(EstimatorError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate prior hyperparameters.
    ///
    /// `alpha` must be > 0; `beta` and both precision multipliers must be >= 0
    /// (zero gives a flat prior on the corresponding term).
    pub fn validate_hyperparameters(hyper: &Hyperparameters) -> Result<(), EstimatorError> {
        if !hyper.alpha.is_finite() || hyper.alpha <= 0.0 {
            return Err(EstimatorError::InvalidHyperparameter {
                name: "alpha",
                value: hyper.alpha,
            });
        }

        for (name, value) in [
            ("beta", hyper.beta),
            ("lambda_theta", hyper.lambda_theta),
            ("lambda_zeta", hyper.lambda_zeta),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EstimatorError::InvalidHyperparameter { name, value });
            }
        }

        Ok(())
    }

    /// Validate the optimizer starting point.
    pub fn validate_initial(params: &Parameters) -> Result<(), EstimatorError> {
        for (name, value) in [
            ("theta_high", params.theta_high),
            ("theta_low", params.theta_low),
            ("zeta", params.zeta),
            ("rho", params.rho),
        ] {
            if !value.is_finite() {
                return Err(EstimatorError::InvalidInitialValue { name, value });
            }
        }

        // ln(tau) is undefined at rho = 0
        if params.rho == 0.0 {
            return Err(EstimatorError::InvalidInitialValue {
                name: "rho",
                value: params.rho,
            });
        }

        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), EstimatorError> {
        if let Some(parameter) = duplicate_param {
            return Err(EstimatorError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

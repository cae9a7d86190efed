//! Error types for estimator configuration, fitting, and prediction.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate. Each variant names one failure and carries the
//! offending value so that callers can report it without re-inspecting input.
//!
//! ## Key concepts
//!
//! * **Invalid input**: malformed or out-of-domain data and configuration.
//!   Always detected before any computation starts.
//! * **Numerical divergence**: the optimizer produced a non-finite objective
//!   or parameter. Carries the last finite iterate for diagnosis.
//!
//! ## Non-goals
//!
//! * This module does not retry or recover; both kinds are fatal to the call.

// External dependencies
use thiserror::Error;

// Internal dependencies
use crate::primitives::parameters::Parameters;

/// Errors raised while configuring, fitting, or querying an estimator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// The dataset contains no observations.
    #[error("Input dataset is empty")]
    EmptyInput,

    /// Column inputs have different lengths.
    #[error("Length mismatch: low has {low_len} values, high has {high_len}, actual has {actual_len}")]
    MismatchedInputs {
        /// Length of the `low` column.
        low_len: usize,
        /// Length of the `high` column.
        high_len: usize,
        /// Length of the `actual` column.
        actual_len: usize,
    },

    /// An observation value is zero, negative, or non-finite.
    #[error("Invalid {field}[{index}]={value} (must be finite and > 0)")]
    NonPositiveValue {
        /// Position of the offending observation.
        index: usize,
        /// Which value of the observation failed (`low`, `high`, `actual`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level: {0} (must be > 0 and < 1)")]
    InvalidConfidence(f64),

    /// Learning rate is not a finite positive number.
    #[error("Invalid learning rate: {0} (must be > 0 and finite)")]
    InvalidLearningRate(f64),

    /// Iteration count outside the accepted range.
    #[error("Invalid iterations: {0} (must be in [1, 1000000])")]
    InvalidIterations(usize),

    /// A prior hyperparameter is out of its domain.
    #[error("Invalid hyperparameter {name}={value}")]
    InvalidHyperparameter {
        /// Hyperparameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A starting parameter value is non-finite or otherwise unusable.
    #[error("Invalid initial value {name}={value}")]
    InvalidInitialValue {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A builder setting was configured more than once.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the duplicated setting.
        parameter: &'static str,
    },

    /// The query drives the predictive distribution out of range
    /// (point estimate overflowed or spread is not positive).
    #[error("Predictive distribution is undefined: point={point}, sigma={sigma}")]
    UndefinedPredictive {
        /// Point estimate of the query.
        point: f64,
        /// Log-space spread of the model.
        sigma: f64,
    },

    /// The objective or a parameter became NaN or infinite during optimization.
    #[error("Numerical divergence at iteration {iteration}: objective or parameters became non-finite")]
    NumericalDivergence {
        /// Iteration at which the non-finite value appeared.
        iteration: usize,
        /// Last iterate whose objective and parameters were all finite.
        last_finite: Option<Parameters>,
    },
}

impl EstimatorError {
    /// Whether this error reports malformed or out-of-domain input.
    pub fn is_invalid_input(&self) -> bool {
        !self.is_divergence()
    }

    /// Whether this error reports a numerical divergence during fitting.
    pub fn is_divergence(&self) -> bool {
        matches!(self, EstimatorError::NumericalDivergence { .. })
    }
}

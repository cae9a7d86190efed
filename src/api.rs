//! High-level API for range-estimate fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring priors and the optimizer, producing a
//! validated [`MapEstimator`] that fits observations into a [`FittedModel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting the same parameter twice is reported at build time.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`EstimatorBuilder`] via `RangeFit::new()`.
//! 2. Chain configuration methods (`.iterations()`, `.learning_rate()`, etc.).
//! 3. Call `.build()` to get a [`MapEstimator`], then `.fit(&observations)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::validator::Validator;
use crate::primitives::observation::LogDataset;

// Publicly re-exported types
pub use crate::algorithms::optimizer::{LearningRateSchedule, Optimizer};
pub use crate::engine::output::FittedModel;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::evaluation::prediction::{Prediction, PredictionInterval};
pub use crate::math::lognormal::LogNormalPredictive;
pub use crate::primitives::errors::EstimatorError;
pub use crate::primitives::observation::Observation;
pub use crate::primitives::parameters::{Hyperparameters, N_PARAMS, Parameters};

/// Default number of optimizer updates.
pub const DEFAULT_ITERATIONS: usize = 5000;

/// Default base step size.
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the estimator.
#[derive(Debug, Clone, Default)]
pub struct EstimatorBuilder {
    /// Gamma prior shape on the precision.
    pub alpha: Option<f64>,

    /// Gamma prior rate on the precision.
    pub beta: Option<f64>,

    /// Prior precision multiplier for both regression weights.
    pub lambda_theta: Option<f64>,

    /// Prior precision multiplier for `zeta`.
    pub lambda_zeta: Option<f64>,

    /// Number of optimizer updates.
    pub iterations: Option<usize>,

    /// Base step size.
    pub learning_rate: Option<f64>,

    /// Update rule (default: Adam).
    pub optimizer: Option<Optimizer>,

    /// Step-size schedule (default: LinearDecay).
    pub schedule: Option<LearningRateSchedule>,

    /// Optimizer starting point.
    pub initial_parameters: Option<Parameters>,

    /// Whether `zeta` is optimized (default: true).
    pub heteroscedastic: Option<bool>,

    /// Record the objective at every iteration.
    pub record_trace: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl EstimatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    fn set<V>(slot: &mut Option<V>, value: V, name: &'static str, dup: &mut Option<&'static str>) {
        if slot.is_some() {
            *dup = Some(name);
        }
        *slot = Some(value);
    }

    /// Set all four prior hyperparameters at once.
    pub fn hyperparameters(mut self, hyper: Hyperparameters) -> Self {
        Self::set(&mut self.alpha, hyper.alpha, "alpha", &mut self.duplicate_param);
        Self::set(&mut self.beta, hyper.beta, "beta", &mut self.duplicate_param);
        Self::set(
            &mut self.lambda_theta,
            hyper.lambda_theta,
            "lambda_theta",
            &mut self.duplicate_param,
        );
        Self::set(
            &mut self.lambda_zeta,
            hyper.lambda_zeta,
            "lambda_zeta",
            &mut self.duplicate_param,
        );
        self
    }

    /// Set the Gamma prior shape on the precision.
    pub fn alpha(mut self, alpha: f64) -> Self {
        Self::set(&mut self.alpha, alpha, "alpha", &mut self.duplicate_param);
        self
    }

    /// Set the Gamma prior rate on the precision.
    pub fn beta(mut self, beta: f64) -> Self {
        Self::set(&mut self.beta, beta, "beta", &mut self.duplicate_param);
        self
    }

    /// Set the prior precision multiplier for the regression weights.
    pub fn lambda_theta(mut self, lambda: f64) -> Self {
        Self::set(
            &mut self.lambda_theta,
            lambda,
            "lambda_theta",
            &mut self.duplicate_param,
        );
        self
    }

    /// Set the prior precision multiplier for `zeta`.
    pub fn lambda_zeta(mut self, lambda: f64) -> Self {
        Self::set(
            &mut self.lambda_zeta,
            lambda,
            "lambda_zeta",
            &mut self.duplicate_param,
        );
        self
    }

    /// Set the number of optimizer updates.
    pub fn iterations(mut self, iterations: usize) -> Self {
        Self::set(
            &mut self.iterations,
            iterations,
            "iterations",
            &mut self.duplicate_param,
        );
        self
    }

    /// Set the base learning rate.
    pub fn learning_rate(mut self, rate: f64) -> Self {
        Self::set(
            &mut self.learning_rate,
            rate,
            "learning_rate",
            &mut self.duplicate_param,
        );
        self
    }

    /// Set the update rule.
    pub fn optimizer(mut self, optimizer: Optimizer) -> Self {
        Self::set(
            &mut self.optimizer,
            optimizer,
            "optimizer",
            &mut self.duplicate_param,
        );
        self
    }

    /// Set the learning-rate schedule.
    pub fn schedule(mut self, schedule: LearningRateSchedule) -> Self {
        Self::set(
            &mut self.schedule,
            schedule,
            "schedule",
            &mut self.duplicate_param,
        );
        self
    }

    /// Set the optimizer starting point (default `0.5, 0.5, 0.01, 0.01`).
    pub fn initial_parameters(mut self, params: Parameters) -> Self {
        Self::set(
            &mut self.initial_parameters,
            params,
            "initial_parameters",
            &mut self.duplicate_param,
        );
        self
    }

    /// Optimize `zeta` (true, default) or pin it at 0 for an ordinary
    /// log-linear regression baseline (false).
    pub fn heteroscedastic(mut self, enabled: bool) -> Self {
        Self::set(
            &mut self.heteroscedastic,
            enabled,
            "heteroscedastic",
            &mut self.duplicate_param,
        );
        self
    }

    /// Keep the objective value of every iteration in the fitted model.
    pub fn record_trace(mut self) -> Self {
        Self::set(
            &mut self.record_trace,
            true,
            "record_trace",
            &mut self.duplicate_param,
        );
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<MapEstimator, EstimatorError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = Hyperparameters::default();
        let hyperparameters = Hyperparameters {
            alpha: self.alpha.unwrap_or(defaults.alpha),
            beta: self.beta.unwrap_or(defaults.beta),
            lambda_theta: self.lambda_theta.unwrap_or(defaults.lambda_theta),
            lambda_zeta: self.lambda_zeta.unwrap_or(defaults.lambda_zeta),
        };
        Validator::validate_hyperparameters(&hyperparameters)?;

        let iterations = self.iterations.unwrap_or(DEFAULT_ITERATIONS);
        Validator::validate_iterations(iterations)?;

        let learning_rate = self.learning_rate.unwrap_or(DEFAULT_LEARNING_RATE);
        Validator::validate_learning_rate(learning_rate)?;

        let initial = self.initial_parameters.unwrap_or_default();
        Validator::validate_initial(&initial)?;

        Ok(MapEstimator {
            config: FitConfig {
                hyperparameters,
                iterations,
                learning_rate,
                optimizer: self.optimizer.unwrap_or_default(),
                schedule: self.schedule.unwrap_or_default(),
                initial,
                heteroscedastic: self.heteroscedastic.unwrap_or(true),
                record_trace: self.record_trace.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// Validated estimator, ready to fit datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEstimator {
    config: FitConfig,
}

impl MapEstimator {
    /// Resolved configuration.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Fit the model to `observations`.
    pub fn fit(&self, observations: &[Observation]) -> Result<FittedModel, EstimatorError> {
        let data = LogDataset::from_observations(observations)?;
        let outcome = FitExecutor::run(&data, &self.config)?;

        Ok(FittedModel::new(
            outcome.parameters,
            outcome.objective,
            outcome.iterations,
            data.len(),
            self.config.hyperparameters,
            self.config.heteroscedastic,
            outcome.trace,
        ))
    }

    /// Fit the model to parallel `low`, `high`, `actual` columns.
    pub fn fit_columns<T: Float>(
        &self,
        low: &[T],
        high: &[T],
        actual: &[T],
    ) -> Result<FittedModel, EstimatorError> {
        Validator::validate_columns(low, high, actual)?;

        let observations: Vec<Observation> = low
            .iter()
            .zip(high)
            .zip(actual)
            .map(|((&l, &h), &a)| {
                Observation::new(
                    l.to_f64().unwrap_or(f64::NAN),
                    h.to_f64().unwrap_or(f64::NAN),
                    a.to_f64().unwrap_or(f64::NAN),
                )
            })
            .collect();

        self.fit(&observations)
    }

    /// Negative log-posterior of `observations` at `params` under this configuration.
    pub fn objective(
        &self,
        observations: &[Observation],
        params: &Parameters,
    ) -> Result<f64, EstimatorError> {
        let data = LogDataset::from_observations(observations)?;
        let objective = Objective::new(
            &data,
            &self.config.hyperparameters,
            self.config.heteroscedastic,
        );
        Ok(objective.value(params))
    }

    /// Objective value and its gradient with respect to `(theta_high, theta_low, zeta, rho)`.
    pub fn objective_and_gradient(
        &self,
        observations: &[Observation],
        params: &Parameters,
    ) -> Result<(f64, [f64; N_PARAMS]), EstimatorError> {
        let data = LogDataset::from_observations(observations)?;
        let objective = Objective::new(
            &data,
            &self.config.hyperparameters,
            self.config.heteroscedastic,
        );
        Ok(objective.value_and_gradient(params))
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Fit with explicit hyperparameters, iteration budget, and learning rate,
/// using the default optimizer and schedule.
pub fn fit(
    observations: &[Observation],
    hyperparameters: Hyperparameters,
    iterations: usize,
    learning_rate: f64,
) -> Result<FittedModel, EstimatorError> {
    EstimatorBuilder::new()
        .hyperparameters(hyperparameters)
        .iterations(iterations)
        .learning_rate(learning_rate)
        .build()?
        .fit(observations)
}

/// Point estimate and quantile at `confidence` for a new `(low, high)` estimate.
pub fn predict(
    model: &FittedModel,
    low: f64,
    high: f64,
    confidence: f64,
) -> Result<Prediction, EstimatorError> {
    model.predict(low, high, confidence)
}

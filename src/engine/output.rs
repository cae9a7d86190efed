//! Fitted model returned by a successful fit.
//!
//! ## Purpose
//!
//! This module defines `FittedModel`, the immutable result of MAP fitting.
//! It carries the frozen parameters and fit metadata, and answers
//! prediction queries for new range estimates.
//!
//! ## Invariants
//!
//! * Parameters are finite and `rho != 0`, so `sigma = 1/|rho|` is finite and positive.
//! * Every query is validated before any computation.

use core::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::prediction::{self, Prediction, PredictionInterval};
use crate::math::lognormal::LogNormalPredictive;
use crate::primitives::errors::EstimatorError;
use crate::primitives::observation::{LogDataset, Observation};
use crate::primitives::parameters::{Hyperparameters, Parameters};

/// Immutable result of a MAP fit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FittedModel {
    /// Frozen parameters.
    pub parameters: Parameters,

    /// Objective at the frozen parameters.
    pub objective: f64,

    /// Number of optimizer updates applied.
    pub iterations: usize,

    /// Number of observations the model was fitted on.
    pub observations: usize,

    /// Hyperparameters used for the fit.
    pub hyperparameters: Hyperparameters,

    /// Whether `zeta` was optimized.
    pub heteroscedastic: bool,

    /// Objective before each update, then the final objective (empty unless recorded).
    pub trace: Vec<f64>,
}

impl FittedModel {
    /// Wrap fitted parameters.
    pub fn new(
        parameters: Parameters,
        objective: f64,
        iterations: usize,
        observations: usize,
        hyperparameters: Hyperparameters,
        heteroscedastic: bool,
        trace: Vec<f64>,
    ) -> Self {
        Self {
            parameters,
            objective,
            iterations,
            observations,
            hyperparameters,
            heteroscedastic,
            trace,
        }
    }

    /// Log-space standard deviation of the predictive, `1 / |rho|`.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.parameters.sigma()
    }

    /// Whether `|zeta| < tolerance`, i.e. the range width carries no uncertainty information.
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.parameters.zeta.abs() < tolerance
    }

    /// Median outcome for a new `(low, high)` estimate.
    pub fn point_estimate(&self, low: f64, high: f64) -> Result<f64, EstimatorError> {
        prediction::point_estimate(&self.parameters, low, high)
    }

    /// Point estimate and the quantile at `confidence` for a new `(low, high)` estimate.
    pub fn predict(
        &self,
        low: f64,
        high: f64,
        confidence: f64,
    ) -> Result<Prediction, EstimatorError> {
        Validator::validate_confidence(confidence)?;
        prediction::predict(&self.parameters, low, high, confidence)
    }

    /// Predict every `(low, high)` pair at the same confidence.
    ///
    /// Fails on the first invalid pair.
    pub fn predict_many(
        &self,
        ranges: &[(f64, f64)],
        confidence: f64,
    ) -> Result<Vec<Prediction>, EstimatorError> {
        Validator::validate_confidence(confidence)?;
        ranges
            .iter()
            .map(|&(low, high)| prediction::predict(&self.parameters, low, high, confidence))
            .collect()
    }

    /// Central interval covering `level` of the predictive mass.
    pub fn interval(
        &self,
        low: f64,
        high: f64,
        level: f64,
    ) -> Result<PredictionInterval, EstimatorError> {
        Validator::validate_confidence(level)?;
        prediction::interval(&self.parameters, low, high, level)
    }

    /// Full predictive distribution for a new `(low, high)` estimate.
    pub fn predictive(&self, low: f64, high: f64) -> Result<LogNormalPredictive, EstimatorError> {
        prediction::predictive(&self.parameters, low, high)
    }

    /// Fit-quality diagnostics on `observations` with coverage checked at `level`.
    pub fn diagnostics(
        &self,
        observations: &[Observation],
        level: f64,
    ) -> Result<Diagnostics, EstimatorError> {
        Validator::validate_confidence(level)?;
        let data = LogDataset::from_observations(observations)?;
        Ok(Diagnostics::compute(&data, &self.parameters, level))
    }
}

impl Display for FittedModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations: {}", self.observations)?;
        writeln!(f, "  Iterations:   {}", self.iterations)?;
        writeln!(
            f,
            "  Model:        {}",
            if self.heteroscedastic {
                "heteroscedastic"
            } else {
                "homoscedastic"
            }
        )?;
        writeln!(f, "  Objective:    {:.6}", self.objective)?;
        writeln!(f)?;
        writeln!(f, "Parameters:")?;
        writeln!(f, "  theta_high:   {:.6}", self.parameters.theta_high)?;
        writeln!(f, "  theta_low:    {:.6}", self.parameters.theta_low)?;
        writeln!(f, "  zeta:         {:.6}", self.parameters.zeta)?;
        writeln!(f, "  rho:          {:.6}", self.parameters.rho)?;
        write!(f, "  sigma:        {:.6}", self.sigma())
    }
}

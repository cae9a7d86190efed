//! Point and quantile predictions for new range estimates.
//!
//! ## Purpose
//!
//! This module turns fitted parameters and a new `(low, high)` estimate into
//! the log-normal predictive distribution of the outcome, and reads point
//! estimates, quantiles, and central intervals off it.
//!
//! ## Design notes
//!
//! * **Point**: `exp(theta_h ln(high) + theta_l ln(low))`, the median of the predictive.
//! * **Spread**: `sigma = 1 / |rho|`, shared by every query.
//! * **Deterministic**: no sampling anywhere in the prediction path.
//!
//! ## Invariants
//!
//! * For any confidence above 0.5 the quantile exceeds the point estimate.
//! * Every returned quantile is finite.
//!
//! ## Non-goals
//!
//! * This module does not validate confidence levels (done by `engine::validator`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::math::lognormal::LogNormalPredictive;
use crate::primitives::errors::EstimatorError;
use crate::primitives::observation::log_positive;
use crate::primitives::parameters::Parameters;

// ============================================================================
// Output Types
// ============================================================================

/// Point estimate and one upper quantile.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prediction {
    /// Median outcome, `exp(theta_h ln(high) + theta_l ln(low))`.
    pub point_estimate: f64,

    /// Quantile of the predictive distribution at `confidence`.
    pub quantile: f64,

    /// Requested confidence level.
    pub confidence: f64,
}

/// Central interval of the predictive distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PredictionInterval {
    /// Median outcome.
    pub point_estimate: f64,

    /// Quantile at `(1 - level) / 2`.
    pub lower: f64,

    /// Quantile at `(1 + level) / 2`.
    pub upper: f64,

    /// Requested coverage.
    pub level: f64,
}

// ============================================================================
// Prediction Functions
// ============================================================================

/// Median outcome for a new `(low, high)` estimate.
pub fn point_estimate(params: &Parameters, low: f64, high: f64) -> Result<f64, EstimatorError> {
    let l = log_positive(low, 0, "low")?;
    let h = log_positive(high, 0, "high")?;
    Ok((params.theta_high * h + params.theta_low * l).exp())
}

/// Predictive distribution for a new `(low, high)` estimate.
pub fn predictive(
    params: &Parameters,
    low: f64,
    high: f64,
) -> Result<LogNormalPredictive, EstimatorError> {
    let point = point_estimate(params, low, high)?;
    let sigma = params.sigma();
    LogNormalPredictive::new(point, sigma)
        .ok_or(EstimatorError::UndefinedPredictive { point, sigma })
}

/// Point estimate plus the quantile at `confidence`.
pub fn predict(
    params: &Parameters,
    low: f64,
    high: f64,
    confidence: f64,
) -> Result<Prediction, EstimatorError> {
    let dist = predictive(params, low, high)?;
    let quantile = finite_quantile(&dist, confidence)?;
    Ok(Prediction {
        point_estimate: dist.median(),
        quantile,
        confidence,
    })
}

/// Central interval covering `level` of the predictive mass.
pub fn interval(
    params: &Parameters,
    low: f64,
    high: f64,
    level: f64,
) -> Result<PredictionInterval, EstimatorError> {
    let dist = predictive(params, low, high)?;
    let tail = (1.0 - level) / 2.0;
    Ok(PredictionInterval {
        point_estimate: dist.median(),
        lower: finite_quantile(&dist, tail)?,
        upper: finite_quantile(&dist, 1.0 - tail)?,
        level,
    })
}

/// Quantile at `level`, rejected when it overflows.
fn finite_quantile(dist: &LogNormalPredictive, level: f64) -> Result<f64, EstimatorError> {
    let q = dist.quantile(level);
    if !q.is_finite() {
        return Err(EstimatorError::UndefinedPredictive {
            point: dist.median(),
            sigma: dist.sigma(),
        });
    }
    Ok(q)
}

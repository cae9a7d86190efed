//! Fit-quality diagnostics in log-space.
//!
//! ## Purpose
//!
//! This module summarizes how well fitted parameters describe a set of
//! observations: log-space residuals, their RMSE and bias, and the empirical
//! coverage of a predictive quantile.
//!
//! ## Key concepts
//!
//! * **Residual**: `ln(actual) - (theta_h ln(high) + theta_l ln(low))`.
//! * **Coverage**: share of observations whose outcome does not exceed the
//!   predicted quantile at the requested level. A calibrated model gives a
//!   coverage close to the level.
//!
//! ## Non-goals
//!
//! * This module does not refit or cross-validate.

use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::objective::log_mean;
use crate::math::lognormal::LogNormalPredictive;
use crate::primitives::observation::LogDataset;
use crate::primitives::parameters::Parameters;

/// Fit-quality summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    /// Log-space residuals in input order.
    pub residuals: Vec<f64>,

    /// Root mean squared log-space residual.
    pub rmse_log: f64,

    /// Mean log-space residual (positive means outcomes exceed predictions).
    pub bias_log: f64,

    /// Level used for the coverage check.
    pub level: f64,

    /// Share of outcomes at or below the quantile at `level`.
    pub coverage: f64,
}

impl Diagnostics {
    /// Compute diagnostics of `params` on `data` at quantile `level`.
    pub fn compute(data: &LogDataset, params: &Parameters, level: f64) -> Self {
        let residuals: Vec<f64> = data
            .rows()
            .iter()
            .map(|row| row.y - log_mean(params.theta_high, params.theta_low, row))
            .collect();

        let n = residuals.len().max(1) as f64;
        let rmse_log = (residuals.iter().map(|r| r * r).sum::<f64>() / n).sqrt();
        let bias_log = residuals.iter().sum::<f64>() / n;

        let sigma = params.sigma();
        let covered = data
            .rows()
            .iter()
            .filter(|row| {
                let point = log_mean(params.theta_high, params.theta_low, row).exp();
                LogNormalPredictive::new(point, sigma)
                    .is_some_and(|dist| row.y.exp() <= dist.quantile(level))
            })
            .count();

        Self {
            residuals,
            rmse_log,
            bias_log,
            level,
            coverage: covered as f64 / n,
        }
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Diagnostics:")?;
        writeln!(f, "  RMSE (log):   {:.6}", self.rmse_log)?;
        writeln!(f, "  Bias (log):   {:.6}", self.bias_log)?;
        write!(
            f,
            "  Coverage:     {:.4} at level {}",
            self.coverage, self.level
        )
    }
}

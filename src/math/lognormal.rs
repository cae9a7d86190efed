//! Log-normal predictive distribution.
//!
//! ## Purpose
//!
//! This module wraps the log-normal distribution used at prediction time.
//! A fitted model predicts `ln(actual) ~ Normal(ln(point), sigma^2)`, so the
//! outcome itself is log-normal with location `ln(point)` and shape `sigma`.
//!
//! ## Invariants
//!
//! * `point > 0` and `sigma > 0`, both finite.
//! * Quantiles are only requested for levels in (0, 1).

// External dependencies
use statrs::distribution::{Continuous, ContinuousCDF, LogNormal};

/// Log-normal distribution parametrized by its median (`point`) and log-space spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormalPredictive {
    point: f64,
    sigma: f64,
}

impl LogNormalPredictive {
    /// Build from the median and the log-space standard deviation.
    ///
    /// Returns `None` when either argument is non-finite or not positive.
    pub fn new(point: f64, sigma: f64) -> Option<Self> {
        if !point.is_finite() || point <= 0.0 || !sigma.is_finite() || sigma <= 0.0 {
            return None;
        }
        Some(Self { point, sigma })
    }

    fn distribution(&self) -> Option<LogNormal> {
        LogNormal::new(self.point.ln(), self.sigma).ok()
    }

    /// Median of the distribution (the point estimate).
    #[inline]
    pub fn median(&self) -> f64 {
        self.point
    }

    /// Log-space standard deviation.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Mean of the distribution, `point * exp(sigma^2 / 2)`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.point * (0.5 * self.sigma * self.sigma).exp()
    }

    /// Quantile function at `level`.
    pub fn quantile(&self, level: f64) -> f64 {
        match self.distribution() {
            Some(dist) => dist.inverse_cdf(level),
            None => f64::NAN,
        }
    }

    /// Cumulative probability of `value`.
    pub fn cdf(&self, value: f64) -> f64 {
        match self.distribution() {
            Some(dist) => dist.cdf(value),
            None => f64::NAN,
        }
    }

    /// Density at `value`.
    pub fn pdf(&self, value: f64) -> f64 {
        match self.distribution() {
            Some(dist) => dist.pdf(value),
            None => f64::NAN,
        }
    }
}

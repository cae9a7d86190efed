//! Model parameters and prior hyperparameters.
//!
//! ## Purpose
//!
//! This module defines the four-scalar parameter vector optimized during a
//! fit and the fixed hyperparameters of the priors placed on it.
//!
//! ## Key concepts
//!
//! * **Reparametrization**: the precision is stored as `rho` with `tau = rho^2`,
//!   so the optimizer never has to respect a positivity constraint.
//! * **Priors**: Gamma(alpha, beta) on `tau`, Normal priors with precision
//!   `tau * lambda_theta` on both weights and `tau * lambda_zeta` on `zeta`.
//!
//! ## Invariants
//!
//! * Hyperparameters are never mutated while fitting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Parameters
// ============================================================================

/// Number of optimized scalars.
pub const N_PARAMS: usize = 4;

/// Parameter vector `(theta_high, theta_low, zeta, rho)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameters {
    /// Regression weight on log-high.
    pub theta_high: f64,

    /// Regression weight on log-low.
    pub theta_low: f64,

    /// Uncertainty-scaling coefficient. The spread multiplier is `1 + zeta^2 (h - l)`.
    pub zeta: f64,

    /// Square root of the precision (`tau = rho^2`).
    pub rho: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            theta_high: 0.5,
            theta_low: 0.5,
            zeta: 0.01,
            rho: 0.01,
        }
    }
}

impl Parameters {
    /// Build a parameter vector from its components.
    pub fn new(theta_high: f64, theta_low: f64, zeta: f64, rho: f64) -> Self {
        Self {
            theta_high,
            theta_low,
            zeta,
            rho,
        }
    }

    /// Precision of the log-space residual (`rho^2`).
    #[inline]
    pub fn tau(&self) -> f64 {
        self.rho * self.rho
    }

    /// Log-space standard deviation (`1 / |rho|`).
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.rho.abs().recip()
    }

    /// Flatten into optimizer order.
    #[inline]
    pub fn to_array(self) -> [f64; N_PARAMS] {
        [self.theta_high, self.theta_low, self.zeta, self.rho]
    }

    /// Rebuild from optimizer order.
    #[inline]
    pub fn from_array(values: [f64; N_PARAMS]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

// ============================================================================
// Hyperparameters
// ============================================================================

/// Prior hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hyperparameters {
    /// Gamma prior shape on `tau`.
    pub alpha: f64,

    /// Gamma prior rate on `tau`.
    pub beta: f64,

    /// Precision multiplier of the Normal prior on both weights.
    pub lambda_theta: f64,

    /// Precision multiplier of the Normal prior on `zeta`.
    pub lambda_zeta: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            lambda_theta: 1e-3,
            lambda_zeta: 1.0,
        }
    }
}

impl Hyperparameters {
    /// Build hyperparameters from their components.
    pub fn new(alpha: f64, beta: f64, lambda_theta: f64, lambda_zeta: f64) -> Self {
        Self {
            alpha,
            beta,
            lambda_theta,
            lambda_zeta,
        }
    }
}

//! Negative log-posterior of the heteroscedastic log-normal model.
//!
//! ## Purpose
//!
//! This module evaluates the MAP objective minimized during fitting. The
//! objective is written once against the [`Scalar`] trait, so the same code
//! yields a plain value on `f64` and an exact gradient on dual numbers.
//!
//! ## Design notes
//!
//! * **Model**: for log-values `(l, h, y)` the mean is `theta_h h + theta_l l`
//!   and the spread multiplier is `s = 1 + zeta^2 (h - l)`.
//! * **Per-observation term**: `ln(s) + tau / (2 s^2) (y - mu)^2`.
//! * **Priors**: `-((N + 1 + 2 alpha) / 2) ln(tau) + beta tau
//!   + (tau lambda_theta / 2)(theta_h^2 + theta_l^2) + (tau lambda_zeta / 2) zeta^2`.
//!
//! ## Invariants
//!
//! * `tau = rho^2`, so the objective is defined for every real `rho != 0`.
//! * With `zeta = 0` every `s` equals 1 and the objective reduces to a
//!   precision-weighted least-squares fit in log-space.
//!
//! ## Non-goals
//!
//! * This module does not update parameters (see `optimizer`).

// Internal dependencies
use crate::math::dual::{Dual, Scalar};
use crate::primitives::observation::{LogDataset, LogObservation};
use crate::primitives::parameters::{Hyperparameters, N_PARAMS, Parameters};

// ============================================================================
// Model terms
// ============================================================================

/// Spread multiplier `1 + zeta^2 * width`.
#[inline]
pub fn spread<S: Scalar>(zeta: S, width: f64) -> S {
    S::one() + zeta * zeta * S::constant(width)
}

/// Predicted log-mean `theta_h * h + theta_l * l`.
#[inline]
pub fn log_mean<S: Scalar>(theta_high: S, theta_low: S, row: &LogObservation) -> S {
    theta_high * S::constant(row.h) + theta_low * S::constant(row.l)
}

/// Negative log-likelihood contribution of a single observation.
#[inline]
pub fn observation_term<S: Scalar>(params: &[S; N_PARAMS], row: &LogObservation) -> S {
    let [theta_high, theta_low, zeta, rho] = *params;
    let tau = rho * rho;
    let s = spread(zeta, row.width());
    let err = S::constant(row.y) - log_mean(theta_high, theta_low, row);
    s.ln() + tau / (S::constant(2.0) * s * s) * err * err
}

/// Full negative log-posterior.
pub fn negative_log_posterior<S: Scalar>(
    data: &LogDataset,
    hyper: &Hyperparameters,
    params: &[S; N_PARAMS],
) -> S {
    let [theta_high, theta_low, zeta, rho] = *params;
    let tau = rho * rho;
    let n = data.len() as f64;
    let half = S::constant(0.5);

    let likelihood = data
        .rows()
        .iter()
        .fold(S::zero(), |acc, row| acc + observation_term(params, row));

    let tau_prior = S::constant(log_tau_coefficient(n, hyper.alpha)) * tau.ln();
    let weight_prior = half
        * tau
        * S::constant(hyper.lambda_theta)
        * (theta_high * theta_high + theta_low * theta_low);
    let zeta_prior = half * tau * S::constant(hyper.lambda_zeta) * zeta * zeta;

    likelihood - tau_prior + S::constant(hyper.beta) * tau + weight_prior + zeta_prior
}

/// Coefficient of `ln(tau)`: `(N + 1 + 2 alpha) / 2`.
#[inline]
fn log_tau_coefficient(n: f64, alpha: f64) -> f64 {
    (n + 1.0 + 2.0 * alpha) / 2.0
}

// ============================================================================
// Objective
// ============================================================================

/// Objective bound to a dataset and fixed hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct Objective<'a> {
    data: &'a LogDataset,
    hyper: &'a Hyperparameters,
    heteroscedastic: bool,
}

impl<'a> Objective<'a> {
    /// Bind the objective. With `heteroscedastic == false`, `zeta` is treated
    /// as the constant 0 regardless of the parameter value passed in.
    pub fn new(data: &'a LogDataset, hyper: &'a Hyperparameters, heteroscedastic: bool) -> Self {
        Self {
            data,
            hyper,
            heteroscedastic,
        }
    }

    /// Objective value at `params`.
    pub fn value(&self, params: &Parameters) -> f64 {
        let mut values = params.to_array();
        if !self.heteroscedastic {
            values[2] = 0.0;
        }
        negative_log_posterior(self.data, self.hyper, &values)
    }

    /// Objective value and gradient at `params`, via forward-mode differentiation.
    pub fn value_and_gradient(&self, params: &Parameters) -> (f64, [f64; N_PARAMS]) {
        let mut inputs = Dual::<N_PARAMS>::variables(params.to_array());
        if !self.heteroscedastic {
            inputs[2] = Dual::constant(0.0);
        }
        let out = negative_log_posterior(self.data, self.hyper, &inputs);
        (out.value, out.partials)
    }

    /// Per-observation likelihood contributions at `params`, in input order.
    pub fn contributions(&self, params: &Parameters) -> Vec<f64> {
        let mut values = params.to_array();
        if !self.heteroscedastic {
            values[2] = 0.0;
        }
        self.data
            .rows()
            .iter()
            .map(|row| observation_term(&values, row))
            .collect()
    }
}

//! First-order optimizers for the MAP objective.
//!
//! ## Purpose
//!
//! This module implements the parameter update rules applied once per
//! iteration: plain gradient descent and Adam, each driven by a learning-rate
//! schedule.
//!
//! ## Design notes
//!
//! * **Stateful**: Adam keeps first/second moment estimates per parameter;
//!   the state is owned by a single fit call and dropped with it.
//! * **Fixed budget**: no convergence test; the caller decides the iteration count.
//!
//! ## Key concepts
//!
//! * **Adam**: `m = b1 m + (1 - b1) g`, `v = b2 v + (1 - b2) g^2`,
//!   step `lr * m_hat / (sqrt(v_hat) + eps)` with bias-corrected moments.
//! * **Linear decay**: step size falls linearly from `lr` toward zero over the
//!   run. Parameters that enter the objective only through their square
//!   (such as `zeta`) settle at the optimum instead of oscillating around it.
//!
//! ## Invariants
//!
//! * A zero gradient component leaves that parameter unchanged.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the objective or detect divergence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::parameters::N_PARAMS;

// ============================================================================
// Optimizer Selection
// ============================================================================

/// Update rule applied each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Optimizer {
    /// Adam with the usual moment decay rates.
    #[default]
    Adam,

    /// Plain steepest descent: `p -= lr * g`.
    GradientDescent,
}

/// Step-size schedule over the iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LearningRateSchedule {
    /// Same step size on every iteration.
    Constant,

    /// `lr * (1 - t / iterations)` for zero-based iteration `t`.
    #[default]
    LinearDecay,
}

impl LearningRateSchedule {
    /// Step size for zero-based iteration `t` of `total`.
    #[inline]
    pub fn rate(&self, base: f64, t: usize, total: usize) -> f64 {
        match self {
            LearningRateSchedule::Constant => base,
            LearningRateSchedule::LinearDecay => {
                if total == 0 {
                    return base;
                }
                base * (1.0 - t as f64 / total as f64)
            }
        }
    }
}

// ============================================================================
// Optimizer State
// ============================================================================

const ADAM_BETA1: f64 = 0.9;
const ADAM_BETA2: f64 = 0.999;
const ADAM_EPSILON: f64 = 1e-8;

/// Mutable optimizer state for one fit.
#[derive(Debug, Clone)]
pub struct OptimizerState {
    kind: Optimizer,
    m: [f64; N_PARAMS],
    v: [f64; N_PARAMS],
    step: i32,
}

impl OptimizerState {
    /// Fresh state for `kind`.
    pub fn new(kind: Optimizer) -> Self {
        Self {
            kind,
            m: [0.0; N_PARAMS],
            v: [0.0; N_PARAMS],
            step: 0,
        }
    }

    /// Number of updates applied so far.
    pub fn steps(&self) -> usize {
        self.step as usize
    }

    /// Apply one update to `params` in place.
    pub fn update(&mut self, params: &mut [f64; N_PARAMS], grad: &[f64; N_PARAMS], rate: f64) {
        self.step = self.step.saturating_add(1);

        match self.kind {
            Optimizer::GradientDescent => {
                for (p, g) in params.iter_mut().zip(grad.iter()) {
                    *p -= rate * g;
                }
            }
            Optimizer::Adam => {
                let bias1 = 1.0 - ADAM_BETA1.powi(self.step);
                let bias2 = 1.0 - ADAM_BETA2.powi(self.step);

                for i in 0..N_PARAMS {
                    let g = grad[i];
                    self.m[i] = ADAM_BETA1 * self.m[i] + (1.0 - ADAM_BETA1) * g;
                    self.v[i] = ADAM_BETA2 * self.v[i] + (1.0 - ADAM_BETA2) * g * g;

                    let m_hat = self.m[i] / bias1;
                    let v_hat = self.v[i] / bias2;
                    params[i] -= rate * m_hat / (v_hat.sqrt() + ADAM_EPSILON);
                }
            }
        }
    }
}

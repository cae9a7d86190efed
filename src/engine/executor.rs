//! Execution engine for MAP fitting.
//!
//! ## Purpose
//!
//! This module runs the optimization loop that turns a log-space dataset
//! into frozen model parameters. Each iteration evaluates the objective and
//! its gradient, checks for divergence, and applies one optimizer update.
//!
//! ## Design notes
//!
//! * The loop owns its parameter state for the duration of one call; there
//!   is no shared or global state, so independent fits can run in parallel.
//! * Iteration count is fixed by the caller; there is no convergence test.
//! * Objective values are emitted as `tracing` events and optionally recorded.
//!
//! ## Key concepts
//!
//! * **Execution Loop**: Objective + gradient -> divergence check -> update -> repeat.
//! * **Divergence**: any non-finite objective or parameter aborts the fit and
//!   reports the last finite iterate.
//!
//! ## Invariants
//!
//! * Parameters returned in a successful outcome are all finite.
//! * In homoscedastic mode `zeta` stays exactly 0.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not format results.

// External dependencies
use tracing::{debug, trace, warn};

// Internal dependencies
use crate::algorithms::objective::Objective;
use crate::algorithms::optimizer::{LearningRateSchedule, Optimizer, OptimizerState};
use crate::primitives::errors::EstimatorError;
use crate::primitives::observation::LogDataset;
use crate::primitives::parameters::{Hyperparameters, Parameters};

// ============================================================================
// Configuration
// ============================================================================

/// Settings for a single fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    /// Prior hyperparameters.
    pub hyperparameters: Hyperparameters,

    /// Number of optimizer updates.
    pub iterations: usize,

    /// Base step size.
    pub learning_rate: f64,

    /// Update rule.
    pub optimizer: Optimizer,

    /// Step-size schedule.
    pub schedule: LearningRateSchedule,

    /// Starting point.
    pub initial: Parameters,

    /// Whether `zeta` is optimized (false pins it at 0).
    pub heteroscedastic: bool,

    /// Whether to keep the objective value of every iteration.
    pub record_trace: bool,
}

/// Result of a successful fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    /// Final parameters.
    pub parameters: Parameters,

    /// Objective at the final parameters.
    pub objective: f64,

    /// Number of updates applied.
    pub iterations: usize,

    /// Objective before each update followed by the final objective
    /// (empty unless trace recording was requested).
    pub trace: Vec<f64>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the optimization loop.
pub struct FitExecutor;

impl FitExecutor {
    /// Fit `config` to `data`.
    pub fn run(data: &LogDataset, config: &FitConfig) -> Result<FitOutcome, EstimatorError> {
        let objective = Objective::new(data, &config.hyperparameters, config.heteroscedastic);

        let mut current = config.initial;
        if !config.heteroscedastic {
            current.zeta = 0.0;
        }
        let mut values = current.to_array();

        let mut state = OptimizerState::new(config.optimizer);
        let mut trace = if config.record_trace {
            Vec::with_capacity(config.iterations + 1)
        } else {
            Vec::new()
        };
        let mut last_finite: Option<Parameters> = None;

        debug!(
            observations = data.len(),
            iterations = config.iterations,
            learning_rate = config.learning_rate,
            optimizer = ?config.optimizer,
            schedule = ?config.schedule,
            heteroscedastic = config.heteroscedastic,
            "starting MAP fit"
        );

        for t in 0..config.iterations {
            let params = Parameters::from_array(values);
            let (value, grad) = objective.value_and_gradient(&params);

            if !value.is_finite() {
                return Err(Self::diverged(t, value, last_finite));
            }
            last_finite = Some(params);

            trace!(
                iteration = t,
                objective = value,
                theta_high = params.theta_high,
                theta_low = params.theta_low,
                zeta = params.zeta,
                rho = params.rho,
                "iteration"
            );
            if config.record_trace {
                trace.push(value);
            }

            let rate = config.schedule.rate(config.learning_rate, t, config.iterations);
            state.update(&mut values, &grad, rate);

            if values.iter().any(|v| !v.is_finite()) {
                return Err(Self::diverged(t + 1, f64::NAN, last_finite));
            }
        }

        let parameters = Parameters::from_array(values);
        let final_value = objective.value(&parameters);
        if !final_value.is_finite() {
            return Err(Self::diverged(config.iterations, final_value, last_finite));
        }
        if config.record_trace {
            trace.push(final_value);
        }

        debug!(
            objective = final_value,
            theta_high = parameters.theta_high,
            theta_low = parameters.theta_low,
            zeta = parameters.zeta,
            rho = parameters.rho,
            "MAP fit finished"
        );

        Ok(FitOutcome {
            parameters,
            objective: final_value,
            iterations: state.steps(),
            trace,
        })
    }

    fn diverged(
        iteration: usize,
        value: f64,
        last_finite: Option<Parameters>,
    ) -> EstimatorError {
        warn!(iteration, objective = value, "objective diverged");
        EstimatorError::NumericalDivergence {
            iteration,
            last_finite,
        }
    }
}

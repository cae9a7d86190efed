#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use rangefit::internals::algorithms::objective::Objective;
use rangefit::internals::algorithms::optimizer::{LearningRateSchedule, Optimizer};
use rangefit::internals::engine::executor::{FitConfig, FitExecutor};
use rangefit::internals::primitives::errors::EstimatorError;
use rangefit::internals::primitives::observation::{LogDataset, Observation};
use rangefit::internals::primitives::parameters::{Hyperparameters, Parameters};

fn worked_dataset() -> LogDataset {
    let obs: Vec<Observation> = [
        (4.0, 5.0, 17.0),
        (14.0, 18.0, 8.0),
        (4.0, 5.0, 5.0),
        (3.0, 4.0, 3.0),
        (4.0, 5.0, 5.0),
        (3.0, 7.0, 4.0),
        (4.0, 5.0, 9.0),
        (9.0, 10.0, 9.0),
        (6.0, 8.0, 4.0),
        (27.0, 30.0, 27.0),
        (20.0, 25.0, 16.0),
        (23.0, 29.0, 15.0),
        (11.0, 14.0, 7.0),
    ]
    .into_iter()
    .map(Observation::from)
    .collect();
    LogDataset::from_observations(&obs).unwrap()
}

fn config(iterations: usize, learning_rate: f64) -> FitConfig {
    FitConfig {
        hyperparameters: Hyperparameters::default(),
        iterations,
        learning_rate,
        optimizer: Optimizer::Adam,
        schedule: LearningRateSchedule::LinearDecay,
        initial: Parameters::default(),
        heteroscedastic: true,
        record_trace: false,
    }
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_executor_reaches_map_estimate() {
    let data = worked_dataset();
    let outcome = FitExecutor::run(&data, &config(5000, 0.05)).unwrap();

    let p = outcome.parameters;
    assert_eq!(outcome.iterations, 5000);
    assert!(p.is_finite());
    assert_relative_eq!(p.theta_high, 0.6625, epsilon = 1e-3);
    assert_relative_eq!(p.theta_low, 0.2491, epsilon = 1e-3);
    assert!(p.zeta.abs() < 1e-3);
    assert_relative_eq!(p.rho.abs(), 1.7026, epsilon = 1e-3);
    assert_relative_eq!(outcome.objective, -0.514584, epsilon = 1e-4);
    assert!(outcome.trace.is_empty());
}

#[test]
fn test_executor_final_objective_matches_parameters() {
    let data = worked_dataset();
    let cfg = config(500, 0.05);
    let outcome = FitExecutor::run(&data, &cfg).unwrap();

    let objective = Objective::new(&data, &cfg.hyperparameters, true);
    assert_eq!(outcome.objective, objective.value(&outcome.parameters));
}

#[test]
fn test_executor_improves_on_initial_objective() {
    let data = worked_dataset();
    let cfg = FitConfig {
        record_trace: true,
        ..config(2000, 0.05)
    };
    let outcome = FitExecutor::run(&data, &cfg).unwrap();

    assert_eq!(outcome.trace.len(), 2001);
    assert!(outcome.trace.iter().all(|v| v.is_finite()));
    assert_eq!(*outcome.trace.last().unwrap(), outcome.objective);
    assert!(outcome.objective < outcome.trace[0]);
}

#[test]
fn test_executor_single_iteration() {
    let data = worked_dataset();
    let cfg = FitConfig {
        record_trace: true,
        ..config(1, 0.05)
    };
    let outcome = FitExecutor::run(&data, &cfg).unwrap();

    assert_eq!(outcome.iterations, 1);
    assert_eq!(outcome.trace.len(), 2);
    assert_ne!(outcome.parameters, Parameters::default());
}

#[test]
fn test_executor_homoscedastic_pins_zeta() {
    let data = worked_dataset();
    let cfg = FitConfig {
        heteroscedastic: false,
        ..config(5000, 0.05)
    };
    let outcome = FitExecutor::run(&data, &cfg).unwrap();

    assert_eq!(outcome.parameters.zeta, 0.0);
    assert_relative_eq!(outcome.parameters.theta_high, 0.6625, epsilon = 1e-3);
    assert_relative_eq!(outcome.parameters.theta_low, 0.2491, epsilon = 1e-3);
}

#[test]
fn test_executor_is_deterministic() {
    let data = worked_dataset();
    let cfg = config(300, 0.05);
    let a = FitExecutor::run(&data, &cfg).unwrap();
    let b = FitExecutor::run(&data, &cfg).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Divergence Tests
// ============================================================================

#[test]
fn test_executor_reports_divergence() {
    let data = worked_dataset();
    let cfg = FitConfig {
        optimizer: Optimizer::GradientDescent,
        schedule: LearningRateSchedule::Constant,
        ..config(100, 10.0)
    };

    match FitExecutor::run(&data, &cfg) {
        Err(EstimatorError::NumericalDivergence {
            iteration,
            last_finite,
        }) => {
            assert!(iteration < 100);
            let last = last_finite.expect("at least one finite iterate");
            assert!(last.is_finite());
        }
        other => panic!("expected divergence, got {other:?}"),
    }
}

#[test]
fn test_executor_diverges_under_default_schedule() {
    let data = worked_dataset();
    let cfg = FitConfig {
        optimizer: Optimizer::GradientDescent,
        ..config(100, 10.0)
    };
    let err = FitExecutor::run(&data, &cfg).unwrap_err();
    assert!(err.is_divergence());
}

#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use rangefit::internals::algorithms::optimizer::{LearningRateSchedule, Optimizer, OptimizerState};

// ============================================================================
// Schedule Tests
// ============================================================================

#[test]
fn test_constant_schedule() {
    let s = LearningRateSchedule::Constant;
    assert_eq!(s.rate(0.1, 0, 100), 0.1);
    assert_eq!(s.rate(0.1, 99, 100), 0.1);
}

#[test]
fn test_linear_decay_schedule() {
    let s = LearningRateSchedule::LinearDecay;
    assert_relative_eq!(s.rate(0.1, 0, 100), 0.1);
    assert_relative_eq!(s.rate(0.1, 50, 100), 0.05);
    assert_relative_eq!(s.rate(0.1, 99, 100), 0.001, epsilon = 1e-15);
    assert!(s.rate(0.1, 99, 100) > 0.0);
}

#[test]
fn test_defaults() {
    assert_eq!(Optimizer::default(), Optimizer::Adam);
    assert_eq!(LearningRateSchedule::default(), LearningRateSchedule::LinearDecay);
}

// ============================================================================
// Update Tests
// ============================================================================

#[test]
fn test_gradient_descent_step() {
    let mut state = OptimizerState::new(Optimizer::GradientDescent);
    let mut params = [1.0, 2.0, 3.0, 4.0];
    state.update(&mut params, &[1.0, -2.0, 0.5, 0.0], 0.1);

    assert_relative_eq!(params[0], 0.9, epsilon = 1e-12);
    assert_relative_eq!(params[1], 2.2, epsilon = 1e-12);
    assert_relative_eq!(params[2], 2.95, epsilon = 1e-12);
    assert_eq!(params[3], 4.0);
    assert_eq!(state.steps(), 1);
}

#[test]
fn test_adam_first_step_has_learning_rate_magnitude() {
    // Bias correction makes the first Adam step lr * sign(g)
    let mut state = OptimizerState::new(Optimizer::Adam);
    let mut params = [0.0; 4];
    state.update(&mut params, &[3.0, -0.01, 250.0, -7.0], 0.05);

    assert_relative_eq!(params[0], -0.05, max_relative = 1e-6);
    assert_relative_eq!(params[1], 0.05, max_relative = 1e-5);
    assert_relative_eq!(params[2], -0.05, max_relative = 1e-6);
    assert_relative_eq!(params[3], 0.05, max_relative = 1e-6);
}

#[test]
fn test_zero_gradient_leaves_parameters_unchanged() {
    for kind in [Optimizer::Adam, Optimizer::GradientDescent] {
        let mut state = OptimizerState::new(kind);
        let mut params = [0.5, 0.5, 0.01, 0.01];
        for _ in 0..10 {
            state.update(&mut params, &[0.0; 4], 0.05);
        }
        assert_eq!(params, [0.5, 0.5, 0.01, 0.01]);
        assert_eq!(state.steps(), 10);
    }
}

#[test]
fn test_adam_minimizes_quadratic() {
    // f(p) = sum (p_i - c_i)^2
    let target = [1.0, -2.0, 0.5, 3.0];
    let mut state = OptimizerState::new(Optimizer::Adam);
    let mut params = [0.0; 4];
    let total = 2000;

    for t in 0..total {
        let grad: [f64; 4] = std::array::from_fn(|i| 2.0 * (params[i] - target[i]));
        let rate = LearningRateSchedule::LinearDecay.rate(0.05, t, total);
        state.update(&mut params, &grad, rate);
    }

    for i in 0..4 {
        assert_relative_eq!(params[i], target[i], epsilon = 1e-3);
    }
}

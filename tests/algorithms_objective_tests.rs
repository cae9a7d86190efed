#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use rangefit::internals::algorithms::objective::{Objective, log_mean, spread};
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

// ============================================================================
// Model Term Tests
// ============================================================================

#[test]
fn test_spread_increases_with_width() {
    let zeta = 0.4f64;
    let widths = [0.0, 0.1, 0.5, 1.0, 3.0];
    let spreads: Vec<f64> = widths.iter().map(|&w| spread(zeta, w)).collect();

    assert_relative_eq!(spreads[0], 1.0);
    assert!(spreads.windows(2).all(|w| w[0] < w[1]));
    assert_relative_eq!(spreads[3], 1.16, epsilon = 1e-12);
}

#[test]
fn test_spread_is_one_without_zeta() {
    for w in [0.0, 0.2, 5.0] {
        assert_relative_eq!(spread(0.0f64, w), 1.0);
    }
}

#[test]
fn test_log_mean() {
    let data = worked_dataset();
    let row = &data.rows()[0];
    assert_relative_eq!(
        log_mean(0.7f64, 0.2f64, row),
        0.7 * 5.0f64.ln() + 0.2 * 4.0f64.ln()
    );
}

// ============================================================================
// Objective Value Tests
// ============================================================================

#[test]
fn test_objective_reduces_to_least_squares_at_zero_zeta() {
    let data = worked_dataset();
    let hyper = Hyperparameters::new(2.0, 0.5, 0.1, 1.0);
    let params = Parameters::new(0.6, 0.3, 0.0, 1.5);
    let tau = params.tau();
    let n = data.len() as f64;

    let sse: f64 = data
        .rows()
        .iter()
        .map(|r| {
            let e = r.y - 0.6 * r.h - 0.3 * r.l;
            e * e
        })
        .sum();
    let expected = 0.5 * tau * sse - 0.5 * (n + 1.0 + 2.0 * hyper.alpha) * tau.ln()
        + hyper.beta * tau
        + 0.5 * tau * hyper.lambda_theta * (0.36 + 0.09);

    let objective = Objective::new(&data, &hyper, true);
    assert_relative_eq!(objective.value(&params), expected, max_relative = 1e-12);
}

#[test]
fn test_objective_is_even_in_rho_and_zeta() {
    let data = worked_dataset();
    let hyper = Hyperparameters::default();
    let objective = Objective::new(&data, &hyper, true);

    let p = Parameters::new(0.6, 0.3, 0.2, 1.5);
    let flipped = Parameters::new(0.6, 0.3, -0.2, -1.5);
    assert_relative_eq!(objective.value(&p), objective.value(&flipped), epsilon = 1e-12);
}

#[test]
fn test_contributions_sum_to_likelihood() {
    let data = worked_dataset();
    let hyper = Hyperparameters::new(1.0, 0.0, 0.0, 0.0);
    let objective = Objective::new(&data, &hyper, true);
    let p = Parameters::new(0.5, 0.4, 0.3, 1.0);

    let contributions = objective.contributions(&p);
    assert_eq!(contributions.len(), data.len());

    // tau = 1: only the likelihood and the ln(tau) term (which is zero) remain
    let total: f64 = contributions.iter().sum();
    assert_relative_eq!(total, objective.value(&p), max_relative = 1e-12);
}

#[test]
fn test_objective_undefined_at_zero_rho() {
    let data = worked_dataset();
    let hyper = Hyperparameters::default();
    let objective = Objective::new(&data, &hyper, true);
    assert!(!objective.value(&Parameters::new(0.5, 0.5, 0.0, 0.0)).is_finite());
}

// ============================================================================
// Gradient Tests
// ============================================================================

#[test]
fn test_gradient_matches_finite_differences() {
    let data = worked_dataset();
    let hyper = Hyperparameters::default();
    let objective = Objective::new(&data, &hyper, true);

    for p in [
        Parameters::new(0.5, 0.5, 0.3, 1.2),
        Parameters::new(0.66, 0.25, 0.05, 1.7),
        Parameters::new(-0.2, 1.1, 0.8, -0.6),
    ] {
        let (value, grad) = objective.value_and_gradient(&p);
        assert_relative_eq!(value, objective.value(&p), max_relative = 1e-12);

        let base = p.to_array();
        for i in 0..4 {
            let step = 1e-6;
            let mut plus = base;
            let mut minus = base;
            plus[i] += step;
            minus[i] -= step;
            let numeric = (objective.value(&Parameters::from_array(plus))
                - objective.value(&Parameters::from_array(minus)))
                / (2.0 * step);
            assert_relative_eq!(grad[i], numeric, epsilon = 1e-5, max_relative = 1e-5);
        }
    }
}

#[test]
fn test_homoscedastic_ignores_zeta() {
    let data = worked_dataset();
    let hyper = Hyperparameters::default();
    let hetero = Objective::new(&data, &hyper, true);
    let homo = Objective::new(&data, &hyper, false);

    let p = Parameters::new(0.6, 0.3, 0.7, 1.4);
    let pinned = Parameters::new(0.6, 0.3, 0.0, 1.4);

    let (value, grad) = homo.value_and_gradient(&p);
    assert_eq!(grad[2], 0.0);
    assert_relative_eq!(value, hetero.value(&pinned), max_relative = 1e-12);
    assert_relative_eq!(homo.value(&p), hetero.value(&pinned), max_relative = 1e-12);

    let (_, hetero_grad) = hetero.value_and_gradient(&pinned);
    for i in [0, 1, 3] {
        assert_relative_eq!(grad[i], hetero_grad[i], max_relative = 1e-12);
    }
}

#[test]
fn test_zeta_gradient_vanishes_at_zero() {
    let data = worked_dataset();
    let hyper = Hyperparameters::default();
    let objective = Objective::new(&data, &hyper, true);
    let (_, grad) = objective.value_and_gradient(&Parameters::new(0.6, 0.3, 0.0, 1.4));
    assert_eq!(grad[2], 0.0);
}

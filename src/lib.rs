//! # rangefit — Bayesian log-normal regression for range estimates
//!
//! Fits a heteroscedastic log-normal regression model to range-based effort
//! estimates ("between 4 and 5 days") and their realized outcomes, by
//! maximum a posteriori (MAP) estimation, and produces point and quantile
//! predictions for new ranges.
//!
//! ## What is the model?
//!
//! Every observation is a triple `(low, high, actual)` of positive numbers.
//! In log-space, with `l = ln(low)`, `h = ln(high)`, `y = ln(actual)`:
//!
//! ```text
//! y ~ Normal(theta_h * h + theta_l * l, (s / rho)^2),   s = 1 + zeta^2 * (h - l)
//! ```
//!
//! The spread multiplier `s` lets a wide range signal more uncertainty than a
//! narrow one. `zeta` is learned; when it settles at zero the width of the
//! range carries no information and the model reduces to an ordinary
//! log-linear regression.
//!
//! Priors: `tau = rho^2 ~ Gamma(alpha, beta)`, and Normal priors with
//! precision `tau * lambda_theta` on both weights and `tau * lambda_zeta` on `zeta`.
//!
//! **How fitting works:**
//!
//! 1. Log-transform every value (rejecting anything `<= 0`)
//! 2. Evaluate the negative log-posterior and its exact gradient with
//!    forward-mode automatic differentiation
//! 3. Apply one optimizer update (Adam by default)
//! 4. Repeat for a fixed number of iterations, aborting on any non-finite value
//!
//! ## Quick Start
//!
//! ```rust
//! use rangefit::prelude::*;
//!
//! let low = [4.0, 14.0, 4.0, 3.0, 4.0, 3.0, 4.0, 9.0, 6.0, 27.0, 20.0, 23.0, 11.0];
//! let high = [5.0, 18.0, 5.0, 4.0, 5.0, 7.0, 5.0, 10.0, 8.0, 30.0, 25.0, 29.0, 14.0];
//! let actual = [17.0, 8.0, 5.0, 3.0, 5.0, 4.0, 9.0, 9.0, 4.0, 27.0, 16.0, 15.0, 7.0];
//!
//! // Build the estimator
//! let estimator = RangeFit::new()
//!     .iterations(5000)     // Optimizer updates
//!     .learning_rate(0.05)  // Base step size
//!     .build()?;
//!
//! // Fit the model to the data
//! let model = estimator.fit_columns(&low, &high, &actual)?;
//!
//! // Predict a new estimate of "10 to 15 days"
//! let prediction = model.predict(10.0, 15.0, 0.95)?;
//! assert!(prediction.quantile > prediction.point_estimate);
//!
//! println!("{}", model);
//! # Result::<(), EstimatorError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Observations: 13
//!   Iterations:   5000
//!   Model:        heteroscedastic
//!   Objective:    -0.514584
//!
//! Parameters:
//!   theta_high:   0.662507
//!   theta_low:    0.249111
//!   zeta:         0.000000
//!   rho:          1.702608
//!   sigma:        0.587334
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, EstimatorError>`. Errors fall
//! into two kinds:
//!
//! - **Invalid input** (`is_invalid_input()`): non-positive values, empty data,
//!   confidence outside (0, 1), or invalid configuration. Detected before any
//!   computation.
//! - **Numerical divergence** (`is_divergence()`): the objective or a parameter
//!   became NaN/infinite. Carries the last finite iterate for diagnosis.
//!
//! ```rust
//! use rangefit::prelude::*;
//!
//! let observations = [Observation::new(4.0, 5.0, 17.0), Observation::new(0.0, 2.0, 1.0)];
//!
//! match RangeFit::new().build()?.fit(&observations) {
//!     Ok(model) => println!("{}", model),
//!     Err(e) => {
//!         assert!(e.is_invalid_input());
//!         eprintln!("Fitting failed: {}", e);
//!     }
//! }
//! # Result::<(), EstimatorError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter              | Default              | Range/Options                | Description                                  |
//! |------------------------|----------------------|------------------------------|----------------------------------------------|
//! | **alpha**              | 1.0                  | (0, ∞)                       | Gamma prior shape on the precision           |
//! | **beta**               | 1.0                  | [0, ∞)                       | Gamma prior rate on the precision            |
//! | **lambda_theta**       | 0.001                | [0, ∞)                       | Prior precision multiplier on the weights    |
//! | **lambda_zeta**        | 1.0                  | [0, ∞)                       | Prior precision multiplier on `zeta`         |
//! | **iterations**         | 5000                 | [1, 1000000]                 | Optimizer updates                            |
//! | **learning_rate**      | 0.05                 | (0, ∞)                       | Base step size                               |
//! | **optimizer**          | `Adam`               | `Adam`, `GradientDescent`    | Update rule                                  |
//! | **schedule**           | `LinearDecay`        | `LinearDecay`, `Constant`    | Step-size schedule                           |
//! | **initial_parameters** | (0.5, 0.5, 0.01, 0.01) | finite, `rho != 0`         | Optimizer starting point                     |
//! | **heteroscedastic**    | true                 | true/false                   | Learn `zeta` or pin it at 0                  |
//! | **record_trace**       | off                  | on/off                       | Keep the objective of every iteration        |
//!
//! Each parameter may be set once; setting it twice fails at `build()`.
//!
//! ## Predictions
//!
//! For a new `(low, high)` the predictive distribution of the outcome is
//! log-normal with median `exp(theta_h ln(high) + theta_l ln(low))` and
//! log-space spread `sigma = 1 / |rho|`:
//!
//! ```rust
//! use rangefit::prelude::*;
//! # let observations: Vec<Observation> = [(4.0, 5.0, 17.0), (14.0, 18.0, 8.0), (4.0, 5.0, 5.0),
//! #     (3.0, 4.0, 3.0), (9.0, 10.0, 9.0), (27.0, 30.0, 27.0)]
//! #     .into_iter().map(Observation::from).collect();
//! let model = RangeFit::new().iterations(2000).build()?.fit(&observations)?;
//!
//! let p = model.predict(10.0, 15.0, 0.95)?;          // point + 95% quantile
//! let i = model.interval(10.0, 15.0, 0.80)?;         // central 80% interval
//! let many = model.predict_many(&[(1.0, 2.0), (5.0, 8.0)], 0.9)?;
//!
//! assert!(i.lower < p.point_estimate && p.point_estimate < i.upper);
//! assert_eq!(many.len(), 2);
//! # Result::<(), EstimatorError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Fits emit `tracing` events: `debug` at start and end, `trace` for every
//! iteration with the current objective and parameters, `warn` on divergence.
//! Install any subscriber (for example `tracing-subscriber` with `RUST_LOG=rangefit=trace`)
//! to observe them.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for hyperparameters, parameters,
//!   predictions, optimizer settings, and fitted models.
//! - `dev`: re-exports internal modules under [`internals`] for testing.

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures.
//
// Contains the error type, observations with their log transform, and the
// parameter/hyperparameter vectors.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains forward-mode automatic differentiation and the log-normal
// predictive distribution.
mod math;

// Layer 3: Algorithms - core estimation routines.
//
// Contains the negative log-posterior and the optimizers.
mod algorithms;

// Layer 4: Evaluation - post-processing.
//
// Contains point/quantile predictions and fit diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains validation, the optimization loop, and the fitted model.
mod engine;

// High-level fluent API.
//
// Provides the `EstimatorBuilder` for configuring and running fits.
mod api;

pub use api::{fit, predict};

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use rangefit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE, Diagnostics, EstimatorBuilder as RangeFit,
        EstimatorError, FittedModel, Hyperparameters,
        LearningRateSchedule::{self, Constant, LinearDecay},
        LogNormalPredictive, MapEstimator,
        Optimizer::{self, Adam, GradientDescent},
        Observation, Parameters, Prediction, PredictionInterval,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

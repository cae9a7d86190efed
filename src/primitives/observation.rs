//! Effort observations and their log-space transform.
//!
//! ## Purpose
//!
//! This module defines the `(low, high, actual)` observation triple and the
//! log-transformed dataset every later layer works on.
//!
//! ## Invariants
//!
//! * Every value of a `LogDataset` came from a finite value `> 0`.
//! * `low <= high` is expected but not enforced.
//!
//! ## Non-goals
//!
//! * This module does not reorder or deduplicate observations.

// Internal dependencies
use crate::primitives::errors::EstimatorError;

// ============================================================================
// Observation
// ============================================================================

/// One estimate and its realized outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Estimated lower bound.
    pub low: f64,

    /// Estimated upper bound.
    pub high: f64,

    /// Realized outcome.
    pub actual: f64,
}

impl Observation {
    /// Build an observation.
    pub fn new(low: f64, high: f64, actual: f64) -> Self {
        Self { low, high, actual }
    }
}

impl From<(f64, f64, f64)> for Observation {
    fn from((low, high, actual): (f64, f64, f64)) -> Self {
        Self::new(low, high, actual)
    }
}

// ============================================================================
// Log-space dataset
// ============================================================================

/// Observation after taking the natural log of every value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogObservation {
    /// `ln(low)`
    pub l: f64,

    /// `ln(high)`
    pub h: f64,

    /// `ln(actual)`
    pub y: f64,
}

impl LogObservation {
    /// Width of the estimate range in log-space (`h - l`).
    #[inline]
    pub fn width(&self) -> f64 {
        self.h - self.l
    }
}

/// Log-transformed dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LogDataset {
    rows: Vec<LogObservation>,
}

impl LogDataset {
    /// Log-transform a set of observations.
    ///
    /// Fails on an empty slice or on the first value that is not finite and `> 0`.
    pub fn from_observations(observations: &[Observation]) -> Result<Self, EstimatorError> {
        if observations.is_empty() {
            return Err(EstimatorError::EmptyInput);
        }

        let mut rows = Vec::with_capacity(observations.len());
        for (index, obs) in observations.iter().enumerate() {
            rows.push(LogObservation {
                l: log_positive(obs.low, index, "low")?,
                h: log_positive(obs.high, index, "high")?,
                y: log_positive(obs.actual, index, "actual")?,
            });
        }

        Ok(Self { rows })
    }

    /// Rows in input order.
    #[inline]
    pub fn rows(&self) -> &[LogObservation] {
        &self.rows
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed dataset; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Natural log of a strictly positive finite value.
pub fn log_positive(value: f64, index: usize, field: &'static str) -> Result<f64, EstimatorError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EstimatorError::NonPositiveValue {
            index,
            field,
            value,
        });
    }
    Ok(value.ln())
}

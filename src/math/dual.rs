//! Forward-mode automatic differentiation with dual numbers.
//!
//! ## Purpose
//!
//! This module provides a dual number carrying a value and its partial
//! derivatives with respect to a fixed number of inputs. Evaluating a
//! function on dual inputs yields the function value and its exact gradient
//! in a single pass, so no derivative has to be written by hand.
//!
//! ## Design notes
//!
//! * **Fixed width**: the number of partials is a const generic, so a dual is
//!   a plain `Copy` value with no heap allocation.
//! * **Scalar trait**: numeric code written against [`Scalar`] runs unchanged
//!   on `f64` (value only) and on `Dual<N>` (value and gradient).
//!
//! ## Key concepts
//!
//! * **Seeding**: input `i` is seeded with a unit partial at position `i`.
//! * **Chain rule**: every elementary operation propagates partials as
//!   `d f(u) = f'(u) du`.
//!
//! ## Non-goals
//!
//! * This module does not implement reverse mode or higher-order derivatives.

// External dependencies
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{One, Zero};

// ============================================================================
// Scalar Trait
// ============================================================================

/// Arithmetic needed to evaluate the objective.
pub trait Scalar:
    Copy
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lift a constant (zero derivative).
    fn constant(value: f64) -> Self;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Primal value.
    fn value(&self) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn constant(value: f64) -> Self {
        value
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }
}

// ============================================================================
// Dual Number
// ============================================================================

/// Value together with its partial derivatives with respect to `N` inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<const N: usize> {
    /// Primal value.
    pub value: f64,

    /// Partial derivatives, one per seeded input.
    pub partials: [f64; N],
}

impl<const N: usize> Dual<N> {
    /// Constant with all partials zero.
    #[inline]
    pub fn constant(value: f64) -> Self {
        Self {
            value,
            partials: [0.0; N],
        }
    }

    /// Independent input seeded at position `index`.
    #[inline]
    pub fn variable(value: f64, index: usize) -> Self {
        let mut partials = [0.0; N];
        partials[index] = 1.0;
        Self { value, partials }
    }

    /// Seed every component of `values` as an independent input.
    pub fn variables(values: [f64; N]) -> [Self; N] {
        let mut out = [Self::constant(0.0); N];
        for (i, (slot, &v)) in out.iter_mut().zip(values.iter()).enumerate() {
            *slot = Self::variable(v, i);
        }
        out
    }

    /// Apply `f` with derivative `df` (both evaluated at the primal value).
    #[inline]
    fn chain(self, f: f64, df: f64) -> Self {
        let mut partials = self.partials;
        for p in partials.iter_mut() {
            *p *= df;
        }
        Self { value: f, partials }
    }

    /// Natural logarithm.
    #[inline]
    pub fn ln(self) -> Self {
        self.chain(self.value.ln(), self.value.recip())
    }
}

impl<const N: usize> Scalar for Dual<N> {
    #[inline]
    fn constant(value: f64) -> Self {
        Dual::constant(value)
    }

    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.value
    }
}

impl<const N: usize> Zero for Dual<N> {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0 && self.partials.iter().all(|p| *p == 0.0)
    }
}

impl<const N: usize> One for Dual<N> {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<const N: usize> Add for Dual<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut partials = self.partials;
        for (p, q) in partials.iter_mut().zip(rhs.partials.iter()) {
            *p += q;
        }
        Self {
            value: self.value + rhs.value,
            partials,
        }
    }
}

impl<const N: usize> Sub for Dual<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut partials = self.partials;
        for (p, q) in partials.iter_mut().zip(rhs.partials.iter()) {
            *p -= q;
        }
        Self {
            value: self.value - rhs.value,
            partials,
        }
    }
}

impl<const N: usize> Mul for Dual<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut partials = [0.0; N];
        for (i, p) in partials.iter_mut().enumerate() {
            *p = self.partials[i] * rhs.value + self.value * rhs.partials[i];
        }
        Self {
            value: self.value * rhs.value,
            partials,
        }
    }
}

impl<const N: usize> Div for Dual<N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let inv = rhs.value.recip();
        let value = self.value * inv;
        let mut partials = [0.0; N];
        for (i, p) in partials.iter_mut().enumerate() {
            // (u/v)' = (u' - (u/v) v') / v
            *p = (self.partials[i] - value * rhs.partials[i]) * inv;
        }
        Self { value, partials }
    }
}

impl<const N: usize> Neg for Dual<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        let mut partials = self.partials;
        for p in partials.iter_mut() {
            *p = -*p;
        }
        Self {
            value: -self.value,
            partials,
        }
    }
}

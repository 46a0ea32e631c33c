//! This module provides the numerical building blocks of the calculators.
//!
//! It contains the constants shared across models and the Gaussian density together with
//! the fixed 5-point Gauss-Legendre quadrature used to estimate probability mass inside a
//! forecast band.

/// Numerical constants: time conversions and the Gauss-Legendre nodes and weights.
pub mod constants;

/// Normal density, its CDF, and fixed-order quadrature of the density over an interval.
pub mod gaussian;

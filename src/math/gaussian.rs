use super::constants::{GAUSS_LEGENDRE_NODES, GAUSS_LEGENDRE_WEIGHTS};
use libm::erf;
use std::f64::consts::{PI, SQRT_2};

/// A closed interval of capacity values `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityRange {
    pub min: f64,
    pub max: f64,
}

impl CapacityRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The band `center ± center·relative_error`.
    ///
    /// A negative center yields `min > max`; the quadrature then returns a negated mass,
    /// which is left to the caller to interpret.
    pub fn around(center: f64, relative_error: f64) -> Self {
        let error = center * relative_error;
        Self {
            min: center - error,
            max: center + error,
        }
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.max + self.min)
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.max - self.min)
    }
}

/// Density of N(`mean`, `std_dev`²) at `x`.
///
/// `std_dev` is expected to be positive; zero produces NaN or infinity per IEEE rules.
#[inline]
pub fn normal_density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let normalization = 1.0 / (std_dev * (2.0 * PI).sqrt());
    let exponent = (x - mean).powi(2) / (2.0 * std_dev.powi(2));
    normalization * (-exponent).exp()
}

/// Integrates the normal density over `range` with the fixed 5-point Gauss-Legendre rule.
///
/// The nodes on [-1, 1] are mapped affinely onto the range; each contributes
/// `half_width · weight · density(node)`. The result approximates the probability mass
/// in the range and is accurate while the half-width stays within roughly 2.8σ. Wider
/// ranges overshoot 1 because five nodes cannot resolve the tails.
pub fn gauss_legendre_5(mean: f64, std_dev: f64, range: CapacityRange) -> f64 {
    let midpoint = range.midpoint();
    let half_width = range.half_width();

    GAUSS_LEGENDRE_NODES
        .iter()
        .zip(GAUSS_LEGENDRE_WEIGHTS.iter())
        .map(|(&node, &weight)| {
            let x = midpoint + half_width * node;
            half_width * weight * normal_density(x, mean, std_dev)
        })
        .sum()
}

/// Cumulative distribution function of N(`mean`, `std_dev`²) at `x`.
#[inline]
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    0.5 * (1.0 + erf((x - mean) / (std_dev * SQRT_2)))
}

/// Exact probability mass of N(`mean`, `std_dev`²) inside `range`.
///
/// Serves as a reference for `gauss_legendre_5`; the calculators never substitute it for
/// the quadrature.
pub fn exact_mass(mean: f64, std_dev: f64, range: CapacityRange) -> f64 {
    normal_cdf(range.max, mean, std_dev) - normal_cdf(range.min, mean, std_dev)
}

//! Numerical constants shared by the calculators.

/// Hours in a non-leap year, used to turn annual failure statistics into downtime fractions.
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Hours in a day, used to turn an average daily capacity (MW) into energy (MW·h).
pub const HOURS_PER_DAY: f64 = 24.0;

/// Abscissae of the 5-point Gauss-Legendre rule on [-1, 1].
///
/// These eight-digit values are part of the reference results; do not replace them with
/// exact roots of P₅ or the outputs will drift in the last digits.
pub const GAUSS_LEGENDRE_NODES: [f64; 5] = [-0.90617985, -0.53846931, 0.0, 0.53846931, 0.90617985];

/// Weights of the 5-point Gauss-Legendre rule, paired index-wise with `GAUSS_LEGENDRE_NODES`.
pub const GAUSS_LEGENDRE_WEIGHTS: [f64; 5] =
    [0.23692688, 0.47862868, 0.56888889, 0.47862868, 0.23692688];

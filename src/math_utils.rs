// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function, P(Z ≤ x)
///
/// Computed through the complementary error function:
/// `Φ(x) = 0.5 * erfc(-x/√2)`. Saturates to 0/1 for large |x|.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}

/// Standard normal probability density function
///
/// `φ(x) = (1/√(2π)) * exp(-x²/2)`
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

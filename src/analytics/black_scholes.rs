// src/analytics/black_scholes.rs
//! Closed-form Black-Scholes pricing for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving the
//! cumulative normal distribution function Φ(x).

use crate::error::PricingResult;
use crate::math_utils::norm_cdf;
use crate::params::{BlackScholesParams, OptionType};

/// Standardized risk-neutral distance measures
///
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
pub(crate) fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    (d1, d2)
}

/// Black-Scholes price for a European option
///
/// # Formula
/// ```text
/// Call: C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// Put:  P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// # Errors
///
/// Returns `PricingError::InvalidParameters` when the model preconditions
/// are violated (non-positive S, K, T or σ, non-finite r).
pub fn bs_price(params: &BlackScholesParams) -> PricingResult<f64> {
    params.validate()?;

    let s = params.underlying_price;
    let k = params.strike_price;
    let r = params.interest_rate;
    let t = params.time_to_expiry;
    let (d1, d2) = d1_d2(s, k, r, params.volatility, t);

    let price = match params.option_type {
        OptionType::Call => s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2),
        OptionType::Put => k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1),
    };

    Ok(price)
}

// src/analytics/greeks.rs
//! Closed-form Greeks for European options with a continuous dividend yield
//!
//! All five sensitivities share the d₁/d₂ computation with the pricer and
//! use two discount factors:
//! ```text
//! discount          = e^(-rT)   present value of 1 at expiry
//! dividend_discount = e^(-qT)   same, based on the dividend yield q
//! ```
//!
//! Sign conventions: Theta is typically negative for both calls and puts,
//! Vega peaks at-the-money, Rho is positive for calls and negative for puts.

use crate::analytics::black_scholes::d1_d2;
use crate::error::PricingResult;
use crate::math_utils::{norm_cdf, norm_pdf};
use crate::params::{Greek, GreeksParams, OptionType};

/// Evaluate one closed-form sensitivity
///
/// # Formulas (call / put)
/// ```text
/// Delta: e^(-qT)*Φ(d₁)                      / e^(-qT)*(Φ(d₁) - 1)
/// Gamma: e^(-qT)*φ(d₁) / (S σ √T)            (same for both types)
/// Theta: -(S σ e^(-qT) φ(d₁))/(2√T) ∓ r K e^(-rT) Φ(±d₂) ± q S e^(-qT) Φ(±d₁)
/// Vega:  S e^(-qT) φ(d₁) √T                  (same for both types)
/// Rho:   K T e^(-rT) Φ(d₂)                  / -K T e^(-rT) Φ(-d₂)
/// ```
///
/// # Errors
///
/// Returns `PricingError::InvalidParameters` when T ≤ 0 or σ ≤ 0 (or any
/// other model precondition fails).
pub fn bs_greek(params: &GreeksParams, greek: Greek) -> PricingResult<f64> {
    params.validate()?;

    let s = params.underlying_price;
    let k = params.strike_price;
    let r = params.interest_rate;
    let q = params.dividend_yield;
    let sigma = params.volatility;
    let t = params.time_to_expiry;

    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    let discount = (-r * t).exp();
    let dividend_discount = (-q * t).exp();

    let value = match greek {
        Greek::Delta => match params.option_type {
            OptionType::Call => dividend_discount * norm_cdf(d1),
            OptionType::Put => dividend_discount * (norm_cdf(d1) - 1.0),
        },
        Greek::Gamma => dividend_discount * norm_pdf(d1) / (s * sigma * t.sqrt()),
        Greek::Theta => {
            let decay = -(s * sigma * dividend_discount * norm_pdf(d1)) / (2.0 * t.sqrt());
            let carry = match params.option_type {
                OptionType::Call => {
                    -r * k * discount * norm_cdf(d2) + q * s * dividend_discount * norm_cdf(d1)
                }
                OptionType::Put => {
                    r * k * discount * norm_cdf(-d2) - q * s * dividend_discount * norm_cdf(-d1)
                }
            };
            decay + carry
        }
        Greek::Vega => s * dividend_discount * norm_pdf(d1) * t.sqrt(),
        Greek::Rho => match params.option_type {
            OptionType::Call => k * t * discount * norm_cdf(d2),
            OptionType::Put => -k * t * discount * norm_cdf(-d2),
        },
    };

    Ok(value)
}

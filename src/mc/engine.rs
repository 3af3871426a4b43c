// src/mc/engine.rs
//! Monte Carlo pricing for European options under Geometric Brownian Motion
//!
//! # Math Framework
//!
//! Simulates the GBM SDE under the risk-neutral measure:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! with a daily discretization over the life of the option:
//! ```text
//! total_days = ⌊T * 365⌋
//! Δt = T / total_days
//! S_{t+Δt} = S_t * exp((r - σ²/2)Δt + σ√Δt * Z_t)
//! ```
//! where Z_t ~ N(0,1) come from the Box-Muller transform of two uniform
//! draws. After each path, the terminal payoff is accumulated; the price is
//! the discounted average payoff:
//! ```text
//! V = e^(-rT) * (Σ payoff) / N
//! ```
//!
//! # Parallelism
//!
//! Trials are independent, so the outer loop runs on Rayon with a sum
//! reduction. Each trial draws from its own seeded stream obtained from the
//! injected [`RngFactory`], keeping results reproducible for a fixed base
//! seed regardless of thread count.

use crate::error::{PricingError, PricingResult};
use crate::params::{MonteCarloParams, OptionType};
use crate::rng::{box_muller, RngFactory, UniformSource};
use rayon::prelude::*;

/// Monte Carlo price with an injected random-stream factory
///
/// # Errors
///
/// Returns `PricingError` for:
/// - Invalid parameters (non-positive S, K, T, σ; zero simulations)
/// - An expiry shorter than one simulated day (`⌊T * 365⌋ == 0`)
/// - A non-finite price estimate
pub fn mc_price(params: &MonteCarloParams, factory: &RngFactory) -> PricingResult<f64> {
    params.validate()?;

    let total_days = (params.time_to_expiry * 365.0).floor() as usize;
    if total_days == 0 {
        return Err(PricingError::InvalidConfiguration {
            field: "time_to_expiry".to_string(),
            reason: "must cover at least one simulated day (T ≥ 1/365)".to_string(),
        });
    }

    let n = params.number_of_simulations;
    let s0 = params.underlying_price;
    let k = params.strike_price;
    let dt = params.time_to_expiry / total_days as f64;
    let drift = (params.interest_rate - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();
    let discount = (-params.interest_rate * params.time_to_expiry).exp();

    let total_payoff = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut stream = factory.unit_stream(i as u64);
            let price = simulate_terminal_price(s0, drift, vol_sqrt_dt, total_days, &mut stream);
            terminal_payoff(price, k, params.option_type)
        })
        .sum::<f64>();

    let estimate = (total_payoff / n as f64) * discount;

    if !estimate.is_finite() {
        return Err(PricingError::NumericalInstability {
            method: "Monte Carlo".to_string(),
            reason: format!("Price estimate is not finite: {}", estimate),
        });
    }

    Ok(estimate)
}

/// Monte Carlo price with entropy-seeded randomness
///
/// Convenience wrapper for callers that do not need reproducibility.
pub fn mc_price_from_entropy(params: &MonteCarloParams) -> PricingResult<f64> {
    mc_price(params, &RngFactory::from_entropy())
}

/// Terminal payoff of a vanilla European option
fn terminal_payoff(price: f64, strike: f64, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => (price - strike).max(0.0),
        OptionType::Put => (strike - price).max(0.0),
    }
}

/// One simulated GBM path walked with draws from an arbitrary uniform source
///
/// `drift_per_step` and `vol_sqrt_dt` are the precomputed per-step
/// `(r - σ²/2)Δt` and `σ√Δt` terms. Exposed for callers that want the
/// terminal price itself with a source of their choosing.
pub fn simulate_terminal_price<S: UniformSource + ?Sized>(
    s0: f64,
    drift_per_step: f64,
    vol_sqrt_dt: f64,
    steps: usize,
    source: &mut S,
) -> f64 {
    let mut price = s0;
    for _ in 0..steps {
        let z = box_muller(source);
        price *= (drift_per_step + vol_sqrt_dt * z).exp();
    }
    price
}

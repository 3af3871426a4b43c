// src/strategy.rs
//! Multi-leg option strategy payoffs
//!
//! Each combinator evaluates the net payoff of a standard strategy at a
//! given spot price as a linear combination of per-leg payoffs. Leg payoffs
//! are intrinsic value minus the premium paid, so a strategy's result is its
//! profit/loss at expiry, not bare intrinsic value.
//!
//! Every combinator checks the relative strike ordering that defines the
//! strategy and reports a violation as [`PricingError::StrategyOrder`].

use crate::error::{PricingError, PricingResult};
use crate::params::OptionType;

/// One constituent option position of a multi-leg strategy
#[derive(Debug, Clone, Copy)]
pub struct OptionLeg {
    pub strike: f64,
    pub premium: f64,
    pub option_type: OptionType,
}

impl OptionLeg {
    pub fn new(strike: f64, premium: f64, option_type: OptionType) -> Self {
        OptionLeg {
            strike,
            premium,
            option_type,
        }
    }

    /// Payoff at expiry for a given spot price, net of the premium paid
    pub fn payoff(&self, spot_price: f64) -> f64 {
        match self.option_type {
            OptionType::Call => (spot_price - self.strike).max(0.0) - self.premium,
            OptionType::Put => (self.strike - spot_price).max(0.0) - self.premium,
        }
    }
}

fn order_violation(strategy: &str, reason: &str) -> PricingError {
    PricingError::StrategyOrder {
        strategy: strategy.to_string(),
        reason: reason.to_string(),
    }
}

/// Put spread: long a put at a higher strike, short a put at a lower strike
pub fn put_spread(
    long_put: &OptionLeg,
    short_put: &OptionLeg,
    spot_price: f64,
) -> PricingResult<f64> {
    if long_put.strike <= short_put.strike {
        return Err(order_violation(
            "put spread",
            "long put strike must be higher than short put strike",
        ));
    }
    Ok(long_put.payoff(spot_price) - short_put.payoff(spot_price))
}

/// Call spread: long a call at a lower strike, short a call at a higher strike
pub fn call_spread(
    long_call: &OptionLeg,
    short_call: &OptionLeg,
    spot_price: f64,
) -> PricingResult<f64> {
    if long_call.strike >= short_call.strike {
        return Err(order_violation(
            "call spread",
            "long call strike must be lower than short call strike",
        ));
    }
    Ok(long_call.payoff(spot_price) - short_call.payoff(spot_price))
}

/// Butterfly: long the wings, short two of the body, strikes strictly ascending
pub fn butterfly(
    wing1: &OptionLeg,
    body: &OptionLeg,
    wing2: &OptionLeg,
    spot_price: f64,
) -> PricingResult<f64> {
    if wing1.strike >= body.strike || body.strike >= wing2.strike {
        return Err(order_violation(
            "butterfly",
            "strikes must be in strictly ascending order",
        ));
    }
    Ok(wing1.payoff(spot_price) - 2.0 * body.payoff(spot_price) + wing2.payoff(spot_price))
}

/// Strangle: long a put at a lower strike and a call at a higher strike
pub fn strangle(put: &OptionLeg, call: &OptionLeg, spot_price: f64) -> PricingResult<f64> {
    if put.strike >= call.strike {
        return Err(order_violation(
            "strangle",
            "put strike must be lower than call strike",
        ));
    }
    Ok(put.payoff(spot_price) + call.payoff(spot_price))
}

/// Straddle: long a put and a call at the same strike
pub fn straddle(put: &OptionLeg, call: &OptionLeg, spot_price: f64) -> PricingResult<f64> {
    if put.strike != call.strike {
        return Err(order_violation(
            "straddle",
            "put and call strikes must be the same",
        ));
    }
    Ok(put.payoff(spot_price) + call.payoff(spot_price))
}

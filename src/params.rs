// src/params.rs
//! Parameter records for the pricing entry points
//!
//! Every record is an immutable value struct built literally by the caller
//! and read once per pricing call. Each carries a `validate` method applying
//! the model preconditions; all pricers validate eagerly, so a non-positive
//! time or volatility is a typed error rather than NaN propagation.

use crate::error::{validation::*, PricingResult};

/// Side of a vanilla option contract
///
/// Governs the sign conventions throughout the library: payoff direction,
/// the Black-Scholes branch, and the signs of Delta, Theta and Rho.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Right to buy the underlying at the strike
    Call,
    /// Right to sell the underlying at the strike
    Put,
}

/// Selector for which sensitivity the Greeks evaluator computes
///
/// - **Delta**: price change per unit change in the underlying
/// - **Gamma**: rate of change of Delta in the underlying
/// - **Theta**: price decay per unit of time
/// - **Vega**: price change per unit change in volatility
/// - **Rho**: price change per unit change in the interest rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greek {
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
}

/// Inputs to the closed-form Black-Scholes pricer
#[derive(Debug, Clone, Copy)]
pub struct BlackScholesParams {
    /// Risk-free rate `r` (annualized, continuous compounding)
    pub interest_rate: f64,
    /// Current underlying price `S`
    pub underlying_price: f64,
    /// Strike price `K`
    pub strike_price: f64,
    /// Time to expiration `T` in years
    pub time_to_expiry: f64,
    /// Volatility `σ` (annualized)
    pub volatility: f64,
    /// Call or Put
    pub option_type: OptionType,
    /// Premium paid for the contract; carried for P&L bookkeeping,
    /// does not enter the theoretical price
    pub paid_price: f64,
}

impl BlackScholesParams {
    /// Validate the Black-Scholes model preconditions
    pub fn validate(&self) -> PricingResult<()> {
        validate_finite("interest_rate", self.interest_rate)?;
        validate_positive("underlying_price", self.underlying_price)?;
        validate_positive("strike_price", self.strike_price)?;
        validate_positive("time_to_expiry", self.time_to_expiry)?;
        validate_positive("volatility", self.volatility)?;
        Ok(())
    }
}

/// Inputs to the Greeks evaluator: the Black-Scholes fields plus a
/// continuous dividend yield `q`
#[derive(Debug, Clone, Copy)]
pub struct GreeksParams {
    pub interest_rate: f64,
    pub underlying_price: f64,
    pub strike_price: f64,
    pub time_to_expiry: f64,
    pub volatility: f64,
    pub option_type: OptionType,
    pub paid_price: f64,
    /// Annual dividend payment as a fraction of the underlying price
    pub dividend_yield: f64,
}

impl GreeksParams {
    pub fn validate(&self) -> PricingResult<()> {
        validate_finite("interest_rate", self.interest_rate)?;
        validate_positive("underlying_price", self.underlying_price)?;
        validate_positive("strike_price", self.strike_price)?;
        validate_positive("time_to_expiry", self.time_to_expiry)?;
        validate_positive("volatility", self.volatility)?;
        validate_non_negative("dividend_yield", self.dividend_yield)?;
        Ok(())
    }
}

/// Inputs to the Monte Carlo simulation pricer
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloParams {
    /// Number of independent simulated price paths
    pub number_of_simulations: usize,
    pub interest_rate: f64,
    pub underlying_price: f64,
    pub strike_price: f64,
    pub time_to_expiry: f64,
    pub volatility: f64,
    pub option_type: OptionType,
    pub paid_price: f64,
}

impl MonteCarloParams {
    pub fn validate(&self) -> PricingResult<()> {
        validate_simulations(self.number_of_simulations)?;
        validate_finite("interest_rate", self.interest_rate)?;
        validate_positive("underlying_price", self.underlying_price)?;
        validate_positive("strike_price", self.strike_price)?;
        validate_positive("time_to_expiry", self.time_to_expiry)?;
        validate_positive("volatility", self.volatility)?;
        Ok(())
    }
}

/// Inputs to the futures value calculation (simple annual compounding)
#[derive(Debug, Clone, Copy)]
pub struct FuturesParams {
    /// Initial investment amount or current value of the asset
    pub present_value: f64,
    /// Annual rate of return on the investment
    pub interest_rate: f64,
    /// Time horizon over which the investment grows, in years
    pub time_to_expiry: f64,
}

impl FuturesParams {
    pub fn validate(&self) -> PricingResult<()> {
        validate_finite("present_value", self.present_value)?;
        validate_finite("interest_rate", self.interest_rate)?;
        // Compounding base 1 + r must stay positive for fractional-year powers
        if self.interest_rate <= -1.0 {
            return Err(crate::error::PricingError::InvalidParameters {
                parameter: "interest_rate".to_string(),
                value: self.interest_rate,
                constraint: "must be greater than -1".to_string(),
            });
        }
        validate_finite("time_to_expiry", self.time_to_expiry)?;
        validate_non_negative("time_to_expiry", self.time_to_expiry)?;
        Ok(())
    }
}

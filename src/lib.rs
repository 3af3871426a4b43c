//! # option-pricer: Pricing and Risk for Vanilla European Options
//!
//! A Rust library for pricing vanilla European options with two independent
//! methods: the closed-form Black-Scholes solution and risk-neutral Monte
//! Carlo simulation under Geometric Brownian Motion (GBM).
//!
//! ## Key Features
//!
//! - **Closed-Form Pricing**: Black-Scholes call/put prices and the five
//!   Greeks (Delta, Gamma, Theta, Vega, Rho) with dividend-yield support
//! - **Monte Carlo Pricing**: Daily-discretized GBM paths with Box-Muller
//!   normal sampling, parallelized over trials with Rayon
//! - **Reproducible Randomness**: Seeded per-trial random streams so a fixed
//!   seed gives the same price regardless of thread count
//! - **Strategy Payoffs**: Put/call spreads, butterfly, strangle, straddle
//!   built from per-leg payoffs with strike-ordering checks
//! - **Explicit Errors**: Every precondition violation is a typed error
//!   value, never a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use option_pricer::analytics::black_scholes::bs_price;
//! use option_pricer::params::{BlackScholesParams, OptionType};
//!
//! let params = BlackScholesParams {
//!     interest_rate: 0.05,
//!     underlying_price: 100.0,
//!     strike_price: 105.0,
//!     time_to_expiry: 0.5,
//!     volatility: 0.2,
//!     option_type: OptionType::Call,
//!     paid_price: 0.0,
//! };
//!
//! let price = bs_price(&params).expect("valid parameters");
//! println!("Call price: {:.4}", price);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Both pricers value the discounted expected payoff under the risk-neutral
//! measure. The closed-form path evaluates the Black-Scholes formula via the
//! standard-normal CDF; the simulation path averages terminal payoffs over
//! independently simulated GBM price paths.

// Module declarations
pub mod error;
pub mod params;
pub mod math_utils;
pub mod rng;
pub mod analytics;
pub mod mc;
pub mod futures;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use params::{Greek, OptionType};

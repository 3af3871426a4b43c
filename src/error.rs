// src/error.rs
use std::fmt;

/// Custom error types for the option-pricer library
#[derive(Debug, Clone)]
pub enum PricingError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Strategy leg ordering violation
    StrategyOrder { strategy: String, reason: String },

    /// Numerical instability in a pricing method
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PricingError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PricingError::StrategyOrder { strategy, reason } => {
                write!(f, "Invalid {} legs: {}", strategy, reason)
            }
            PricingError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for option-pricer operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        if value <= 0.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PricingResult<()> {
        if value < 0.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate simulation count
    pub fn validate_simulations(simulations: usize) -> PricingResult<()> {
        if simulations == 0 {
            Err(PricingError::InvalidConfiguration {
                field: "number_of_simulations".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if simulations > 1_000_000_000 {
            Err(PricingError::InvalidConfiguration {
                field: "number_of_simulations".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

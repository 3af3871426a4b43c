// src/futures.rs
//! Future value of an investment under simple annual compounding

use crate::error::PricingResult;
use crate::params::FuturesParams;

/// Value of `present_value` after `time_to_expiry` years at `interest_rate`
///
/// # Formula
/// ```text
/// FV = PV * (1 + r)^T
/// ```
pub fn futures_value(params: &FuturesParams) -> PricingResult<f64> {
    params.validate()?;
    Ok(params.present_value * (1.0 + params.interest_rate).powf(params.time_to_expiry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_year_compounding() {
        let params = FuturesParams {
            present_value: 100.0,
            interest_rate: 0.05,
            time_to_expiry: 2.0,
        };
        let value = futures_value(&params).unwrap();
        assert!((value - 110.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_horizon_is_identity() {
        let params = FuturesParams {
            present_value: 250.0,
            interest_rate: 0.10,
            time_to_expiry: 0.0,
        };
        assert_eq!(futures_value(&params).unwrap(), 250.0);
    }

    #[test]
    fn test_rate_below_minus_one_rejected() {
        let params = FuturesParams {
            present_value: 100.0,
            interest_rate: -1.2,
            time_to_expiry: 1.5,
        };
        assert!(futures_value(&params).is_err());
    }
}

// tests/pricing_test.rs
use option_pricer::analytics::black_scholes::bs_price;
use option_pricer::futures::futures_value;
use option_pricer::mc::engine::mc_price;
use option_pricer::params::{BlackScholesParams, FuturesParams, MonteCarloParams, OptionType};
use option_pricer::rng::RngFactory;

fn bs_params(option_type: OptionType) -> BlackScholesParams {
    BlackScholesParams {
        interest_rate: 0.05,
        underlying_price: 100.0,
        strike_price: 105.0,
        time_to_expiry: 0.5,
        volatility: 0.2,
        option_type,
        paid_price: 0.0,
    }
}

#[test]
fn test_bs_call_reference_value() {
    // Φ-based closed form for S=100, K=105, T=0.5, r=0.05, σ=0.2
    let price = bs_price(&bs_params(OptionType::Call)).unwrap();
    let expected = 4.581680167540007;

    let abs_error = (price - expected).abs();

    println!("\nBS Call: {}", price);
    println!("Expected: {}", expected);
    println!("Absolute Error: {}", abs_error);

    assert!(abs_error < 1e-10, "Call price off reference: {}", price);
}

#[test]
fn test_bs_put_reference_value() {
    let price = bs_price(&bs_params(OptionType::Put)).unwrap();
    let expected = 6.989220930514911;

    assert!(
        (price - expected).abs() < 1e-10,
        "Put price off reference: {}",
        price
    );
}

#[test]
fn test_put_call_parity() {
    // C - P = S - K*e^(-rT) across a parameter grid
    for &s in &[80.0, 100.0, 120.0] {
        for &k in &[90.0, 105.0, 110.0] {
            for &t in &[0.25, 0.5, 2.0] {
                for &sigma in &[0.1, 0.2, 0.4] {
                    let r = 0.05;
                    let mut params = BlackScholesParams {
                        interest_rate: r,
                        underlying_price: s,
                        strike_price: k,
                        time_to_expiry: t,
                        volatility: sigma,
                        option_type: OptionType::Call,
                        paid_price: 0.0,
                    };
                    let call = bs_price(&params).unwrap();
                    params.option_type = OptionType::Put;
                    let put = bs_price(&params).unwrap();

                    let lhs = call - put;
                    let rhs = s - k * (-r * t).exp();

                    assert!(
                        (lhs - rhs).abs() < 1e-9,
                        "Parity violated at S={}, K={}, T={}, σ={}: {} vs {}",
                        s,
                        k,
                        t,
                        sigma,
                        lhs,
                        rhs
                    );
                }
            }
        }
    }
}

#[test]
fn test_bs_rejects_non_positive_time_and_vol() {
    let mut params = bs_params(OptionType::Call);
    params.time_to_expiry = 0.0;
    assert!(bs_price(&params).is_err());

    let mut params = bs_params(OptionType::Call);
    params.volatility = -0.2;
    assert!(bs_price(&params).is_err());
}

#[test]
fn test_mc_converges_to_closed_form() {
    let closed_form = bs_price(&bs_params(OptionType::Call)).unwrap();

    let params = MonteCarloParams {
        number_of_simulations: 1_000_000,
        interest_rate: 0.05,
        underlying_price: 100.0,
        strike_price: 105.0,
        time_to_expiry: 0.5,
        volatility: 0.2,
        option_type: OptionType::Call,
        paid_price: 0.0,
    };

    let mc = mc_price(&params, &RngFactory::new(42)).unwrap();
    let abs_error = (mc - closed_form).abs();

    println!("\nMC Price (1M trials): {}", mc);
    println!("Closed Form: {}", closed_form);
    println!("Absolute Error: {}", abs_error);

    assert!(
        abs_error < 0.05,
        "MC price {} not within 0.05 of closed form {}",
        mc,
        closed_form
    );
}

#[test]
fn test_mc_put_converges_to_closed_form() {
    let closed_form = bs_price(&bs_params(OptionType::Put)).unwrap();

    let params = MonteCarloParams {
        number_of_simulations: 200_000,
        interest_rate: 0.05,
        underlying_price: 100.0,
        strike_price: 105.0,
        time_to_expiry: 0.5,
        volatility: 0.2,
        option_type: OptionType::Put,
        paid_price: 0.0,
    };

    let mc = mc_price(&params, &RngFactory::new(42)).unwrap();
    let abs_error = (mc - closed_form).abs();

    println!("\nMC Put Price (200k trials): {}", mc);
    println!("Closed Form: {}", closed_form);
    println!("Absolute Error: {}", abs_error);

    // Looser tolerance at 200k trials
    assert!(
        abs_error < 0.1,
        "MC put price {} not within 0.1 of closed form {}",
        mc,
        closed_form
    );
}

#[test]
fn test_mc_rejects_non_positive_time_and_vol() {
    let mut params = MonteCarloParams {
        number_of_simulations: 1_000,
        interest_rate: 0.05,
        underlying_price: 100.0,
        strike_price: 105.0,
        time_to_expiry: 0.5,
        volatility: 0.2,
        option_type: OptionType::Call,
        paid_price: 0.0,
    };

    params.time_to_expiry = -0.5;
    assert!(mc_price(&params, &RngFactory::new(1)).is_err());

    params.time_to_expiry = 0.5;
    params.volatility = 0.0;
    assert!(mc_price(&params, &RngFactory::new(1)).is_err());
}

#[test]
fn test_futures_reference_value() {
    let params = FuturesParams {
        present_value: 100.0,
        interest_rate: 0.05,
        time_to_expiry: 2.0,
    };
    let value = futures_value(&params).unwrap();
    assert!(
        (value - 110.25).abs() < 1e-12,
        "100 at 5% over 2 years should be 110.25, got {}",
        value
    );
}

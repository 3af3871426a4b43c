// demos/demo.rs
use option_pricer::analytics::black_scholes::bs_price;
use option_pricer::analytics::greeks::bs_greek;
use option_pricer::futures::futures_value;
use option_pricer::mc::engine::mc_price;
use option_pricer::params::{
    BlackScholesParams, FuturesParams, Greek, GreeksParams, MonteCarloParams, OptionType,
};
use option_pricer::rng::RngFactory;
use option_pricer::strategy::{butterfly, straddle, OptionLeg};

fn main() {
    println!("Running option-pricer demo\n");

    let bs = BlackScholesParams {
        interest_rate: 0.05,
        underlying_price: 100.0,
        strike_price: 105.0,
        time_to_expiry: 0.5,
        volatility: 0.2,
        option_type: OptionType::Call,
        paid_price: 0.0,
    };

    match bs_price(&bs) {
        Ok(price) => println!("Black-Scholes call price: {:.4}", price),
        Err(e) => println!("Black-Scholes failed: {}", e),
    }

    let mc = MonteCarloParams {
        number_of_simulations: 100_000,
        interest_rate: bs.interest_rate,
        underlying_price: bs.underlying_price,
        strike_price: bs.strike_price,
        time_to_expiry: bs.time_to_expiry,
        volatility: bs.volatility,
        option_type: bs.option_type,
        paid_price: bs.paid_price,
    };

    match mc_price(&mc, &RngFactory::new(42)) {
        Ok(price) => println!("Monte Carlo call price (100k trials): {:.4}", price),
        Err(e) => println!("Monte Carlo failed: {}", e),
    }

    let greeks = GreeksParams {
        interest_rate: bs.interest_rate,
        underlying_price: bs.underlying_price,
        strike_price: bs.strike_price,
        time_to_expiry: bs.time_to_expiry,
        volatility: bs.volatility,
        option_type: bs.option_type,
        paid_price: bs.paid_price,
        dividend_yield: 0.02,
    };

    println!();
    for greek in [Greek::Delta, Greek::Gamma, Greek::Theta, Greek::Vega, Greek::Rho] {
        match bs_greek(&greeks, greek) {
            Ok(value) => println!("{:?}: {:.6}", greek, value),
            Err(e) => println!("{:?} failed: {}", greek, e),
        }
    }

    let futures = FuturesParams {
        present_value: 100.0,
        interest_rate: 0.05,
        time_to_expiry: 2.0,
    };
    println!(
        "\nFutures value of 100 at 5% over 2 years: {:.2}",
        futures_value(&futures).expect("valid futures parameters")
    );

    // Strategy payoffs at a spot of 100
    let wing1 = OptionLeg::new(95.0, 7.0, OptionType::Call);
    let body = OptionLeg::new(100.0, 4.0, OptionType::Call);
    let wing2 = OptionLeg::new(105.0, 2.0, OptionType::Call);
    match butterfly(&wing1, &body, &wing2, 100.0) {
        Ok(payoff) => println!("Butterfly payoff at spot 100: {:.2}", payoff),
        Err(e) => println!("Butterfly failed: {}", e),
    }

    let put = OptionLeg::new(100.0, 3.0, OptionType::Put);
    let call = OptionLeg::new(100.0, 3.0, OptionType::Call);
    match straddle(&put, &call, 108.0) {
        Ok(payoff) => println!("Straddle payoff at spot 108: {:.2}", payoff),
        Err(e) => println!("Straddle failed: {}", e),
    }
}

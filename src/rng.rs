// src/rng.rs
//! Random Number Generation for Monte Carlo Pricing
//!
//! # Design Philosophy
//!
//! Monte Carlo pricing needs random draws with specific properties:
//! 1. **Reproducibility**: Same seed → same price (critical for debugging/validation)
//! 2. **Parallel safety**: Different trials must have independent streams
//! 3. **Testability**: The uniform source is injected, so tests can substitute
//!    a deterministic or seeded stream
//!
//! The [`RngFactory`] derives one seeded `StdRng` stream per trial from a
//! base seed, so results do not depend on the thread count and no stream is
//! shared between workers.
//!
//! # Box-Muller Transform
//!
//! Converts uniform random variables to standard normal draws:
//! ```text
//! Z = √(-2 ln(U₁)) * cos(2π U₂)
//! ```
//! where U₁, U₂ ~ Uniform[0,1). A zero U₁ would make ln(U₁) undefined, so
//! the transform resamples until U₁ > 0.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

/// A source of independent uniform draws
///
/// Implementors produce values in a fixed bounded interval; the Monte Carlo
/// engine consumes unit-interval sources. Injected rather than instantiated
/// inside the pricers so tests can pin the stream.
pub trait UniformSource {
    /// Next independent draw from the source's interval
    fn next_uniform(&mut self) -> f64;
}

/// Bounded continuous uniform generator over `[low, high)`
///
/// Backed by a `StdRng`, either entropy-seeded or seeded explicitly for
/// reproducible runs. Limits may be given in either order.
#[derive(Debug, Clone)]
pub struct UniformRng {
    rng: StdRng,
    dist: Uniform<f64>,
}

impl UniformRng {
    /// Entropy-seeded generator over `[low, high)`
    pub fn new(left_limit: f64, right_limit: f64) -> Self {
        UniformRng {
            rng: StdRng::from_entropy(),
            dist: Uniform::new(left_limit.min(right_limit), left_limit.max(right_limit)),
        }
    }

    /// Seed-reproducible generator over `[low, high)`
    pub fn with_seed(left_limit: f64, right_limit: f64, seed: u64) -> Self {
        UniformRng {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(left_limit.min(right_limit), left_limit.max(right_limit)),
        }
    }
}

impl UniformSource for UniformRng {
    fn next_uniform(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }
}

/// RNG factory for reproducible parallel simulations
///
/// Each trial asks the factory for its own stream, keyed by trial id, so the
/// simulated paths are identical for a fixed base seed no matter how the
/// trials are scheduled across threads.
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        RngFactory { base_seed }
    }

    /// Factory with a base seed drawn from OS entropy
    pub fn from_entropy() -> Self {
        RngFactory {
            base_seed: rand::random(),
        }
    }

    /// Create an independent unit-interval stream for a specific trial
    pub fn unit_stream(&self, trial_id: u64) -> UniformRng {
        UniformRng::with_seed(0.0, 1.0, self.base_seed.wrapping_add(trial_id))
    }
}

/// One standard-normal draw via the Box-Muller transform
///
/// Consumes two uniform draws per call; resamples the first draw if it is
/// zero since `ln(0)` is undefined.
pub fn box_muller<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    let mut u1 = source.next_uniform();
    while u1 <= 0.0 {
        u1 = source.next_uniform();
    }
    let u2 = source.next_uniform();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_stream_reproducibility() {
        let factory = RngFactory::new(42);

        // Generate same sequence twice
        let mut rng1 = factory.unit_stream(0);
        let mut rng2 = factory.unit_stream(0);

        for _ in 0..100 {
            assert_eq!(rng1.next_uniform(), rng2.next_uniform());
        }
    }

    #[test]
    fn test_unit_stream_different_trials() {
        let factory = RngFactory::new(42);

        let mut rng1 = factory.unit_stream(0);
        let mut rng2 = factory.unit_stream(1);

        // Different trials should produce different sequences
        let vals1: Vec<f64> = (0..10).map(|_| rng1.next_uniform()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.next_uniform()).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_uniform_bounds() {
        let mut rng = UniformRng::with_seed(0.0, 1.0, 7);
        for _ in 0..10_000 {
            let u = rng.next_uniform();
            assert!((0.0..1.0).contains(&u), "draw out of [0,1): {}", u);
        }
    }

    #[test]
    fn test_uniform_limits_swapped() {
        let mut rng = UniformRng::with_seed(5.0, -5.0, 11);
        for _ in 0..1_000 {
            let u = rng.next_uniform();
            assert!((-5.0..5.0).contains(&u));
        }
    }

    #[test]
    fn test_box_muller_moments() {
        let factory = RngFactory::new(42);
        let mut rng = factory.unit_stream(0);

        let samples: Vec<f64> = (0..100_000).map(|_| box_muller(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

        assert!(mean.abs() < 0.02, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.02,
            "Variance should be close to 1, got {}",
            variance
        );
    }

    #[test]
    fn test_box_muller_resamples_zero() {
        // A source that first hands back 0.0 must not produce NaN
        struct ZeroThen(UniformRng, bool);
        impl UniformSource for ZeroThen {
            fn next_uniform(&mut self) -> f64 {
                if !self.1 {
                    self.1 = true;
                    0.0
                } else {
                    self.0.next_uniform()
                }
            }
        }

        let mut source = ZeroThen(UniformRng::with_seed(0.0, 1.0, 3), false);
        let z = box_muller(&mut source);
        assert!(z.is_finite());
    }
}

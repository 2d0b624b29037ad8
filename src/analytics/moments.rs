// src/analytics/moments.rs
//! Closed-form reference values for the simulated processes
//!
//! # Mean Reversion
//!
//! For drift `a (b - x)` the mean solves a linear ODE regardless of the
//! diffusion coefficient:
//! ```text
//! E[X_t] = b + (x_0 - b) e^{-a t}
//! ```
//!
//! # Jump Counts
//!
//! The number of arrivals of a rate-λ Poisson process on `[0, T]` is
//! Poisson(λT), with mean and variance λT.

use crate::error::{validation::*, SdeError, SdeResult};
use statrs::distribution::{Discrete, Poisson};

/// Mean of a mean-reverting process with drift `a (b - x)` at time `t`.
pub fn mean_reversion_mean(x0: f64, a: f64, b: f64, t: f64) -> f64 {
    b + (x0 - b) * (-a * t).exp()
}

/// Expected number of arrivals of a rate-`rate` Poisson process on `[0, horizon]`.
pub fn poisson_count_mean(rate: f64, horizon: f64) -> f64 {
    rate * horizon
}

/// Probability of exactly `count` arrivals on `[0, horizon]`.
pub fn poisson_count_pmf(rate: f64, horizon: f64, count: u64) -> SdeResult<f64> {
    validate_positive("rate", rate)?;
    validate_positive("horizon", horizon)?;
    let dist = Poisson::new(rate * horizon).map_err(|e| SdeError::InvalidParameters {
        parameter: "rate".to_string(),
        value: rate,
        constraint: e.to_string(),
    })?;
    Ok(dist.pmf(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_reversion_limits() {
        assert_relative_eq!(mean_reversion_mean(5.0, 0.5, 3.0, 0.0), 5.0);
        assert_relative_eq!(mean_reversion_mean(5.0, 0.5, 3.0, 1e3), 3.0);
    }

    #[test]
    fn test_poisson_pmf() {
        let p0 = poisson_count_pmf(1.0, 5.0, 0).unwrap();
        assert_relative_eq!(p0, (-5.0f64).exp(), max_relative = 1e-10);

        let total: f64 = (0..60).map(|k| poisson_count_pmf(1.0, 5.0, k).unwrap()).sum();
        assert_relative_eq!(total, 1.0, max_relative = 1e-9);
        assert!(poisson_count_pmf(0.0, 5.0, 1).is_err());
    }
}

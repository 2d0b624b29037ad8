// src/models/levy.rs
//! Lévy Process with Drift, Correlated Brownian Part and Gaussian Jumps
//!
//! ```text
//! dX_t = μ dt + dW_t · Σ + dN_t,    jump ~ m + Z · C,   Z ~ N(0, I)
//! ```
//!
//! Coefficients are state independent, so the Euler scheme is exact in law
//! for the continuous part.

use super::model::JumpDiffusionModel;
use crate::error::{validation::*, SdeResult};
use crate::rng;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Levy {
    pub x0: Array1<f64>,
    pub drift: Array1<f64>,
    pub volatility: Array2<f64>,
    pub lambda: f64,
    pub jump_mean: Array1<f64>,
    pub jump_mix: Array2<f64>,
}

impl Levy {
    pub fn new(
        x0: Array1<f64>,
        drift: Array1<f64>,
        volatility: Array2<f64>,
        lambda: f64,
        jump_mean: Array1<f64>,
        jump_mix: Array2<f64>,
    ) -> SdeResult<Self> {
        let d = x0.len();
        validate_dimension("levy drift", d, drift.len())?;
        validate_dimension("levy volatility rows", d, volatility.nrows())?;
        validate_dimension("levy volatility cols", d, volatility.ncols())?;
        validate_dimension("levy jump mean", d, jump_mean.len())?;
        validate_dimension("levy jump mix rows", d, jump_mix.nrows())?;
        validate_dimension("levy jump mix cols", d, jump_mix.ncols())?;
        validate_non_negative("lambda", lambda)?;
        validate_finite("lambda", lambda)?;
        Ok(Levy {
            x0,
            drift,
            volatility,
            lambda,
            jump_mean,
            jump_mix,
        })
    }
}

impl JumpDiffusionModel for Levy {
    fn x0(&self) -> Array1<f64> {
        self.x0.clone()
    }

    fn dim(&self) -> usize {
        self.x0.len()
    }

    fn drift(&self, _x: ArrayView1<f64>) -> Array1<f64> {
        self.drift.clone()
    }

    fn diffusion(&self, _x: ArrayView1<f64>) -> Array2<f64> {
        self.volatility.clone()
    }

    fn intensity(&self) -> f64 {
        self.lambda
    }

    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
        if n == 0 {
            return Array2::zeros((0, self.dim()));
        }
        let z = rng::normal_matrix(rng, n, self.dim(), 0.0, 1.0);
        z.dot(&self.jump_mix) + &self.jump_mean.view().insert_axis(Axis(0))
    }
}

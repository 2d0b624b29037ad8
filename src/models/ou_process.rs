// src/models/ou_process.rs
use super::model::JumpDiffusionModel;
use crate::error::{validation::*, SdeResult};
use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

/// Multivariate Ornstein-Uhlenbeck process `dX = (m - X)·Θ dt + dW·Σ`.
///
/// Drift and noise act on row vectors, matching the trajectory layout.
#[derive(Clone, Debug)]
pub struct OuProcess {
    pub x0: Array1<f64>,
    pub mean: Array1<f64>,
    pub reversion: Array2<f64>,
    pub volatility: Array2<f64>,
}

impl OuProcess {
    pub fn new(
        x0: Array1<f64>,
        mean: Array1<f64>,
        reversion: Array2<f64>,
        volatility: Array2<f64>,
    ) -> SdeResult<Self> {
        let d = x0.len();
        validate_dimension("ou mean", d, mean.len())?;
        validate_dimension("ou reversion rows", d, reversion.nrows())?;
        validate_dimension("ou reversion cols", d, reversion.ncols())?;
        validate_dimension("ou volatility rows", d, volatility.nrows())?;
        validate_dimension("ou volatility cols", d, volatility.ncols())?;
        Ok(OuProcess {
            x0,
            mean,
            reversion,
            volatility,
        })
    }
}

impl JumpDiffusionModel for OuProcess {
    fn x0(&self) -> Array1<f64> {
        self.x0.clone()
    }

    fn dim(&self) -> usize {
        self.x0.len()
    }

    fn drift(&self, x: ArrayView1<f64>) -> Array1<f64> {
        (&self.mean - &x).dot(&self.reversion)
    }

    fn diffusion(&self, _x: ArrayView1<f64>) -> Array2<f64> {
        self.volatility.clone()
    }

    fn intensity(&self) -> f64 {
        0.0
    }

    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, _rng: &mut R) -> Array2<f64> {
        Array2::zeros((n, self.dim()))
    }
}

// src/models/poisson.rs
use super::model::JumpDiffusionModel;
use crate::error::{validation::*, SdeResult};
use ndarray::{arr1, Array1, Array2, ArrayView1};
use rand::Rng;

/// Counting process: no drift, no diffusion, jumps of fixed size at rate λ.
#[derive(Clone, Copy, Debug)]
pub struct PoissonProcess {
    pub rate: f64,
    pub jump_size: f64,
}

impl PoissonProcess {
    pub fn new(rate: f64) -> SdeResult<Self> {
        validate_non_negative("rate", rate)?;
        validate_finite("rate", rate)?;
        Ok(PoissonProcess {
            rate,
            jump_size: 1.0,
        })
    }
}

impl JumpDiffusionModel for PoissonProcess {
    fn x0(&self) -> Array1<f64> {
        arr1(&[0.0])
    }

    fn dim(&self) -> usize {
        1
    }

    fn drift(&self, _x: ArrayView1<f64>) -> Array1<f64> {
        Array1::zeros(1)
    }

    fn diffusion(&self, _x: ArrayView1<f64>) -> Array2<f64> {
        Array2::zeros((1, 1))
    }

    fn intensity(&self) -> f64 {
        self.rate
    }

    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, _rng: &mut R) -> Array2<f64> {
        Array2::from_elem((n, 1), self.jump_size)
    }
}

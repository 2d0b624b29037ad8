// src/models/brownian.rs
use super::model::JumpDiffusionModel;
use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

/// Standard Brownian motion in `d` dimensions started at the origin.
#[derive(Clone, Copy, Debug)]
pub struct BrownianMotion {
    pub dim: usize,
}

impl BrownianMotion {
    pub fn new(dim: usize) -> Self {
        BrownianMotion { dim }
    }
}

impl JumpDiffusionModel for BrownianMotion {
    fn x0(&self) -> Array1<f64> {
        Array1::zeros(self.dim)
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn drift(&self, _x: ArrayView1<f64>) -> Array1<f64> {
        Array1::zeros(self.dim)
    }

    fn diffusion(&self, _x: ArrayView1<f64>) -> Array2<f64> {
        Array2::eye(self.dim)
    }

    fn intensity(&self) -> f64 {
        0.0
    }

    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, _rng: &mut R) -> Array2<f64> {
        Array2::zeros((n, self.dim))
    }
}

// src/models/small_noise.rs
//! Small-Noise Diffusion
//!
//! ```text
//! dX_t = a (b - X_t) dt + √ε · √|α + σ X_t| dW_t
//! ```
//!
//! Each noise level ε is its own immutable model value; sweeping ε means
//! building a new model with [`SmallNoise::with_epsilon`].

use super::model::JumpDiffusionModel;
use crate::error::{validation::*, SdeResult};
use ndarray::{arr1, arr2, Array1, Array2, ArrayView1};
use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SmallNoiseParams {
    pub x0: f64,
    pub a: f64,
    pub b: f64,
    pub sigma: f64,
    pub alpha: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct SmallNoise {
    pub params: SmallNoiseParams,
    pub epsilon: f64,
}

impl SmallNoise {
    pub fn new(params: SmallNoiseParams, epsilon: f64) -> SdeResult<Self> {
        validate_finite("x0", params.x0)?;
        validate_finite("a", params.a)?;
        validate_finite("b", params.b)?;
        validate_finite("sigma", params.sigma)?;
        validate_finite("alpha", params.alpha)?;
        validate_non_negative("epsilon", epsilon)?;
        Ok(SmallNoise { params, epsilon })
    }

    pub fn with_epsilon(&self, epsilon: f64) -> SdeResult<Self> {
        Self::new(self.params, epsilon)
    }
}

impl JumpDiffusionModel for SmallNoise {
    fn x0(&self) -> Array1<f64> {
        arr1(&[self.params.x0])
    }

    fn dim(&self) -> usize {
        1
    }

    fn drift(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(|v| self.params.a * (self.params.b - v))
    }

    fn diffusion(&self, x: ArrayView1<f64>) -> Array2<f64> {
        let base = (self.params.alpha + self.params.sigma * x[0]).abs().sqrt();
        arr2(&[[self.epsilon.sqrt() * base]])
    }

    fn intensity(&self) -> f64 {
        0.0
    }

    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, _rng: &mut R) -> Array2<f64> {
        Array2::zeros((n, 1))
    }
}

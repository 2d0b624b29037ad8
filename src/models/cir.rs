// src/models/cir.rs
//! Cox-Ingersoll-Ross Process with Gaussian Jumps
//!
//! # Mathematical Framework
//!
//! ```text
//! dX_t = a (b - X_t) dt + σ √|X_t| dW_t + dN_t
//! ```
//!
//! Where:
//! - a: Mean reversion speed
//! - b: Long-run level
//! - σ: Volatility scale of the square-root diffusion
//! - N: Compound Poisson process with rate λ and `N(0, s²)` jump sizes
//!
//! The absolute value inside the square root keeps the Euler scheme defined
//! when a jump or a large increment pushes the state below zero.

use super::model::JumpDiffusionModel;
use crate::error::{validation::*, SdeResult};
use crate::rng;
use ndarray::{arr1, arr2, Array1, Array2, ArrayView1};
use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CirParams {
    pub x0: f64,
    pub a: f64,        // Mean reversion speed
    pub b: f64,        // Long-run level
    pub sigma: f64,    // Diffusion scale
    pub lambda: f64,   // Jump intensity
    pub jump_std: f64, // Std dev of Gaussian jump size
}

#[derive(Clone, Debug)]
pub struct Cir {
    pub params: CirParams,
}

impl Cir {
    pub fn new(params: CirParams) -> SdeResult<Self> {
        validate_finite("x0", params.x0)?;
        validate_finite("a", params.a)?;
        validate_finite("b", params.b)?;
        validate_non_negative("sigma", params.sigma)?;
        validate_non_negative("lambda", params.lambda)?;
        validate_finite("lambda", params.lambda)?;
        validate_non_negative("jump_std", params.jump_std)?;
        Ok(Cir { params })
    }
}

impl JumpDiffusionModel for Cir {
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
        arr2(&[[self.params.sigma * x[0].abs().sqrt()]])
    }

    fn intensity(&self) -> f64 {
        self.params.lambda
    }

    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64> {
        rng::normal_matrix(rng, n, 1, 0.0, self.params.jump_std)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> CirParams {
        CirParams {
            x0: 5.0,
            a: 0.5,
            b: 3.0,
            sigma: 0.25,
            lambda: 0.25,
            jump_std: 1.0,
        }
    }

    #[test]
    fn test_cir_coefficients() {
        let cir = Cir::new(params()).unwrap();
        let x = arr1(&[4.0]);

        assert_relative_eq!(cir.drift(x.view())[0], 0.5 * (3.0 - 4.0));
        assert_relative_eq!(cir.diffusion(x.view())[[0, 0]], 0.25 * 2.0);
        // Negative states use |x| under the root
        let neg = arr1(&[-4.0]);
        assert_relative_eq!(cir.diffusion(neg.view())[[0, 0]], 0.5);
    }

    #[test]
    fn test_cir_rejects_negative_intensity() {
        let mut p = params();
        p.lambda = -1.0;
        assert!(Cir::new(p).is_err());
    }

    #[test]
    fn test_cir_jump_shape() {
        let cir = Cir::new(params()).unwrap();
        let mut rng = rng::seed_rng_from_u64(1);
        assert_eq!(cir.sample_jumps(7, &mut rng).dim(), (7, 1));
        assert_eq!(cir.sample_jumps(0, &mut rng).dim(), (0, 1));
    }
}

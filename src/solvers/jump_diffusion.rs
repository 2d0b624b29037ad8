// src/solvers/jump_diffusion.rs
//! Combined Jump-Diffusion Sampler
//!
//! # Decomposition
//!
//! ```text
//! X_k = X^cont_k + J(t_k),    ΔJ_k = J(t_k) - J(t_{k-1}),  ΔJ_0 = 0
//! ```
//!
//! `X^cont` is the Euler-Maruyama path of the jump-free SDE and `J` the exact
//! compound Poisson step function resampled on the grid. Jumps are layered
//! onto the continuous path as exogenous shocks: drift and diffusion are
//! evaluated along `X^cont`, never at post-jump states.
//!
//! # Random Draw Order
//!
//! Brownian increments for the whole grid, then arrival gaps, then jump
//! sizes. Keeping the order fixed is what makes a seed reproduce a sample.

use super::euler_maruyama::EulerMaruyama;
use super::jumps::{discretize_schedule, sample_jump_schedule};
use crate::error::SdeResult;
use crate::models::model::JumpDiffusionModel;
use crate::path::{TimeGrid, Trajectory};
use ndarray::{s, Array2};
use rand::Rng;

/// First difference along time with a leading zero row.
pub fn step_deltas(steps: &Array2<f64>) -> Array2<f64> {
    let mut deltas = Array2::zeros(steps.raw_dim());
    if steps.nrows() > 1 {
        let diff = &steps.slice(s![1.., ..]) - &steps.slice(s![..-1, ..]);
        deltas.slice_mut(s![1.., ..]).assign(&diff);
    }
    deltas
}

/// One biased sample of `model` on `grid`.
pub fn sample<M: JumpDiffusionModel, R: Rng + ?Sized>(
    model: &M,
    grid: &TimeGrid,
    rng: &mut R,
) -> SdeResult<Trajectory> {
    let continuous = EulerMaruyama::sample_continuous(model, grid, rng)?;

    let schedule = sample_jump_schedule(model, grid.horizon(), rng)?;
    let jump_path = discretize_schedule(&schedule, grid)?;

    Ok(Trajectory {
        x: continuous.x + &jump_path,
        w: continuous.w,
        jumps: step_deltas(&jump_path),
    })
}

/// `count` consecutive samples drawn from the same generator.
pub fn sample_many<M: JumpDiffusionModel, R: Rng + ?Sized>(
    model: &M,
    grid: &TimeGrid,
    count: usize,
    rng: &mut R,
) -> SdeResult<Vec<Trajectory>> {
    (0..count).map(|_| sample(model, grid, rng)).collect()
}

// src/models/model.rs
use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

/// A jump diffusion `dX = b(X) dt + σ(X) dW + dN`.
///
/// The noise contribution of a step uses the row-vector convention
/// `dW · σ(x)`, so `diffusion` returns a `d × d` matrix whose rows are
/// indexed by Brownian coordinate.
pub trait JumpDiffusionModel {
    fn x0(&self) -> Array1<f64>;

    fn dim(&self) -> usize {
        self.x0().len()
    }

    fn drift(&self, x: ArrayView1<f64>) -> Array1<f64>;

    fn diffusion(&self, x: ArrayView1<f64>) -> Array2<f64>;

    /// Poisson rate of the jump component; zero disables jumps.
    fn intensity(&self) -> f64;

    /// `n` jump sizes drawn in one batch, as an `n × d` matrix.
    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array2<f64>;
}

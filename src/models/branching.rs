// src/models/branching.rs
use crate::error::{validation::*, SdeResult};
use crate::path::JumpSchedule;
use crate::rng;
use ndarray::Array2;
use rand::Rng;
use serde::Deserialize;

/// Branching process with immigration: with `k` individuals present the
/// next arrival comes at rate `immigration + k · branching`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct BranchingParams {
    pub immigration: f64,
    pub branching: f64,
}

pub struct Branching {
    pub params: BranchingParams,
}

impl Branching {
    pub fn new(params: BranchingParams) -> SdeResult<Self> {
        validate_non_negative("immigration", params.immigration)?;
        validate_finite("immigration", params.immigration)?;
        validate_non_negative("branching", params.branching)?;
        validate_finite("branching", params.branching)?;
        Ok(Branching { params })
    }

    pub fn rate(&self, population: usize) -> f64 {
        self.params.immigration + population as f64 * self.params.branching
    }

    /// Unit-size arrivals on `[0, horizon]`; the overshooting arrival is dropped.
    pub fn sample<R: Rng + ?Sized>(&self, horizon: f64, rng: &mut R) -> SdeResult<JumpSchedule> {
        validate_positive("horizon", horizon)?;

        let mut times = Vec::new();
        let mut total = rng::get_exponential_draw(rng, self.rate(0));
        while total <= horizon {
            times.push(total);
            total += rng::get_exponential_draw(rng, self.rate(times.len()));
        }

        let m = times.len();
        JumpSchedule::new(times, Array2::ones((m, 1)), horizon)
    }
}

// src/scenarios/asymptotic.rs
use super::config::AsymptoticConfig;
use crate::error::SdeResult;
use crate::models::small_noise::SmallNoise;
use crate::output::{Points, Record};
use crate::path::TimeGrid;
use crate::rng;
use crate::solvers::jump_diffusion;
use tracing::debug;

pub const SLIDE: u8 = 5;

/// Paths of the small-noise diffusion as ε decreases to zero.
///
/// The generator is re-seeded with the same seed at every level, so sample
/// `k` sees the same Brownian increments at every ε.
pub fn records(cfg: &AsymptoticConfig) -> SdeResult<Vec<Record>> {
    let grid = TimeGrid::new(cfg.horizon, cfg.points)?;
    let base = SmallNoise::new(cfg.params, cfg.max_epsilon)?;

    let mut rows = Vec::with_capacity(cfg.levels * cfg.samples);
    for level in 0..cfg.levels {
        let epsilon = cfg.epsilon(level);
        let model = base.with_epsilon(epsilon)?;
        let mut rng = rng::seed_rng_from_u64(cfg.seed);
        debug!(level, epsilon, "noise level");

        for k in 0..cfg.samples {
            let path = jump_diffusion::sample(&model, &grid, &mut rng)?;
            rows.push(Record {
                epsilon: Some(level),
                sample: Some(k),
                horizon: Some(cfg.horizon),
                points: Some(Points::Series(path.first_coordinate())),
                ..Record::new(SLIDE)
            });
        }
    }
    Ok(rows)
}

// src/scenarios/pass_fail.rs
use super::config::PassFailConfig;
use crate::error::SdeResult;
use crate::models::cir::Cir;
use crate::output::Record;
use crate::path::TimeGrid;
use crate::rng::RngFactory;
use crate::solvers::jump_diffusion;
use tracing::debug;

pub const SLIDE: u8 = 2;

pub const CHART_TYPES: [&str; 3] = ["bound", "ball", "marginal"];

/// Per-time-step records, one diffusion per chart type. Sample `j` of each
/// type is drawn from its own generator seeded with `seed * (j + 1)`.
pub fn records(cfg: &PassFailConfig) -> SdeResult<Vec<Record>> {
    let models = [
        Cir::new(cfg.bound)?,
        Cir::new(cfg.ball)?,
        Cir::new(cfg.marginal)?,
    ];
    let grid = TimeGrid::new(cfg.horizon, cfg.points)?;
    let times = grid.times().to_vec();

    let mut rows = Vec::with_capacity(cfg.samples * models.len() * cfg.points);
    for j in 0..cfg.samples {
        for ((&seed, model), name) in cfg.seeds.iter().zip(&models).zip(CHART_TYPES) {
            let factory = RngFactory::new(seed);
            let mut rng = factory.create_std_rng(j as u64);
            debug!(chart = name, sample = j, seed = factory.seed_for(j as u64), "sampling");

            let path = jump_diffusion::sample(model, &grid, &mut rng)?;
            let template = Record {
                sample: Some(j),
                kind: Some(name.to_string()),
                ..Record::new(SLIDE)
            };
            let jumps = path.jumps.column(0).to_vec();
            rows.extend(Record::time_steps(&template, &times, &path.first_coordinate(), &jumps));
        }
    }
    Ok(rows)
}

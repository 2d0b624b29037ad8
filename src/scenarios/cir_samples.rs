// src/scenarios/cir_samples.rs
use super::config::CirSlideConfig;
use crate::analytics::summary::PathSummary;
use crate::error::SdeResult;
use crate::models::cir::Cir;
use crate::output::Record;
use crate::path::TimeGrid;
use crate::rng;
use crate::solvers::jump_diffusion;
use tracing::info;

pub const SLIDE: u8 = 1;

/// Per-time-step records for repeated samples of one CIR jump diffusion.
pub fn records(cfg: &CirSlideConfig) -> SdeResult<Vec<Record>> {
    let model = Cir::new(cfg.params)?;
    let grid = TimeGrid::new(cfg.horizon, cfg.points)?;
    let times = grid.times().to_vec();
    let mut rng = rng::seed_rng_from_u64(cfg.seed);

    let paths = jump_diffusion::sample_many(&model, &grid, cfg.samples, &mut rng)?;

    let mut rows = Vec::with_capacity(cfg.samples * cfg.points);
    for (j, path) in paths.iter().enumerate() {
        let template = Record {
            sample: Some(j),
            x0: Some(cfg.params.x0),
            a: Some(cfg.params.a),
            b: Some(cfg.params.b),
            sigma: Some(cfg.params.sigma),
            ..Record::new(SLIDE)
        };
        let jumps = path.jumps.column(0).to_vec();
        rows.extend(Record::time_steps(&template, &times, &path.first_coordinate(), &jumps));
    }

    if !paths.is_empty() {
        let summary = PathSummary::terminal(&paths);
        info!(
            slide = SLIDE,
            mean = summary.mean,
            std_dev = summary.std_dev,
            "terminal values"
        );
    }
    Ok(rows)
}

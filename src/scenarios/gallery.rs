// src/scenarios/gallery.rs
//! One path each of Brownian motion, Ornstein-Uhlenbeck, CIR, Poisson, Lévy,
//! a branching process with immigration and a Hawkes process.
//!
//! The first five share the generator seeded with `seed`, in that order; the
//! branching path and then the Hawkes arrivals share a second generator.

use super::config::{matrix, vector, GalleryConfig};
use crate::error::SdeResult;
use crate::models::branching::Branching;
use crate::models::brownian::BrownianMotion;
use crate::models::cir::Cir;
use crate::models::hawkes::Hawkes;
use crate::models::levy::Levy;
use crate::models::model::JumpDiffusionModel;
use crate::models::ou_process::OuProcess;
use crate::models::poisson::PoissonProcess;
use crate::output::{Points, Record};
use crate::path::{to_nested, TimeGrid};
use crate::rng;
use crate::solvers::{jump_diffusion, jumps};
use ndarray::Array1;
use rand::Rng;
use tracing::info;

pub const SLIDE: u8 = 3;

fn path_record<M: JumpDiffusionModel, R: Rng + ?Sized>(
    name: &str,
    model: &M,
    grid: &TimeGrid,
    rng: &mut R,
) -> SdeResult<Record> {
    let path = jump_diffusion::sample(model, grid, rng)?;
    Ok(Record {
        name: Some(name.to_string()),
        horizon: Some(grid.horizon()),
        points: Some(Points::Matrix(to_nested(&path.x))),
        ..Record::new(SLIDE)
    })
}

pub fn records(cfg: &GalleryConfig) -> SdeResult<Vec<Record>> {
    let grid = TimeGrid::new(cfg.horizon, cfg.points)?;
    let mut rng = rng::seed_rng_from_u64(cfg.seed);
    let mut rows = Vec::with_capacity(7);

    rows.push(path_record(
        "brownian",
        &BrownianMotion::new(cfg.brownian_dim),
        &grid,
        &mut rng,
    )?);

    let ou = OuProcess::new(
        Array1::zeros(cfg.ou.mean.len()),
        vector(&cfg.ou.mean),
        matrix("gallery.ou.reversion", &cfg.ou.reversion)?,
        matrix("gallery.ou.volatility", &cfg.ou.volatility)?,
    )?;
    rows.push(path_record("ou", &ou, &grid, &mut rng)?);

    rows.push(path_record("cir", &Cir::new(cfg.cir)?, &grid, &mut rng)?);

    let poisson = PoissonProcess::new(cfg.poisson_rate)?;
    rows.push(path_record("poisson", &poisson, &grid, &mut rng)?);

    let levy = Levy::new(
        Array1::zeros(cfg.levy.drift.len()),
        vector(&cfg.levy.drift),
        matrix("gallery.levy.volatility", &cfg.levy.volatility)?,
        cfg.levy.lambda,
        vector(&cfg.levy.jump_mean),
        matrix("gallery.levy.jump_mix", &cfg.levy.jump_mix)?,
    )?;
    rows.push(path_record("levy", &levy, &grid, &mut rng)?);

    let mut rng = rng::seed_rng_from_u64(cfg.branching_seed);

    let branching_grid = TimeGrid::new(cfg.horizon, cfg.branching_points)?;
    let schedule = Branching::new(cfg.branching)?.sample(cfg.horizon, &mut rng)?;
    info!(arrivals = schedule.len(), "branching population");
    let population = jumps::discretize_schedule(&schedule, &branching_grid)?;
    rows.push(Record {
        name: Some("branching".to_string()),
        horizon: Some(cfg.horizon),
        points: Some(Points::Matrix(to_nested(&population))),
        ..Record::new(SLIDE)
    });

    let arrivals = Hawkes::new(cfg.hawkes)?.sample(cfg.horizon, &mut rng)?;
    info!(arrivals = arrivals.len(), "hawkes arrivals");
    rows.push(Record {
        name: Some("hawkes".to_string()),
        horizon: Some(cfg.horizon),
        jumps: Some(arrivals.jumps.column(0).to_vec()),
        times: Some(arrivals.times),
        a: Some(cfg.hawkes.a),
        b: Some(cfg.hawkes.b),
        x0: Some(cfg.hawkes.x0),
        ..Record::new(SLIDE)
    });

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> GalleryConfig {
        GalleryConfig {
            points: 200,
            branching_points: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_gallery_names_and_shapes() {
        let rows = records(&small()).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.clone().unwrap()).collect();
        assert_eq!(
            names,
            vec!["brownian", "ou", "cir", "poisson", "levy", "branching", "hawkes"]
        );

        let width = |r: &Record| match &r.points {
            Some(Points::Matrix(m)) => (m.len(), m[0].len()),
            _ => (0, 0),
        };
        assert_eq!(width(&rows[0]), (200, 2));
        assert_eq!(width(&rows[1]), (200, 2));
        assert_eq!(width(&rows[2]), (200, 1));
        assert_eq!(width(&rows[3]), (200, 1));
        assert_eq!(width(&rows[4]), (200, 2));
        assert_eq!(width(&rows[5]), (100, 1));

        let hawkes = &rows[6];
        assert!(hawkes.points.is_none());
        assert_eq!(hawkes.jumps.as_ref().map(Vec::len), hawkes.times.as_ref().map(Vec::len));
        assert_eq!(hawkes.x0, Some(10.0));
    }

    #[test]
    fn test_poisson_path_counts_upward() {
        let rows = records(&small()).unwrap();
        if let Some(Points::Matrix(m)) = &rows[3].points {
            assert_eq!(m[0][0], 0.0);
            assert!(m.windows(2).all(|w| w[1][0] - w[0][0] == 0.0 || w[1][0] - w[0][0] >= 1.0));
            assert!(m.iter().all(|row| row[0].fract() == 0.0));
        } else {
            panic!("poisson record has no matrix points");
        }
    }
}

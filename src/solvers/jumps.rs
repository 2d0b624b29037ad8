// src/solvers/jumps.rs
//! Exact Jump Times and Their Grid Discretization
//!
//! # Arrival Times
//!
//! A compound Poisson process with rate λ has i.i.d. `Exp(λ)` gaps between
//! arrivals, so arrival times on `[0, T]` are sampled exactly by
//! accumulating gaps until the running time passes `T`:
//! ```text
//! τ_1 = E_1,  τ_{k+1} = τ_k + E_{k+1},   E_k ~ Exp(λ)
//! ```
//! The first arrival beyond `T` is discarded. Jump sizes for the `m`
//! retained arrivals are drawn afterwards in one batch.
//!
//! # Grid Resampling
//!
//! The jump part of the path is the right-continuous step function
//! `J(t) = Σ_{τ_i ≤ t} Y_i`, read off at each grid point by a single merge
//! of the (sorted) grid and the (sorted) schedule.

use crate::error::{validation::*, SdeError, SdeResult};
use crate::models::model::JumpDiffusionModel;
use crate::path::{JumpSchedule, TimeGrid};
use crate::rng;
use ndarray::{Array1, Array2};
use rand::Rng;

/// Arrival times on `[0, horizon]` with `Exp(rate)` gaps.
pub fn sample_arrival_times<R: Rng + ?Sized>(
    rate: f64,
    horizon: f64,
    rng: &mut R,
) -> SdeResult<Vec<f64>> {
    validate_non_negative("intensity", rate)?;
    validate_finite("intensity", rate)?;

    let mut times = Vec::new();
    let mut total = rng::get_exponential_draw(rng, rate);
    while total <= horizon {
        times.push(total);
        total += rng::get_exponential_draw(rng, rate);
    }
    Ok(times)
}

/// Sample the jump schedule of `model` over `[0, horizon]`.
pub fn sample_jump_schedule<M: JumpDiffusionModel, R: Rng + ?Sized>(
    model: &M,
    horizon: f64,
    rng: &mut R,
) -> SdeResult<JumpSchedule> {
    let d = model.dim();
    let times = sample_arrival_times(model.intensity(), horizon, rng)?;
    if times.is_empty() {
        return Ok(JumpSchedule::empty(d));
    }

    let jumps = model.sample_jumps(times.len(), rng);
    validate_dimension("jump sizes per arrival", times.len(), jumps.nrows())?;
    validate_dimension("jump size width", d, jumps.ncols())?;
    JumpSchedule::new(times, jumps, horizon)
}

/// Step function of `schedule` on `grid`, `N × d`.
///
/// A jump at exactly `t_k` is included at index `k`. Arrivals past the end
/// of the grid are rejected rather than dropped.
pub fn discretize_schedule(schedule: &JumpSchedule, grid: &TimeGrid) -> SdeResult<Array2<f64>> {
    validate_dimension("jump schedule rows", schedule.len(), schedule.jumps.nrows())?;
    if let Some(&last) = schedule.times.last() {
        if last > grid.horizon() {
            return Err(SdeError::InvalidParameters {
                parameter: "arrival time".to_string(),
                value: last,
                constraint: format!("must not exceed the grid horizon {}", grid.horizon()),
            });
        }
    }

    let d = schedule.dim();
    let n = grid.points();
    let mut trajectory = Array2::zeros((n, d));
    if schedule.is_empty() {
        return Ok(trajectory);
    }

    let mut total = Array1::<f64>::zeros(d);
    let mut next = 0;
    for k in 0..n {
        let t = grid.time(k);
        while next < schedule.len() && schedule.times[next] <= t {
            total += &schedule.jumps.row(next);
            next += 1;
        }
        trajectory.row_mut(k).assign(&total);
    }
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::poisson::PoissonProcess;
    use ndarray::array;

    #[test]
    fn test_zero_intensity_gives_empty_schedule() {
        let mut rng = rng::seed_rng_from_u64(11);
        let model = PoissonProcess::new(0.0).unwrap();
        let schedule = sample_jump_schedule(&model, 5.0, &mut rng).unwrap();

        assert!(schedule.is_empty());
        assert_eq!(schedule.jumps.dim(), (0, 1));
    }

    #[test]
    fn test_negative_intensity_rejected() {
        let mut rng = rng::seed_rng_from_u64(11);
        assert!(sample_arrival_times(-1.0, 5.0, &mut rng).is_err());
        assert!(sample_arrival_times(f64::NAN, 5.0, &mut rng).is_err());
    }

    #[test]
    fn test_arrivals_increasing_within_horizon() {
        let mut rng = rng::seed_rng_from_u64(12);
        for _ in 0..200 {
            let times = sample_arrival_times(3.0, 5.0, &mut rng).unwrap();
            assert!(times.windows(2).all(|w| w[1] > w[0]));
            assert!(times.iter().all(|&t| (0.0..=5.0).contains(&t)));
        }
    }

    #[test]
    fn test_schedule_matches_model_dimension() {
        let mut rng = rng::seed_rng_from_u64(13);
        let model = PoissonProcess::new(4.0).unwrap();
        let schedule = sample_jump_schedule(&model, 5.0, &mut rng).unwrap();

        assert_eq!(schedule.jumps.nrows(), schedule.times.len());
        assert_eq!(schedule.dim(), 1);
        assert!(schedule.jumps.iter().all(|&j| j == 1.0));
    }

    #[test]
    fn test_discretize_tie_break_and_accumulation() {
        // grid 0, 1, 2, 3, 4
        let grid = TimeGrid::new(4.0, 5).unwrap();
        let schedule = JumpSchedule::new(
            vec![0.5, 2.0, 2.5, 3.9],
            array![[1.0], [10.0], [100.0], [1000.0]],
            4.0,
        )
        .unwrap();

        let traj = discretize_schedule(&schedule, &grid).unwrap();
        assert_eq!(traj.column(0).to_vec(), vec![0.0, 1.0, 11.0, 111.0, 1111.0]);
    }

    #[test]
    fn test_discretize_jump_at_zero() {
        let grid = TimeGrid::new(1.0, 3).unwrap();
        let schedule = JumpSchedule::new(vec![0.0], array![[2.0, -1.0]], 1.0).unwrap();

        let traj = discretize_schedule(&schedule, &grid).unwrap();
        assert_eq!(traj.row(0).to_vec(), vec![2.0, -1.0]);
        assert_eq!(traj.row(2).to_vec(), vec![2.0, -1.0]);
    }

    #[test]
    fn test_discretize_rejects_arrivals_past_grid() {
        let grid = TimeGrid::new(2.0, 5).unwrap();
        let schedule = JumpSchedule::new(vec![0.5, 2.5], array![[1.0], [1.0]], 3.0).unwrap();
        assert!(discretize_schedule(&schedule, &grid).is_err());

        let inside = JumpSchedule::new(vec![0.5, 2.0], array![[1.0], [1.0]], 2.0).unwrap();
        let traj = discretize_schedule(&inside, &grid).unwrap();
        assert_eq!(traj[[4, 0]], 2.0);
    }

    #[test]
    fn test_discretize_empty_schedule() {
        let grid = TimeGrid::new(5.0, 11).unwrap();
        let traj = discretize_schedule(&JumpSchedule::empty(3), &grid).unwrap();

        assert_eq!(traj.dim(), (11, 3));
        assert!(traj.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_discretize_includes_exactly_earlier_jumps() {
        let mut rng = rng::seed_rng_from_u64(14);
        let grid = TimeGrid::new(5.0, 1000).unwrap();
        for _ in 0..50 {
            let times = sample_arrival_times(2.0, 5.0, &mut rng).unwrap();
            let m = times.len();
            let schedule = JumpSchedule::new(times.clone(), Array2::ones((m, 1)), 5.0).unwrap();
            let traj = discretize_schedule(&schedule, &grid).unwrap();

            for k in 0..grid.points() {
                let t = grid.time(k);
                let expected = times.iter().filter(|&&tau| tau <= t).count() as f64;
                assert_eq!(traj[[k, 0]], expected, "count mismatch at t = {}", t);
            }
        }
    }
}

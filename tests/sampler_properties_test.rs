// tests/sampler_properties_test.rs
use jump_sde::analytics::moments::poisson_count_mean;
use jump_sde::models::cir::{Cir, CirParams};
use jump_sde::models::levy::Levy;
use jump_sde::models::model::JumpDiffusionModel;
use jump_sde::models::poisson::PoissonProcess;
use jump_sde::path::{JumpSchedule, TimeGrid};
use jump_sde::rng;
use jump_sde::solvers::euler_maruyama::EulerMaruyama;
use jump_sde::solvers::jump_diffusion;
use jump_sde::solvers::jumps::{discretize_schedule, sample_jump_schedule};
use ndarray::{array, Array1, Array2, ArrayView1};
use rand::Rng;

/// Zero drift, zero diffusion, no jumps.
struct Frozen {
    x0: Array1<f64>,
}

impl JumpDiffusionModel for Frozen {
    fn x0(&self) -> Array1<f64> {
        self.x0.clone()
    }

    fn drift(&self, x: ArrayView1<f64>) -> Array1<f64> {
        Array1::zeros(x.len())
    }

    fn diffusion(&self, x: ArrayView1<f64>) -> Array2<f64> {
        Array2::zeros((x.len(), x.len()))
    }

    fn intensity(&self) -> f64 {
        0.0
    }

    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, _rng: &mut R) -> Array2<f64> {
        Array2::zeros((n, self.x0.len()))
    }
}

/// Diffusion matrix of the wrong size for the state.
struct Misshapen;

impl JumpDiffusionModel for Misshapen {
    fn x0(&self) -> Array1<f64> {
        array![1.0, 2.0]
    }

    fn drift(&self, _x: ArrayView1<f64>) -> Array1<f64> {
        array![0.0, 0.0]
    }

    fn diffusion(&self, _x: ArrayView1<f64>) -> Array2<f64> {
        Array2::eye(3)
    }

    fn intensity(&self) -> f64 {
        0.0
    }

    fn sample_jumps<R: Rng + ?Sized>(&self, n: usize, _rng: &mut R) -> Array2<f64> {
        Array2::zeros((n, 2))
    }
}

fn cir(lambda: f64) -> Cir {
    Cir::new(CirParams {
        x0: 5.0,
        a: 0.5,
        b: 3.0,
        sigma: 0.25,
        lambda,
        jump_std: 1.0,
    })
    .expect("Valid parameters")
}

fn levy() -> Levy {
    Levy::new(
        array![0.0, 0.0],
        array![1.0, -3.0],
        array![[0.8, 0.0], [0.0, 1.2]],
        3.0,
        array![1.0, 2.0],
        array![[5.0, -1.0], [-1.0, 10.0]],
    )
    .expect("Valid parameters")
}

#[test]
fn test_zero_intensity_has_no_jump_contribution() {
    let grid = TimeGrid::new(5.0, 501).unwrap();
    let model = cir(0.0);
    for seed in 0..50 {
        let mut rng = rng::seed_rng_from_u64(seed);
        let path = jump_diffusion::sample(&model, &grid, &mut rng).unwrap();
        assert!(path.jumps.iter().all(|&j| j == 0.0), "seed {} produced a jump", seed);
    }
}

#[test]
fn test_same_seed_is_bit_identical() {
    let grid = TimeGrid::new(5.0, 1000).unwrap();
    let model = levy();

    let mut rng1 = rng::seed_rng_from_u64(18);
    let mut rng2 = rng::seed_rng_from_u64(18);
    let a = jump_diffusion::sample(&model, &grid, &mut rng1).unwrap();
    let b = jump_diffusion::sample(&model, &grid, &mut rng2).unwrap();

    assert_eq!(a, b);

    let mut rng3 = rng::seed_rng_from_u64(19);
    let c = jump_diffusion::sample(&model, &grid, &mut rng3).unwrap();
    assert_ne!(a.x, c.x);
}

#[test]
fn test_jump_deltas_count_matches_schedule() {
    // Replay the draw order of `sample` to recover the schedule it used
    let grid = TimeGrid::new(5.0, 5000).unwrap();
    let model = PoissonProcess::new(3.0).unwrap();

    for seed in 0..100 {
        let mut rng = rng::seed_rng_from_u64(seed);
        let path = jump_diffusion::sample(&model, &grid, &mut rng).unwrap();

        let mut replay = rng::seed_rng_from_u64(seed);
        EulerMaruyama::sample_continuous(&model, &grid, &mut replay).unwrap();
        let schedule = sample_jump_schedule(&model, grid.horizon(), &mut replay).unwrap();

        let nonzero = path.jumps.iter().filter(|&&j| j != 0.0).count();
        let total: f64 = path.jumps.sum();
        // Two arrivals may share a grid cell, so compare mass as well as count
        assert!(nonzero <= schedule.len());
        assert_eq!(total, schedule.len() as f64, "seed {}", seed);
    }
}

#[test]
fn test_distinct_cells_keep_every_jump() {
    let grid = TimeGrid::new(4.0, 9).unwrap(); // t = 0, 0.5, ..., 4
    let schedule = JumpSchedule::new(
        vec![0.2, 1.3, 1.9, 3.5],
        array![[1.0], [-2.0], [0.5], [4.0]],
        4.0,
    )
    .unwrap();
    let steps = discretize_schedule(&schedule, &grid).unwrap();
    let deltas = jump_diffusion::step_deltas(&steps);

    let nonzero = deltas.iter().filter(|&&j| j != 0.0).count();
    assert_eq!(nonzero, schedule.len());
}

#[test]
fn test_grid_value_includes_exactly_earlier_jumps() {
    let grid = TimeGrid::new(5.0, 11).unwrap(); // t_k = 0.5 k
    let schedule = JumpSchedule::new(
        vec![0.1, 0.7, 1.2, 2.5, 4.9],
        array![[1.0], [2.0], [4.0], [8.0], [16.0]],
        5.0,
    )
    .unwrap();
    let steps = discretize_schedule(&schedule, &grid).unwrap();

    // t_5 = 2.5: the first three arrivals are strictly earlier, 2.5 ties
    assert_eq!(steps[[4, 0]], 7.0);
    assert_eq!(steps[[5, 0]], 15.0);
    assert_eq!(steps[[10, 0]], 31.0);
}

#[test]
fn test_first_value_is_initial_state() {
    let grid = TimeGrid::new(5.0, 500).unwrap();
    let mut rng = rng::seed_rng_from_u64(2);

    let path = jump_diffusion::sample(&levy(), &grid, &mut rng).unwrap();
    assert_eq!(path.x.row(0).to_vec(), vec![0.0, 0.0]);

    let path = jump_diffusion::sample(&cir(5.0), &grid, &mut rng).unwrap();
    assert_eq!(path.x[[0, 0]], 5.0);
}

#[test]
fn test_frozen_model_is_constant() {
    let model = Frozen {
        x0: array![1.5, -0.25, 7.0],
    };
    for (horizon, points) in [(1.0, 2), (5.0, 501), (0.01, 37)] {
        let grid = TimeGrid::new(horizon, points).unwrap();
        let mut rng = rng::seed_rng_from_u64(99);
        let path = jump_diffusion::sample(&model, &grid, &mut rng).unwrap();

        for row in path.x.rows() {
            assert_eq!(row.to_vec(), vec![1.5, -0.25, 7.0]);
        }
    }
}

#[test]
fn test_poisson_count_statistics() {
    let grid = TimeGrid::new(5.0, 1000).unwrap();
    let model = PoissonProcess::new(1.0).unwrap();

    let runs = 4000;
    let counts: Vec<f64> = (0..runs)
        .map(|seed| {
            let mut rng = rng::seed_rng_from_u64(seed);
            let path = jump_diffusion::sample(&model, &grid, &mut rng).unwrap();
            path.x[[999, 0]]
        })
        .collect();

    let mean = counts.iter().sum::<f64>() / runs as f64;
    let variance = counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / (runs - 1) as f64;
    let expected = poisson_count_mean(1.0, 5.0);

    println!("Mean count: {} (expected {})", mean, expected);
    println!("Count variance: {} (expected {})", variance, expected);

    assert!((mean - expected).abs() < 0.15, "mean count {} too far from {}", mean, expected);
    assert!((variance - expected).abs() < 0.6, "variance {} too far from {}", variance, expected);
}

#[test]
fn test_dimension_mismatch_is_an_error() {
    let grid = TimeGrid::new(1.0, 10).unwrap();
    let mut rng = rng::seed_rng_from_u64(1);
    let err = jump_diffusion::sample(&Misshapen, &grid, &mut rng).unwrap_err();
    assert!(format!("{}", err).contains("Dimension mismatch"));
}

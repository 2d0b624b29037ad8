// src/path.rs
//! Time grids, jump schedules and sampled trajectories.

use crate::error::{validation::*, SdeError, SdeResult};
use ndarray::{Array1, Array2};

/// Uniform grid `t_k = k·T/(N-1)`, `k = 0..N-1`, over `[0, T]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    horizon: f64,
    points: usize,
}

impl TimeGrid {
    pub fn new(horizon: f64, points: usize) -> SdeResult<Self> {
        validate_positive("horizon", horizon)?;
        validate_finite("horizon", horizon)?;
        validate_grid_points(points)?;
        Ok(TimeGrid { horizon, points })
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn dt(&self) -> f64 {
        self.horizon / (self.points - 1) as f64
    }

    /// Grid time `t_k`; the last point is exactly the horizon.
    pub fn time(&self, k: usize) -> f64 {
        if k + 1 == self.points {
            return self.horizon;
        }
        k as f64 * self.horizon / (self.points - 1) as f64
    }

    pub fn times(&self) -> Array1<f64> {
        Array1::from_iter((0..self.points).map(|k| self.time(k)))
    }
}

/// Exact arrival times and jump sizes of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpSchedule {
    pub times: Vec<f64>,
    /// One row per arrival, one column per state coordinate.
    pub jumps: Array2<f64>,
}

impl JumpSchedule {
    pub fn empty(dim: usize) -> Self {
        JumpSchedule {
            times: Vec::new(),
            jumps: Array2::zeros((0, dim)),
        }
    }

    /// Build a schedule on `[0, horizon]`, checking that times are strictly
    /// increasing inside it and that every time has a jump row.
    pub fn new(times: Vec<f64>, jumps: Array2<f64>, horizon: f64) -> SdeResult<Self> {
        validate_dimension("jump schedule rows", times.len(), jumps.nrows())?;
        if let Some(first) = times.first() {
            validate_non_negative("arrival time", *first)?;
        }
        if let Some(&last) = times.last() {
            if !(last <= horizon) {
                return Err(SdeError::InvalidParameters {
                    parameter: "arrival time".to_string(),
                    value: last,
                    constraint: format!("must not exceed the horizon {}", horizon),
                });
            }
        }
        for pair in times.windows(2) {
            if !(pair[1] > pair[0]) {
                return Err(SdeError::InvalidParameters {
                    parameter: "arrival time".to_string(),
                    value: pair[1],
                    constraint: format!("must be strictly greater than {}", pair[0]),
                });
            }
        }
        Ok(JumpSchedule { times, jumps })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.jumps.ncols()
    }
}

/// One discretized sample path.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Process values, `N × d`.
    pub x: Array2<f64>,
    /// Cumulative Brownian increments, `N × d`.
    pub w: Array2<f64>,
    /// Jump delta absorbed at each grid point, `N × d`.
    pub jumps: Array2<f64>,
}

impl Trajectory {
    pub fn points(&self) -> usize {
        self.x.nrows()
    }

    pub fn dim(&self) -> usize {
        self.x.ncols()
    }

    /// First coordinate of `x` as a flat vector.
    pub fn first_coordinate(&self) -> Vec<f64> {
        self.x.column(0).to_vec()
    }

    pub fn terminal(&self) -> Array1<f64> {
        self.x.row(self.points() - 1).to_owned()
    }
}

/// Row-major nested copy of a matrix, the shape JSON consumers expect.
pub fn to_nested(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|row| row.to_vec()).collect()
}

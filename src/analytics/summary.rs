// src/analytics/summary.rs
use crate::path::Trajectory;
use statrs::statistics::Statistics;

/// Cross-sectional statistics of a set of path values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl PathSummary {
    pub fn from_values(values: &[f64]) -> Self {
        PathSummary {
            count: values.len(),
            mean: Statistics::mean(values),
            std_dev: Statistics::std_dev(values),
            min: Statistics::min(values),
            max: Statistics::max(values),
        }
    }

    /// Summary of the first coordinate at the final grid point.
    pub fn terminal(paths: &[Trajectory]) -> Self {
        let values: Vec<f64> = paths.iter().map(|p| p.terminal()[0]).collect();
        Self::from_values(&values)
    }
}

/// Running integral `∫_0^{t_k} |X_s| ds` by left-aligned cumulative sums,
/// `dt · Σ_{i ≤ k} |x_i|`.
pub fn running_abs_integral(values: &[f64], dt: f64) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v.abs();
            Some(*acc * dt)
        })
        .collect()
}

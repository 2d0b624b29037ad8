// src/models/hawkes.rs
//! Self-Exciting (Hawkes) Arrivals with Log-Normal Marks
//!
//! # Mathematical Framework
//!
//! Conditional intensity after arrivals `τ_i` with marks `y_i`:
//! ```text
//! λ(t) = a + (x - a) e^{-b t} + Σ_{τ_i < t} y_i e^{-b (t - τ_i)}
//! ```
//!
//! Where:
//! - x: Intensity at time zero
//! - a: Long-run baseline the intensity decays back to
//! - b: Decay rate of the excitation
//! - y_i ~ LogNormal(μ, s): Mark added to the intensity at each arrival
//!
//! # Exact Sampling by Compensator Inversion
//!
//! With `Λ` the integrated intensity, `Λ(τ_{k+1}) - Λ(τ_k)` is a unit
//! exponential. Between arrivals the increment has the closed form
//! ```text
//! a (t - τ_k) - (x - a)(e^{-bt} - e^{-bτ_k}) / b
//!             - Σ y_i (e^{-b(t-τ_i)} - e^{-b(τ_k-τ_i)}) / b
//! ```
//! and the next arrival solves `increment(t) = S`, `S ~ Exp(1)`, with the
//! safeguarded Newton solver. Its derivative is `λ(t)` and, since the
//! intensity relaxes monotonically towards `a` between arrivals,
//! `λ(t) ≥ min(a, λ(τ_k+))` bounds the bracket.

use crate::error::{validation::*, SdeError, SdeResult};
use crate::math_utils;
use crate::path::JumpSchedule;
use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Exp1, LogNormal};
use serde::Deserialize;
use tracing::debug;

const BRACKET_DOUBLINGS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct HawkesParams {
    pub x0: f64,         // Initial intensity
    pub a: f64,          // Baseline intensity
    pub b: f64,          // Excitation decay
    pub mark_mu: f64,    // Log-mean of marks
    pub mark_sigma: f64, // Log-std of marks
}

pub struct Hawkes {
    pub params: HawkesParams,
    marks: LogNormal<f64>,
}

impl Hawkes {
    pub fn new(params: HawkesParams) -> SdeResult<Self> {
        validate_positive("x0", params.x0)?;
        validate_positive("a", params.a)?;
        validate_positive("b", params.b)?;
        validate_finite("mark_mu", params.mark_mu)?;
        validate_non_negative("mark_sigma", params.mark_sigma)?;
        let marks = LogNormal::new(params.mark_mu, params.mark_sigma).map_err(|e| {
            SdeError::InvalidParameters {
                parameter: "mark_sigma".to_string(),
                value: params.mark_sigma,
                constraint: e.to_string(),
            }
        })?;
        Ok(Hawkes { params, marks })
    }

    /// Excitation carried by past arrivals `τ_i < t`.
    fn excitation(&self, t: f64, times: &[f64], marks: &[f64]) -> f64 {
        times
            .iter()
            .zip(marks)
            .filter(|(tau, _)| **tau < t)
            .map(|(&tau, &y)| y * (-self.params.b * (t - tau)).exp())
            .sum()
    }

    /// Last arrival `τ_k` (or 0) and the excitation just after it,
    /// `Σ_{i ≤ k} y_i e^{-b(τ_k - τ_i)}`.
    fn last_state(&self, times: &[f64], marks: &[f64]) -> (f64, f64) {
        let tau_k = times.last().copied().unwrap_or(0.0);
        let excited = times
            .iter()
            .zip(marks)
            .map(|(&tau, &y)| y * (-self.params.b * (tau_k - tau)).exp())
            .sum();
        (tau_k, excited)
    }

    /// Conditional intensity at `t` given the arrivals so far.
    pub fn intensity(&self, t: f64, times: &[f64], marks: &[f64]) -> f64 {
        let p = &self.params;
        p.a + (p.x0 - p.a) * (-p.b * t).exp() + self.excitation(t, times, marks)
    }

    fn intensity_after(&self, t: f64, tau_k: f64, excited: f64) -> f64 {
        let p = &self.params;
        p.a + (p.x0 - p.a) * (-p.b * t).exp() + excited * (-p.b * (t - tau_k)).exp()
    }

    fn increment_after(&self, t: f64, tau_k: f64, excited: f64) -> f64 {
        let p = &self.params;
        p.a * (t - tau_k)
            - (p.x0 - p.a) * ((-p.b * t).exp() - (-p.b * tau_k).exp()) / p.b
            - excited * ((-p.b * (t - tau_k)).exp() - 1.0) / p.b
    }

    /// `Λ(t) - Λ(τ_k)` for `t ≥ τ_k`, where `τ_k` is the last arrival (or 0).
    pub fn compensator_increment(&self, t: f64, times: &[f64], marks: &[f64]) -> f64 {
        let (tau_k, excited) = self.last_state(times, marks);
        self.increment_after(t, tau_k, excited)
    }

    /// Next arrival after the last of `times`, for a given unit-exponential threshold.
    pub fn arrival_for_threshold(
        &self,
        threshold: f64,
        times: &[f64],
        marks: &[f64],
    ) -> SdeResult<f64> {
        let (tau_k, excited) = self.last_state(times, marks);
        self.arrival_after(threshold, tau_k, excited)
    }

    fn arrival_after(&self, threshold: f64, tau_k: f64, excited: f64) -> SdeResult<f64> {
        validate_positive("threshold", threshold)?;
        let floor = self.intensity_after(tau_k, tau_k, excited).min(self.params.a);
        let residual = |t: f64| self.increment_after(t, tau_k, excited) - threshold;

        // threshold / floor bounds the root exactly; widen it past rounding
        let mut span = threshold / floor;
        let mut hi = tau_k + span;
        for _ in 0..BRACKET_DOUBLINGS {
            if residual(hi) >= 0.0 {
                break;
            }
            span *= 2.0;
            hi = tau_k + span;
        }

        math_utils::solve_increasing(
            residual,
            |t| self.intensity_after(t, tau_k, excited),
            tau_k,
            hi,
        )
    }

    /// Arrival times and marks on `[0, horizon]`.
    ///
    /// Draw order per arrival: exponential threshold, then mark. The first
    /// arrival past the horizon is drawn in full and discarded.
    pub fn sample<R: Rng + ?Sized>(&self, horizon: f64, rng: &mut R) -> SdeResult<JumpSchedule> {
        validate_positive("horizon", horizon)?;

        let mut times: Vec<f64> = Vec::new();
        let mut marks: Vec<f64> = Vec::new();
        let (mut tau_k, mut excited) = (0.0, 0.0);
        loop {
            let threshold: f64 = Exp1.sample(rng);
            let arrival = self.arrival_after(threshold, tau_k, excited)?;
            let mark = self.marks.sample(rng);
            if arrival > horizon {
                break;
            }
            excited = excited * (-self.params.b * (arrival - tau_k)).exp() + mark;
            tau_k = arrival;
            times.push(arrival);
            marks.push(mark);
        }

        debug!(arrivals = times.len(), horizon, "sampled hawkes arrivals");
        let m = marks.len();
        let jumps = Array2::from_shape_vec((m, 1), marks).map_err(|e| {
            SdeError::NumericalInstability {
                method: "hawkes".to_string(),
                reason: e.to_string(),
            }
        })?;
        JumpSchedule::new(times, jumps, horizon)
    }
}

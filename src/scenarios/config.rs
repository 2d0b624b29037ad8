// src/scenarios/config.rs
//! Scenario parameters for every slide, with the published data set's values
//! as defaults. Any subset can be overridden from a JSON file.

use super::SlideSet;
use crate::error::{validation::*, SdeError, SdeResult};
use crate::models::branching::BranchingParams;
use crate::models::cir::CirParams;
use crate::models::hawkes::HawkesParams;
use crate::models::small_noise::SmallNoiseParams;
use crate::path::TimeGrid;
use ndarray::{Array1, Array2};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Slide 1: repeated samples of one CIR jump diffusion.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CirSlideConfig {
    pub seed: u64,
    pub horizon: f64,
    pub points: usize,
    pub samples: usize,
    pub params: CirParams,
}

impl Default for CirSlideConfig {
    fn default() -> Self {
        CirSlideConfig {
            seed: 420,
            horizon: 5.0,
            points: 501,
            samples: 10,
            params: CirParams {
                x0: 5.0,
                a: 0.5,
                b: 3.0,
                sigma: 0.25,
                lambda: 0.25,
                jump_std: 1.0,
            },
        }
    }
}

/// Slide 2: one diffusion per chart type, each sample on its own seed.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PassFailConfig {
    /// Base seeds for `bound`, `ball`, `marginal`; sample `j` uses `seed * (j + 1)`.
    pub seeds: [u64; 3],
    pub horizon: f64,
    pub points: usize,
    pub samples: usize,
    pub bound: CirParams,
    pub ball: CirParams,
    pub marginal: CirParams,
}

impl Default for PassFailConfig {
    fn default() -> Self {
        PassFailConfig {
            seeds: [393, 111, 4],
            horizon: 5.0,
            points: 501,
            samples: 2,
            bound: CirParams {
                x0: 0.0,
                a: 3.0,
                b: 2.0,
                sigma: 2.4,
                lambda: 0.3,
                jump_std: 4.0,
            },
            ball: CirParams {
                x0: 0.0,
                a: 0.35,
                b: 8.0,
                sigma: 0.35,
                lambda: 0.25,
                jump_std: 1.0,
            },
            marginal: CirParams {
                x0: 7.0,
                a: 0.5,
                b: 2.0,
                sigma: 0.35,
                lambda: 0.5,
                jump_std: 1.0,
            },
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct OuConfig {
    pub mean: Vec<f64>,
    pub reversion: Vec<Vec<f64>>,
    pub volatility: Vec<Vec<f64>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevyConfig {
    pub drift: Vec<f64>,
    pub volatility: Vec<Vec<f64>>,
    pub lambda: f64,
    pub jump_mean: Vec<f64>,
    pub jump_mix: Vec<Vec<f64>>,
}

/// Slide 3: gallery of processes, one path each.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub seed: u64,
    pub horizon: f64,
    pub points: usize,
    pub brownian_dim: usize,
    pub ou: OuConfig,
    pub cir: CirParams,
    pub poisson_rate: f64,
    pub levy: LevyConfig,
    /// Seeds the generator shared by the branching and Hawkes paths.
    pub branching_seed: u64,
    pub branching_points: usize,
    pub branching: BranchingParams,
    pub hawkes: HawkesParams,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            seed: 18,
            horizon: 5.0,
            points: 5000,
            brownian_dim: 2,
            ou: OuConfig {
                mean: vec![3.0, -2.0],
                reversion: vec![vec![2.0, 0.0], vec![0.0, 3.0]],
                volatility: vec![vec![1.5, 0.0], vec![0.0, 0.5]],
            },
            cir: CirParams {
                x0: 3.0,
                a: 5.0,
                b: 3.0,
                sigma: 0.5,
                lambda: 0.0,
                jump_std: 0.0,
            },
            poisson_rate: 1.0,
            levy: LevyConfig {
                drift: vec![1.0, -3.0],
                volatility: vec![vec![0.8, 0.0], vec![0.0, 1.2]],
                lambda: 3.0,
                jump_mean: vec![1.0, 2.0],
                jump_mix: vec![vec![5.0, -1.0], vec![-1.0, 10.0]],
            },
            branching_seed: 2123,
            branching_points: 1000,
            branching: BranchingParams {
                immigration: 0.7,
                branching: 1.0,
            },
            hawkes: HawkesParams {
                x0: 10.0,
                a: 3.0,
                b: 0.8,
                mark_mu: 0.5,
                mark_sigma: 0.2,
            },
        }
    }
}

/// Slide 4: running integral of |X| under the reference and tilted drifts.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ImportanceConfig {
    pub seed: u64,
    pub horizon: f64,
    pub points: usize,
    pub samples: usize,
    pub x0: f64,
    pub a: f64,
    pub b: f64,
    pub sigma: f64,
    /// Tilted measure uses speed `a * speed_factor` and level `b * level_factor`.
    pub speed_factor: f64,
    pub level_factor: f64,
}

impl Default for ImportanceConfig {
    fn default() -> Self {
        ImportanceConfig {
            seed: 102981,
            horizon: 5.0,
            points: 500,
            samples: 10,
            x0: 0.5,
            a: 0.5,
            b: 0.01,
            sigma: 0.25,
            speed_factor: 1.5,
            level_factor: 200.0,
        }
    }
}

impl ImportanceConfig {
    pub fn reference(&self) -> CirParams {
        CirParams {
            x0: self.x0,
            a: self.a,
            b: self.b,
            sigma: self.sigma,
            lambda: 0.0,
            jump_std: 0.0,
        }
    }

    pub fn tilted(&self) -> CirParams {
        CirParams {
            a: self.a * self.speed_factor,
            b: self.b * self.level_factor,
            ..self.reference()
        }
    }
}

/// Slide 5: paths as the noise level shrinks to zero.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AsymptoticConfig {
    /// Re-seeded at every noise level, so all levels share one noise stream.
    pub seed: u64,
    pub horizon: f64,
    pub points: usize,
    pub samples: usize,
    pub levels: usize,
    pub max_epsilon: f64,
    pub params: SmallNoiseParams,
}

impl Default for AsymptoticConfig {
    fn default() -> Self {
        AsymptoticConfig {
            seed: 2123098,
            horizon: 5.0,
            points: 500,
            samples: 10,
            levels: 25,
            max_epsilon: 0.25,
            params: SmallNoiseParams {
                x0: 0.0,
                a: 2.0,
                b: 3.0,
                sigma: 1.0,
                alpha: 2.0,
            },
        }
    }
}

impl AsymptoticConfig {
    /// `ε_j = max_epsilon · (1 - j / (M - 1))³`, decreasing to zero at the last level.
    pub fn epsilon(&self, level: usize) -> f64 {
        let frac = level as f64 / (self.levels - 1) as f64;
        self.max_epsilon * (1.0 - frac).powi(3)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub cir_samples: CirSlideConfig,
    pub pass_fail: PassFailConfig,
    pub gallery: GalleryConfig,
    pub importance: ImportanceConfig,
    pub asymptotic: AsymptoticConfig,
}

impl ScenarioConfig {
    pub fn from_json_file(path: &Path) -> SdeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SdeError::InvalidConfiguration {
            field: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| SdeError::InvalidConfiguration {
            field: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn validate(&self) -> SdeResult<()> {
        let c = &self.cir_samples;
        TimeGrid::new(c.horizon, c.points)?;

        let p = &self.pass_fail;
        TimeGrid::new(p.horizon, p.points)?;

        let g = &self.gallery;
        TimeGrid::new(g.horizon, g.points)?;
        TimeGrid::new(g.horizon, g.branching_points)?;
        if g.brownian_dim == 0 {
            return Err(SdeError::InvalidConfiguration {
                field: "gallery.brownian_dim".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        validate_non_negative("gallery.poisson_rate", g.poisson_rate)?;

        let i = &self.importance;
        TimeGrid::new(i.horizon, i.points)?;
        validate_finite("importance.speed_factor", i.speed_factor)?;
        validate_finite("importance.level_factor", i.level_factor)?;

        let a = &self.asymptotic;
        TimeGrid::new(a.horizon, a.points)?;
        validate_non_negative("asymptotic.max_epsilon", a.max_epsilon)?;
        if a.levels < 2 {
            return Err(SdeError::InvalidConfiguration {
                field: "asymptotic.levels".to_string(),
                reason: "needs at least 2 noise levels".to_string(),
            });
        }
        Ok(())
    }

    /// Every seed used by the selected slides, in slide order.
    pub fn seeds(&self, slides: SlideSet) -> Vec<u64> {
        let mut seeds = Vec::new();
        if slides.contains(SlideSet::CIR_SAMPLES) {
            seeds.push(self.cir_samples.seed);
        }
        if slides.contains(SlideSet::PASS_FAIL) {
            seeds.extend_from_slice(&self.pass_fail.seeds);
        }
        if slides.contains(SlideSet::GALLERY) {
            seeds.push(self.gallery.seed);
            seeds.push(self.gallery.branching_seed);
        }
        if slides.contains(SlideSet::IMPORTANCE) {
            seeds.push(self.importance.seed);
        }
        if slides.contains(SlideSet::ASYMPTOTIC) {
            seeds.push(self.asymptotic.seed);
        }
        seeds
    }
}

/// Top-level settings for one generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub out: PathBuf,
    pub slides: SlideSet,
    /// Worker threads; `None` uses one per CPU.
    pub threads: Option<usize>,
    pub manifest: bool,
    pub scenarios: ScenarioConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            out: PathBuf::from("data.json"),
            slides: SlideSet::all(),
            threads: None,
            manifest: false,
            scenarios: ScenarioConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> SdeResult<()> {
        if self.slides.is_empty() {
            return Err(SdeError::InvalidConfiguration {
                field: "slides".to_string(),
                reason: "select at least one slide".to_string(),
            });
        }
        if self.threads == Some(0) {
            return Err(SdeError::InvalidConfiguration {
                field: "threads".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        self.scenarios.validate()
    }

    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

pub fn vector(values: &[f64]) -> Array1<f64> {
    Array1::from_vec(values.to_vec())
}

/// Row-major matrix from nested rows, all of equal length.
pub fn matrix(field: &str, rows: &[Vec<f64>]) -> SdeResult<Array2<f64>> {
    let ncols = rows.first().map_or(0, |r| r.len());
    if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
        return Err(SdeError::DimensionMismatch {
            context: field.to_string(),
            expected: ncols,
            actual: bad.len(),
        });
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), ncols), flat).map_err(|e| {
        SdeError::InvalidConfiguration {
            field: field.to_string(),
            reason: e.to_string(),
        }
    })
}

// src/scenarios/mod.rs
//! Slide data sets
//!
//! Each slide is an independent block with its own seeded generator. Blocks
//! run on a rayon pool and their records are concatenated in slide order, so
//! the output does not depend on the thread count.

pub mod asymptotic;
pub mod cir_samples;
pub mod config;
pub mod gallery;
pub mod importance;
pub mod pass_fail;

use crate::error::{SdeError, SdeResult};
use crate::math_utils::Timer;
use crate::output::Record;
use bitflags::bitflags;
use config::{GeneratorConfig, ScenarioConfig};
use rayon::prelude::*;
use tracing::info;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SlideSet: u32 {
        const CIR_SAMPLES = 1 << 0;
        const PASS_FAIL   = 1 << 1;
        const GALLERY     = 1 << 2;
        const IMPORTANCE  = 1 << 3;
        const ASYMPTOTIC  = 1 << 4;
    }
}

impl SlideSet {
    /// Parse slide numbers `1..=5`.
    pub fn from_numbers(numbers: &[u8]) -> SdeResult<Self> {
        let mut set = SlideSet::empty();
        for &n in numbers {
            set |= match n {
                1 => SlideSet::CIR_SAMPLES,
                2 => SlideSet::PASS_FAIL,
                3 => SlideSet::GALLERY,
                4 => SlideSet::IMPORTANCE,
                5 => SlideSet::ASYMPTOTIC,
                other => {
                    return Err(SdeError::InvalidConfiguration {
                        field: "slides".to_string(),
                        reason: format!("unknown slide {} (expected 1-5)", other),
                    })
                }
            };
        }
        Ok(set)
    }

    /// Selected slide numbers in increasing order.
    pub fn numbers(&self) -> Vec<u8> {
        self.iter()
            .map(|flag| flag.bits().trailing_zeros() as u8 + 1)
            .collect()
    }
}

fn run_slide(slide: u8, scenarios: &ScenarioConfig) -> SdeResult<Vec<Record>> {
    let timer = Timer::new();
    let records = match slide {
        1 => cir_samples::records(&scenarios.cir_samples)?,
        2 => pass_fail::records(&scenarios.pass_fail)?,
        3 => gallery::records(&scenarios.gallery)?,
        4 => importance::records(&scenarios.importance)?,
        5 => asymptotic::records(&scenarios.asymptotic)?,
        other => {
            return Err(SdeError::InvalidConfiguration {
                field: "slides".to_string(),
                reason: format!("unknown slide {}", other),
            })
        }
    };
    info!(
        slide,
        records = records.len(),
        elapsed_ms = timer.elapsed_ms(),
        "generated slide"
    );
    Ok(records)
}

/// Build all records for the selected slides.
pub fn generate(config: &GeneratorConfig) -> SdeResult<Vec<Record>> {
    config.validate()?;

    let threads = config.thread_count();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| SdeError::InvalidConfiguration {
            field: "threads".to_string(),
            reason: e.to_string(),
        })?;

    let slides = config.slides.numbers();
    info!(?slides, threads, "generating slide data");

    let blocks: Vec<Vec<Record>> = pool.install(|| {
        slides
            .par_iter()
            .map(|&slide| run_slide(slide, &config.scenarios))
            .collect::<SdeResult<Vec<_>>>()
    })?;

    Ok(blocks.into_iter().flatten().collect())
}

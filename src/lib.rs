//! # jump-sde: Sample Paths of Jump Diffusions
//!
//! A Rust library for simulating jump-diffusion processes of the form
//! ```text
//! dX_t = b(X_t) dt + σ(X_t) dW_t + dN_t
//! ```
//! and exporting the paths as JSON records for slide visualizations.
//!
//! ## Key Features
//!
//! - **Exact jump times**: Compound Poisson arrivals sampled in continuous time
//! - **Euler-Maruyama**: Vector-valued continuous part on a uniform grid
//! - **Process gallery**: CIR, Ornstein-Uhlenbeck, Poisson, Lévy, branching, Hawkes
//! - **Reproducible**: Every sampler takes an explicit, seeded generator
//!
//! ## Quick Start
//!
//! ```rust
//! use jump_sde::models::cir::{Cir, CirParams};
//! use jump_sde::path::TimeGrid;
//! use jump_sde::rng;
//! use jump_sde::solvers::jump_diffusion;
//!
//! let model = Cir::new(CirParams {
//!     x0: 5.0,
//!     a: 0.5,       // Mean reversion speed
//!     b: 3.0,       // Long-run level
//!     sigma: 0.25,  // Diffusion scale
//!     lambda: 0.25, // Jump intensity
//!     jump_std: 1.0,
//! })
//! .expect("Valid parameters");
//!
//! let grid = TimeGrid::new(5.0, 501).expect("Valid grid");
//! let mut rng = rng::seed_rng_from_u64(420);
//! let path = jump_diffusion::sample(&model, &grid, &mut rng).expect("Sample");
//! assert_eq!(path.x[[0, 0]], 5.0);
//! ```

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod path;
pub mod rng;
pub mod scenarios;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use models::model::JumpDiffusionModel;
pub use path::{JumpSchedule, TimeGrid, Trajectory};

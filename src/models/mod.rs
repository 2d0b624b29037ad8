// src/models/mod.rs
pub mod branching;
pub mod brownian;
pub mod cir;
pub mod hawkes;
pub mod levy;
pub mod model;
pub mod ou_process;
pub mod poisson;
pub mod small_noise;

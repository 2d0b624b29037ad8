// src/solvers/mod.rs
pub mod euler_maruyama;
pub mod jump_diffusion;
pub mod jumps;

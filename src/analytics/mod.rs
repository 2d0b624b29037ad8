// src/analytics/mod.rs
pub mod moments;
pub mod summary;

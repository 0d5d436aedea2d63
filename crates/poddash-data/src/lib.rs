//! Data layer for poddash.
//!
//! Responsible for reading the episode metrics CSV into memory and deriving
//! the monthly overview and per-episode download series consumed by the
//! presentation layer.

pub mod aggregator;
pub mod loader;

pub use poddash_core as core;

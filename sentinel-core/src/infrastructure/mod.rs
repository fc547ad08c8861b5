// sentinel-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod config;
pub mod error;
pub mod fs;

pub use fs::{atomic_write, write_json_report};

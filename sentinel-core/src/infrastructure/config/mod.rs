pub mod job;

pub use crate::domain::job::JobConfig;
pub use job::{JobOverrides, apply_overrides, resolve_job_config};

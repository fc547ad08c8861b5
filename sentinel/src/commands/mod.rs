// sentinel/src/commands/mod.rs

pub mod inspect;
pub mod quality;
pub mod remediate;

use anyhow::Context;
use std::path::Path;
use tracing::debug;

use sentinel_core::domain::job::{Engine, JobConfig};
use sentinel_core::infrastructure::config::{JobOverrides, resolve_job_config};

/// Raw job arguments as typed on the command line.
#[derive(Debug, Default)]
pub struct JobArgs {
    pub job_name: Option<String>,
    pub source_path: Option<String>,
    pub quarantine_path: Option<String>,
    pub topic: Option<String>,
    pub engine: Option<String>,
}

pub fn load_job(project_dir: &Path, args: JobArgs) -> anyhow::Result<JobConfig> {
    let engine = args
        .engine
        .as_deref()
        .map(str::parse::<Engine>)
        .transpose()?;

    let overrides = JobOverrides {
        job_name: args.job_name,
        source_path: args.source_path,
        quarantine_path: args.quarantine_path,
        topic: args.topic,
        engine,
    };

    let config = resolve_job_config(project_dir, overrides).with_context(|| {
        format!(
            "Failed to resolve job configuration from {:?}",
            project_dir
        )
    })?;
    debug!(?config, "Resolved job configuration");
    Ok(config)
}

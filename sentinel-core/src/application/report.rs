// sentinel-core/src/application/report.rs

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::job::JobConfig;
use crate::error::SentinelError;
use crate::infrastructure::fs::write_json_report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Quality,
    Remediation,
}

impl ReportKind {
    fn suffix(&self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Remediation => "remediation",
        }
    }
}

/// `<target>/<job>_<kind>.json`
pub fn report_file_name(job_name: &str, kind: ReportKind) -> Result<String, SentinelError> {
    if job_name.contains(['/', '\\']) || job_name.contains("..") {
        return Err(SentinelError::UnsafePath(job_name.to_string()));
    }
    Ok(format!("{}_{}.json", job_name, kind.suffix()))
}

/// Persists a run report under the job's target directory, relative to `job_dir`.
pub fn save_report<T: Serialize>(
    job_dir: &Path,
    config: &JobConfig,
    kind: ReportKind,
    report: &T,
) -> Result<PathBuf, SentinelError> {
    let target = job_dir.join(&config.target_path);
    let file_name = report_file_name(&config.job_name, kind)?;
    let path = write_json_report(&target, &file_name, report)?;
    info!(path = ?path, "Run report written");
    Ok(path)
}

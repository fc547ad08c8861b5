// sentinel-core/src/infrastructure/config/job.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::job::{Engine, JobConfig};
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["sentinel.yaml", "sentinel_job.yaml"];
const DEFAULT_JOB_NAME: &str = "sensor-data-quality";

/// Values passed explicitly by the harness (CLI arguments). They win over
/// the environment, which wins over the file.
#[derive(Debug, Clone, Default)]
pub struct JobOverrides {
    pub job_name: Option<String>,
    pub source_path: Option<String>,
    pub quarantine_path: Option<String>,
    pub topic: Option<String>,
    pub engine: Option<Engine>,
}

// --- LOADER ---

#[instrument(skip(job_dir, overrides))]
pub fn resolve_job_config(
    job_dir: &Path,
    overrides: JobOverrides,
) -> Result<JobConfig, InfrastructureError> {
    // 1. Base: fichier YAML s'il existe, sinon valeurs par défaut
    let mut config = match find_job_config(job_dir) {
        Some(path) => {
            info!(path = ?path, "Loading job configuration");
            load_job_file(&path)?
        }
        None => JobConfig::new(DEFAULT_JOB_NAME),
    };

    // 2. Environment layer
    apply_env_overrides(&mut config);

    // 3. Explicit arguments
    apply_overrides(&mut config, overrides);

    config.validate()?;
    Ok(config)
}

fn find_job_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn load_job_file(path: &Path) -> Result<JobConfig, InfrastructureError> {
    let content = fs::read_to_string(path).map_err(|e| {
        InfrastructureError::ConfigError(format!("Failed to read {:?}: {}", path, e))
    })?;
    let config: JobConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut JobConfig) {
    if let Ok(val) = std::env::var("SENTINEL_JOB_NAME") {
        info!(old = ?config.job_name, new = ?val, "Overriding job name via ENV");
        config.job_name = val;
    }
    if let Ok(val) = std::env::var("SENTINEL_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Ok(val) = std::env::var("SENTINEL_METRICS_NAMESPACE") {
        info!(old = ?config.metrics.namespace, new = ?val, "Overriding metrics namespace via ENV");
        config.metrics.namespace = val;
    }
}

pub fn apply_overrides(config: &mut JobConfig, overrides: JobOverrides) {
    if let Some(v) = overrides.job_name {
        config.job_name = v;
    }
    if let Some(v) = overrides.source_path {
        config.source_path = v;
    }
    if let Some(v) = overrides.quarantine_path {
        config.quarantine_path = v;
    }
    if let Some(v) = overrides.topic {
        config.notification.topic = v;
    }
    if let Some(v) = overrides.engine {
        config.engine = v;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::job::MetricsSink;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_without_file_uses_defaults_and_args() -> Result<()> {
        let dir = tempdir()?;
        let config = resolve_job_config(
            dir.path(),
            JobOverrides {
                job_name: Some("nightly-dq".into()),
                source_path: Some("data/raw".into()),
                ..Default::default()
            },
        )?;

        assert_eq!(config.job_name, "nightly-dq");
        assert_eq!(config.source_path, "data/raw");
        assert_eq!(config.engine, Engine::DuckDB);
        Ok(())
    }

    #[test]
    fn test_arguments_override_file() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("sentinel.yaml"),
            "job-name: from-file\nsource-path: data/a\nmetrics:\n  sink: jsonl\n",
        )?;

        let config = resolve_job_config(
            dir.path(),
            JobOverrides {
                source_path: Some("data/b".into()),
                engine: Some(Engine::DataFusion),
                topic: Some("ops-alerts".into()),
                ..Default::default()
            },
        )?;

        assert_eq!(config.source_path, "data/b");
        assert_eq!(config.engine, Engine::DataFusion);
        assert_eq!(config.notification.topic, "ops-alerts");
        assert_eq!(config.metrics.sink, MetricsSink::Jsonl);
        Ok(())
    }

    #[test]
    fn test_corrupted_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("sentinel_job.yaml"), "job-name: [unclosed")?;

        let res = resolve_job_config(dir.path(), JobOverrides::default());
        assert!(matches!(res, Err(InfrastructureError::YamlError(_))));
        Ok(())
    }

    #[test]
    fn test_blank_job_name_fails_validation() -> Result<()> {
        let dir = tempdir()?;
        let res = resolve_job_config(
            dir.path(),
            JobOverrides {
                job_name: Some(String::new()),
                ..Default::default()
            },
        );
        assert!(matches!(res, Err(InfrastructureError::InvalidConfig(_))));
        Ok(())
    }
}

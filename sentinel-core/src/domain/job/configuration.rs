// src/domain/job/configuration.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::metrics::DEFAULT_NAMESPACE;

/// Engine used to scan the source batch.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    DuckDB,
    DataFusion,
}

impl std::str::FromStr for Engine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "duckdb" => Ok(Self::DuckDB),
            "datafusion" => Ok(Self::DataFusion),
            _ => Err(DomainError::UnknownEngine(s.to_string())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MetricsSink {
    #[default]
    Log,
    Jsonl,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSink {
    #[default]
    Log,
    Outbox,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct MetricsConfig {
    #[validate(length(min = 1, message = "metrics namespace cannot be empty"))]
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub sink: MetricsSink,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            sink: MetricsSink::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct NotificationConfig {
    /// Notification target identifier (topic name or ARN).
    #[validate(length(min = 1, message = "notification topic cannot be empty"))]
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default)]
    pub sink: NotificationSink,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            sink: NotificationSink::default(),
        }
    }
}

/// Everything a check needs to know about the job it runs in.
/// Resolved once by the harness and passed to the use cases.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct JobConfig {
    #[validate(length(min = 1, message = "job name cannot be empty"))]
    #[serde(rename = "job-name")]
    pub job_name: String,

    #[serde(rename = "source-path", default)]
    pub source_path: String,

    #[serde(rename = "quarantine-path", default)]
    pub quarantine_path: String,

    #[serde(default)]
    pub engine: Engine,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    #[serde(default)]
    #[validate(nested)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    #[validate(nested)]
    pub notification: NotificationConfig,
}

impl JobConfig {
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            source_path: String::new(),
            quarantine_path: String::new(),
            engine: Engine::default(),
            target_path: default_target_path(),
            metrics: MetricsConfig::default(),
            notification: NotificationConfig::default(),
        }
    }
}

fn default_target_path() -> String {
    "target".to_string()
}
fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}
fn default_topic() -> String {
    "data-quality-alerts".to_string()
}

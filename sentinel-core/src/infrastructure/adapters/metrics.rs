// sentinel-core/src/infrastructure/adapters/metrics.rs

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::domain::error::DeliveryError;
use crate::domain::metrics::MetricDatum;
use crate::ports::metrics::MetricsEmitter;

/// Observations go to the log stream only.
pub struct LogMetricsEmitter;

#[async_trait]
impl MetricsEmitter for LogMetricsEmitter {
    async fn emit(
        &self,
        namespace: &str,
        observations: &[MetricDatum],
    ) -> Result<(), DeliveryError> {
        for m in observations {
            info!(
                namespace,
                metric = %m.name,
                value = m.value,
                unit = ?m.unit,
                dimensions = ?m.dimensions,
                "📈 metric"
            );
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct MetricLine<'a> {
    timestamp: String,
    namespace: &'a str,
    #[serde(flatten)]
    datum: &'a MetricDatum,
}

/// Appends one JSON object per observation to a local file.
pub struct JsonlMetricsEmitter {
    path: PathBuf,
}

impl JsonlMetricsEmitter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl MetricsEmitter for JsonlMetricsEmitter {
    async fn emit(
        &self,
        namespace: &str,
        observations: &[MetricDatum],
    ) -> Result<(), DeliveryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let timestamp = Utc::now().to_rfc3339();

        let mut buf = String::new();
        for datum in observations {
            let line = MetricLine {
                timestamp: timestamp.clone(),
                namespace,
                datum,
            };
            buf.push_str(&serde_json::to_string(&line)?);
            buf.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buf.as_bytes())?;
        Ok(())
    }
}

// sentinel-core/src/infrastructure/adapters/mod.rs

pub mod csv_files;
pub mod datafusion;
pub mod duckdb;
pub mod memory;
pub mod metrics;
pub mod notifier;
pub mod quarantine;

use std::path::Path;

use crate::domain::job::{Engine, JobConfig, MetricsSink, NotificationSink};
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{BatchSource, MetricsEmitter, NotificationDispatcher};

pub use self::datafusion::DataFusionBatchSource;
pub use self::duckdb::DuckDbBatchSource;
pub use metrics::{JsonlMetricsEmitter, LogMetricsEmitter};
pub use notifier::{LogNotifier, OutboxNotifier};
pub use quarantine::FsQuarantineLister;

pub const METRICS_FILE: &str = "metrics.jsonl";
pub const OUTBOX_FILE: &str = "notifications.jsonl";

pub fn batch_source_for(
    engine: Engine,
    source: &Path,
) -> Result<Box<dyn BatchSource>, InfrastructureError> {
    Ok(match engine {
        Engine::DuckDB => Box::new(DuckDbBatchSource::new(source)?),
        Engine::DataFusion => Box::new(DataFusionBatchSource::new(source)),
    })
}

pub fn metrics_emitter_for(config: &JobConfig, target_dir: &Path) -> Box<dyn MetricsEmitter> {
    match config.metrics.sink {
        MetricsSink::Log => Box::new(LogMetricsEmitter),
        MetricsSink::Jsonl => Box::new(JsonlMetricsEmitter::new(target_dir.join(METRICS_FILE))),
    }
}

pub fn notifier_for(config: &JobConfig, target_dir: &Path) -> Box<dyn NotificationDispatcher> {
    match config.notification.sink {
        NotificationSink::Log => Box::new(LogNotifier),
        NotificationSink::Outbox => Box::new(OutboxNotifier::new(target_dir.join(OUTBOX_FILE))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::profile_batch;
    use crate::domain::quality::{BatchProfile, ColumnProfile};
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    // Three files: reordered header, upper-case extension, a missing column.
    fn write_mixed_batch(dir: &Path) -> Result<()> {
        fs::write(
            dir.join("a.csv"),
            "sensor_id,temperature,humidity\n\
             s1,20.0,40.0\n\
             s2,21.0,41.0\n\
             s3,,42.0\n",
        )?;
        fs::write(
            dir.join("b.CSV"),
            "sensor_id,humidity,temperature\n\
             s4,95.0,-10.0\n\
             s5,90.0,-20.0\n\
             s6,101.0,30.0\n",
        )?;
        fs::create_dir_all(dir.join("2024-06-02"))?;
        fs::write(
            dir.join("2024-06-02/c.csv"),
            "sensor_id,temperature\n\
             s7,150.0\n\
             s8,22.0\n",
        )?;
        Ok(())
    }

    fn column(name: &str, null_count: u64, outlier_count: u64) -> ColumnProfile {
        ColumnProfile {
            name: name.to_string(),
            present: true,
            null_count,
            outlier_count,
        }
    }

    #[tokio::test]
    async fn test_engines_profile_mixed_directory_identically() -> Result<()> {
        let dir = tempdir()?;
        write_mixed_batch(dir.path())?;

        let expected = BatchProfile {
            row_count: 8,
            columns: vec![
                column("sensor_id", 0, 0),
                column("temperature", 1, 1),
                column("humidity", 2, 1),
            ],
        };

        let duckdb = batch_source_for(Engine::DuckDB, dir.path())?;
        let datafusion = batch_source_for(Engine::DataFusion, dir.path())?;

        let from_duckdb = profile_batch(duckdb.as_ref()).await?;
        let from_datafusion = profile_batch(datafusion.as_ref()).await?;

        assert_eq!(from_duckdb, expected);
        assert_eq!(from_datafusion, from_duckdb);
        Ok(())
    }

    #[tokio::test]
    async fn test_engines_agree_on_single_uppercase_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("READINGS.CSV");
        fs::write(&path, "sensor_id,temperature,humidity\ns1,20.0,140.0\n")?;

        let duckdb = batch_source_for(Engine::DuckDB, &path)?;
        let datafusion = batch_source_for(Engine::DataFusion, &path)?;

        let from_duckdb = profile_batch(duckdb.as_ref()).await?;
        assert_eq!(from_duckdb.row_count, 1);
        assert_eq!(from_duckdb.outlier_count(), 1);
        assert_eq!(profile_batch(datafusion.as_ref()).await?, from_duckdb);
        Ok(())
    }
}

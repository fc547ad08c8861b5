// sentinel-core/src/application/quality_check.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, instrument};

use crate::application::delivery::{DeliveryReport, deliver_metrics, deliver_notification};
use crate::application::scoring::score_batch;
use crate::domain::job::JobConfig;
use crate::domain::metrics::{MetricDatum, quality_observations};
use crate::domain::notification::{MetricsSummary, NotificationPayload, build_payload};
use crate::domain::quality::{QualityAssessment, StatusClassifier, StatusOutcome};
use crate::ports::{BatchSource, MetricsEmitter, NotificationDispatcher};

#[derive(Debug, Clone, Serialize)]
pub struct QualityRunReport {
    pub job_name: String,
    pub source: String,
    pub evaluated_at: DateTime<Utc>,
    pub assessment: QualityAssessment,
    pub outcome: StatusOutcome,
    pub observations: Vec<MetricDatum>,
    pub notification: NotificationPayload,
    pub delivery: DeliveryReport,
}

/// Source -> Score -> Classify -> {Emit, Notify}, once.
/// Always returns a report: scan faults are absorbed by the scorer, delivery
/// faults are recorded in `delivery`.
#[instrument(skip_all, fields(job = %config.job_name))]
pub async fn run_quality_check(
    config: &JobConfig,
    source: &dyn BatchSource,
    metrics: &dyn MetricsEmitter,
    notifier: &dyn NotificationDispatcher,
) -> QualityRunReport {
    let start = Instant::now();
    info!("🚀 Starting {} on {}", config.job_name, source.describe());

    let assessment = score_batch(source).await;
    info!(
        rows = assessment.row_count,
        nulls = assessment.null_count,
        outliers = assessment.outlier_count,
        score = assessment.quality_score,
        "📊 Batch scored"
    );

    let outcome = StatusClassifier::classify(&assessment);
    let observations = quality_observations(&config.job_name, &assessment, &outcome);

    let summary = MetricsSummary {
        namespace: config.metrics.namespace.clone(),
        job_name: config.job_name.clone(),
    };
    let notification = build_payload(&outcome, Some(&summary));

    let mut delivery = DeliveryReport::default();
    deliver_metrics(
        metrics,
        &config.metrics.namespace,
        &observations,
        &mut delivery,
    )
    .await;
    deliver_notification(
        notifier,
        &config.notification.topic,
        &notification,
        &mut delivery,
    )
    .await;

    info!(
        status = %outcome.status,
        "✅ {} ({:.2?})",
        outcome.message,
        start.elapsed()
    );

    QualityRunReport {
        job_name: config.job_name.clone(),
        source: source.describe(),
        evaluated_at: Utc::now(),
        assessment,
        outcome,
        observations,
        notification,
        delivery,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::delivery::test_doubles::{
        FailingSink, RecordingEmitter, RecordingNotifier,
    };
    use crate::domain::error::ScanError;
    use crate::domain::quality::{Batch, QualityStatus, Record, ValidRange, Value};
    use async_trait::async_trait;

    fn reading(temperature: f64) -> Record {
        Record::from([
            ("sensor_id".to_string(), Value::from("sensor_001")),
            ("temperature".to_string(), Value::from(temperature)),
            ("humidity".to_string(), Value::from(48.0)),
        ])
    }

    fn config() -> JobConfig {
        JobConfig::new("sensor-dq")
    }

    #[tokio::test]
    async fn test_scenario_clean_batch_is_success() {
        let batch = Batch::from_records((0..200).map(|_| reading(22.0)).collect());
        let emitter = RecordingEmitter::default();
        let notifier = RecordingNotifier::default();

        let report = run_quality_check(&config(), &batch, &emitter, &notifier).await;

        assert_eq!(report.assessment.quality_score, 100.0);
        assert_eq!(report.outcome.status, QualityStatus::Success);
        assert!(report.delivery.metrics_delivered);
        assert!(report.delivery.notification_delivered);

        let emitted = emitter.emitted.lock().unwrap();
        assert_eq!(emitted.len(), 1);
        let (namespace, observations) = &emitted[0];
        assert_eq!(namespace, "DataQuality/SensorTelemetry");
        assert_eq!(observations.len(), 6);
        let job_status = observations.iter().find(|m| m.name == "JobStatus").unwrap();
        assert_eq!(job_status.value, 2.0);

        let published = notifier.published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].0, "data-quality-alerts");
        assert_eq!(published[0].1.subject, "Data Quality Check - SUCCESS");
        assert!(published[0].1.message.contains("Job: sensor-dq"));
    }

    #[tokio::test]
    async fn test_scenario_small_batch_with_outliers() {
        let mut records: Vec<Record> = (0..3).map(|_| reading(22.0)).collect();
        records.push(reading(250.0));
        records.push(reading(-60.0));
        let batch = Batch::from_records(records);

        let report = run_quality_check(
            &config(),
            &batch,
            &RecordingEmitter::default(),
            &RecordingNotifier::default(),
        )
        .await;

        assert_eq!(report.assessment.quality_score, 60.0);
        assert_eq!(report.outcome.status, QualityStatus::QualityIssues);
        assert_eq!(report.notification.subject, "Data Quality Check - QUALITY_ISSUES");
    }

    #[tokio::test]
    async fn test_scenario_empty_batch_job_status_zero() {
        let emitter = RecordingEmitter::default();
        let report = run_quality_check(
            &config(),
            &Batch::default(),
            &emitter,
            &RecordingNotifier::default(),
        )
        .await;

        assert_eq!(report.outcome.status, QualityStatus::NoData);
        assert_eq!(report.assessment.quality_score, 0.0);
        let job_status = report
            .observations
            .iter()
            .find(|m| m.name == "JobStatus")
            .unwrap();
        assert_eq!(job_status.value, 0.0);
    }

    #[tokio::test]
    async fn test_delivery_failures_do_not_change_outcome() {
        let batch = Batch::from_records((0..20).map(|_| reading(22.0)).collect());

        let report = run_quality_check(&config(), &batch, &FailingSink, &FailingSink).await;

        assert_eq!(report.outcome.status, QualityStatus::Success);
        assert!(!report.delivery.metrics_delivered);
        assert!(!report.delivery.notification_delivered);
        assert_eq!(report.delivery.failures.len(), 2);
    }

    struct BrokenSource;

    #[async_trait]
    impl BatchSource for BrokenSource {
        async fn row_count(&self) -> Result<u64, ScanError> {
            Ok(40)
        }
        async fn columns(&self) -> Result<Vec<String>, ScanError> {
            Ok(vec!["sensor_id".into(), "temperature".into()])
        }
        async fn null_count(&self, _column: &str) -> Result<u64, ScanError> {
            Err(ScanError::Engine("file truncated".into()))
        }
        async fn out_of_range_count(
            &self,
            _column: &str,
            _range: ValidRange,
        ) -> Result<u64, ScanError> {
            Ok(0)
        }
        fn describe(&self) -> String {
            "broken".into()
        }
    }

    #[tokio::test]
    async fn test_scan_fault_reports_indeterminate() {
        let emitter = RecordingEmitter::default();
        let report = run_quality_check(
            &config(),
            &BrokenSource,
            &emitter,
            &RecordingNotifier::default(),
        )
        .await;

        assert_eq!(report.assessment.quality_score, 50.0);
        assert_eq!(report.outcome.status, QualityStatus::Indeterminate);
        assert!(report.outcome.message.contains("file truncated"));

        let job_status = report
            .observations
            .iter()
            .find(|m| m.name == "JobStatus")
            .unwrap();
        assert_eq!(job_status.value, -1.0);
    }
}

// sentinel-core/src/domain/metrics.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::quality::{QualityAssessment, StatusOutcome};

pub const DEFAULT_NAMESPACE: &str = "DataQuality/SensorTelemetry";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricUnit {
    Count,
    Percent,
    None,
}

/// One named observation, shaped for a dimensional metrics store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDatum {
    pub name: String,
    pub value: f64,
    pub unit: MetricUnit,
    pub dimensions: BTreeMap<String, String>,
}

impl MetricDatum {
    fn new(
        name: &str,
        value: f64,
        unit: MetricUnit,
        dimensions: &BTreeMap<String, String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit,
            dimensions: dimensions.clone(),
        }
    }
}

/// Observation set of one quality evaluation.
pub fn quality_observations(
    job_name: &str,
    assessment: &QualityAssessment,
    outcome: &StatusOutcome,
) -> Vec<MetricDatum> {
    let dims = BTreeMap::from([
        ("JobName".to_string(), job_name.to_string()),
        ("Status".to_string(), outcome.status.as_str().to_string()),
    ]);

    vec![
        MetricDatum::new(
            "RecordCount",
            assessment.row_count as f64,
            MetricUnit::Count,
            &dims,
        ),
        MetricDatum::new(
            "QualityScore",
            assessment.quality_score,
            MetricUnit::Percent,
            &dims,
        ),
        MetricDatum::new(
            "NullCount",
            assessment.null_count as f64,
            MetricUnit::Count,
            &dims,
        ),
        MetricDatum::new(
            "OutlierCount",
            assessment.outlier_count as f64,
            MetricUnit::Count,
            &dims,
        ),
        MetricDatum::new(
            "JobStatus",
            f64::from(outcome.status.job_status_code()),
            MetricUnit::None,
            &dims,
        ),
        MetricDatum::new("JobCompletion", 1.0, MetricUnit::Count, &dims),
    ]
}

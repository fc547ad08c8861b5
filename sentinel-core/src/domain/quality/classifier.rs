// sentinel-core/src/domain/quality/classifier.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::quality::scorer::QualityAssessment;

pub const MIN_QUALITY_SCORE: f64 = 70.0;
pub const MIN_ROW_COUNT: u64 = 10;

// Failure < Warning < Success: declaration order drives the derived Ord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Failure,
    Warning,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityStatus {
    Indeterminate,
    NoData,
    QualityIssues,
    LowVolume,
    Success,
}

impl QualityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Indeterminate => "INDETERMINATE",
            Self::NoData => "NO_DATA",
            Self::QualityIssues => "QUALITY_ISSUES",
            Self::LowVolume => "LOW_VOLUME",
            Self::Success => "SUCCESS",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::NoData | Self::QualityIssues => Severity::Failure,
            Self::Indeterminate | Self::LowVolume => Severity::Warning,
            Self::Success => Severity::Success,
        }
    }

    /// Value of the `JobStatus` metric: -1 error, 0 failure, 1 warning, 2 full success.
    pub fn job_status_code(&self) -> i8 {
        match self {
            Self::Indeterminate => -1,
            Self::NoData | Self::QualityIssues => 0,
            Self::LowVolume => 1,
            Self::Success => 2,
        }
    }
}

impl fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusOutcome {
    pub status: QualityStatus,
    pub severity: Severity,
    pub message: String,
}

/// One row of the decision table.
pub struct ClassificationRule {
    pub status: QualityStatus,
    pub applies: fn(&QualityAssessment) -> bool,
}

/// Evaluated top-down, first match wins. The order is the priority of failure modes:
/// a broken measurement, then missing data, then bad data, then thin data.
pub const CLASSIFICATION_RULES: [ClassificationRule; 5] = [
    ClassificationRule {
        status: QualityStatus::Indeterminate,
        applies: |a| a.is_indeterminate(),
    },
    ClassificationRule {
        status: QualityStatus::NoData,
        applies: |a| a.row_count == 0,
    },
    ClassificationRule {
        status: QualityStatus::QualityIssues,
        applies: |a| a.quality_score < MIN_QUALITY_SCORE,
    },
    ClassificationRule {
        status: QualityStatus::LowVolume,
        applies: |a| a.row_count < MIN_ROW_COUNT,
    },
    ClassificationRule {
        status: QualityStatus::Success,
        applies: |_| true,
    },
];

pub struct StatusClassifier;

impl StatusClassifier {
    pub fn classify(assessment: &QualityAssessment) -> StatusOutcome {
        let status = CLASSIFICATION_RULES
            .iter()
            .find(|rule| (rule.applies)(assessment))
            .map(|rule| rule.status)
            .unwrap_or(QualityStatus::Success);

        StatusOutcome {
            status,
            severity: status.severity(),
            message: Self::message(status, assessment),
        }
    }

    fn message(status: QualityStatus, a: &QualityAssessment) -> String {
        match status {
            QualityStatus::Indeterminate => format!(
                "Quality scoring failed ({}); reporting neutral score {:.1}",
                a.fault.as_deref().unwrap_or("unknown fault"),
                a.quality_score
            ),
            QualityStatus::NoData => "No data found in source".to_string(),
            QualityStatus::QualityIssues => format!(
                "Data quality issues detected: score {:.1} ({} nulls, {} outliers)",
                a.quality_score, a.null_count, a.outlier_count
            ),
            QualityStatus::LowVolume => format!(
                "Low data volume: {} records (quality score {:.1})",
                a.row_count, a.quality_score
            ),
            QualityStatus::Success => format!(
                "Data quality check passed: {} records processed (quality score {:.1})",
                a.row_count, a.quality_score
            ),
        }
    }
}

// sentinel-core/src/domain/quality/scorer.rs

use serde::{Deserialize, Serialize};

/// Score reported when the batch could not be measured.
pub const NEUTRAL_SCORE: f64 = 50.0;
pub const MAX_SCORE: f64 = 100.0;

/// Observed counts for one watched column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub present: bool,
    pub null_count: u64,
    pub outlier_count: u64,
}

impl ColumnProfile {
    pub fn absent(name: &str) -> Self {
        Self {
            name: name.to_string(),
            present: false,
            null_count: 0,
            outlier_count: 0,
        }
    }
}

/// Raw measurements of a batch, before any judgement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchProfile {
    pub row_count: u64,
    pub columns: Vec<ColumnProfile>,
}

impl BatchProfile {
    pub fn null_count(&self) -> u64 {
        self.columns.iter().map(|c| c.null_count).sum()
    }

    pub fn outlier_count(&self) -> u64 {
        self.columns.iter().map(|c| c.outlier_count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub row_count: u64,
    pub null_count: u64,
    pub outlier_count: u64,
    pub quality_score: f64,
    /// Set only when scanning failed and the score is the neutral default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

impl QualityAssessment {
    pub fn neutral(row_count: u64, reason: impl Into<String>) -> Self {
        Self {
            row_count,
            null_count: 0,
            outlier_count: 0,
            quality_score: NEUTRAL_SCORE,
            fault: Some(reason.into()),
        }
    }

    pub fn issue_count(&self) -> u64 {
        self.null_count + self.outlier_count
    }

    pub fn is_indeterminate(&self) -> bool {
        self.fault.is_some()
    }
}

/// Each issue, normalized by volume, takes a linear bite out of 100 points.
/// An empty batch scores 0: no data is a pipeline failure, not a clean run.
pub fn compute_quality_score(row_count: u64, issue_count: u64) -> f64 {
    if row_count == 0 {
        return 0.0;
    }
    let penalty = issue_count as f64 * MAX_SCORE / row_count as f64;
    (MAX_SCORE - penalty).max(0.0)
}

pub struct QualityScorer;

impl QualityScorer {
    pub fn assess(profile: &BatchProfile) -> QualityAssessment {
        if profile.row_count == 0 {
            return QualityAssessment {
                row_count: 0,
                null_count: 0,
                outlier_count: 0,
                quality_score: 0.0,
                fault: None,
            };
        }

        let null_count = profile.null_count();
        let outlier_count = profile.outlier_count();

        QualityAssessment {
            row_count: profile.row_count,
            null_count,
            outlier_count,
            quality_score: compute_quality_score(profile.row_count, null_count + outlier_count),
            fault: None,
        }
    }
}

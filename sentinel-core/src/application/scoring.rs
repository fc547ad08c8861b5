// sentinel-core/src/application/scoring.rs

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::domain::error::ScanError;
use crate::domain::quality::{
    BatchProfile, ColumnProfile, QualityAssessment, QualityScorer, WATCHED_COLUMNS,
};
use crate::ports::batch_source::BatchSource;

/// A scan that broke halfway. `rows_read` is kept when the row count was
/// obtained before the fault.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("scan of '{source_name}' failed: {error}")]
pub struct ScanFault {
    pub source_name: String,
    pub rows_read: Option<u64>,
    pub error: ScanError,
}

/// Collects the counts the scorer needs, column by column. Watched columns
/// missing from the batch are reported as absent with zero issues.
#[instrument(skip(source), fields(batch = %source.describe()))]
pub async fn profile_batch(source: &dyn BatchSource) -> Result<BatchProfile, ScanFault> {
    let fault = |rows_read: Option<u64>, error: ScanError| ScanFault {
        source_name: source.describe(),
        rows_read,
        error,
    };

    let row_count = source.row_count().await.map_err(|e| fault(None, e))?;
    if row_count == 0 {
        return Ok(BatchProfile::default());
    }

    let present = source
        .columns()
        .await
        .map_err(|e| fault(Some(row_count), e))?;

    let mut columns = Vec::with_capacity(WATCHED_COLUMNS.len());
    for watched in WATCHED_COLUMNS {
        if !present.iter().any(|c| c == watched.name) {
            debug!(column = watched.name, "Watched column absent from batch");
            columns.push(ColumnProfile::absent(watched.name));
            continue;
        }

        let null_count = source
            .null_count(watched.name)
            .await
            .map_err(|e| fault(Some(row_count), e))?;

        let outlier_count = match watched.range {
            Some(range) => source
                .out_of_range_count(watched.name, range)
                .await
                .map_err(|e| fault(Some(row_count), e))?,
            None => 0,
        };

        columns.push(ColumnProfile {
            name: watched.name.to_string(),
            present: true,
            null_count,
            outlier_count,
        });
    }

    Ok(BatchProfile { row_count, columns })
}

/// Scoring with the fault channel visible.
pub async fn try_score_batch(source: &dyn BatchSource) -> Result<QualityAssessment, ScanFault> {
    let profile = profile_batch(source).await?;
    Ok(QualityScorer::assess(&profile))
}

/// Fail-soft scoring: a scan fault never blocks the pipeline, it yields the
/// neutral assessment (score 50) tagged with the fault reason.
pub async fn score_batch(source: &dyn BatchSource) -> QualityAssessment {
    match try_score_batch(source).await {
        Ok(assessment) => assessment,
        Err(fault) => {
            warn!("⚠️  {} - reporting neutral quality score", fault);
            QualityAssessment::neutral(fault.rows_read.unwrap_or(0), fault.error.to_string())
        }
    }
}

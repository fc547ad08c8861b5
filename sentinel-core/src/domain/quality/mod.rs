// sentinel-core/src/domain/quality/mod.rs

pub mod batch;
pub mod classifier;
pub mod scorer;

pub use batch::{Batch, Record, ValidRange, Value, WATCHED_COLUMNS, WatchedColumn};
pub use classifier::{
    CLASSIFICATION_RULES, MIN_QUALITY_SCORE, MIN_ROW_COUNT, QualityStatus, Severity,
    StatusClassifier, StatusOutcome,
};
pub use scorer::{
    BatchProfile, ColumnProfile, NEUTRAL_SCORE, QualityAssessment, QualityScorer,
    compute_quality_score,
};

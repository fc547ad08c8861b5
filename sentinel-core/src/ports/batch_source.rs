// sentinel-core/src/ports/batch_source.rs

// The scorer only needs counts. How the batch is physically scanned (DuckDB,
// DataFusion, a Vec in memory...) stays on the other side of this trait.

use async_trait::async_trait;

use crate::domain::error::ScanError;
use crate::domain::quality::ValidRange;

#[async_trait]
pub trait BatchSource: Send + Sync {
    async fn row_count(&self) -> Result<u64, ScanError>;

    /// Column names of the batch schema.
    async fn columns(&self) -> Result<Vec<String>, ScanError>;

    async fn null_count(&self, column: &str) -> Result<u64, ScanError>;

    /// Non-null values strictly outside `range`.
    async fn out_of_range_count(&self, column: &str, range: ValidRange)
    -> Result<u64, ScanError>;

    /// Human-readable identity of the source, for logs and reports.
    fn describe(&self) -> String;
}

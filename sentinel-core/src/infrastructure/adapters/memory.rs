// sentinel-core/src/infrastructure/adapters/memory.rs

use async_trait::async_trait;

use crate::domain::error::ScanError;
use crate::domain::quality::{Batch, ValidRange};
use crate::ports::batch_source::BatchSource;

#[async_trait]
impl BatchSource for Batch {
    async fn row_count(&self) -> Result<u64, ScanError> {
        Ok(Batch::row_count(self))
    }

    async fn columns(&self) -> Result<Vec<String>, ScanError> {
        Ok(Batch::columns(self).to_vec())
    }

    async fn null_count(&self, column: &str) -> Result<u64, ScanError> {
        Ok(Batch::null_count(self, column))
    }

    async fn out_of_range_count(
        &self,
        column: &str,
        range: ValidRange,
    ) -> Result<u64, ScanError> {
        Batch::out_of_range_count(self, column, range)
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", Batch::row_count(self))
    }
}

// sentinel-core/src/infrastructure/adapters/datafusion.rs

use async_trait::async_trait;
use datafusion::arrow::array::{Array, Int64Array};
use datafusion::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;

// Hexagonal Imports
use crate::domain::error::ScanError;
use crate::domain::quality::ValidRange;
use crate::infrastructure::adapters::csv_files::{resolve_csv_files, sql_identifier};
use crate::ports::batch_source::BatchSource;

const BATCH_TABLE: &str = "sensor_batch";

/// CSV batch registered as a view in a DataFusion session.
pub struct DataFusionBatchSource {
    ctx: Arc<SessionContext>,
    source: PathBuf,
    // true once the table exists, false when the source had no CSV file
    registered: OnceCell<bool>,
}

impl DataFusionBatchSource {
    pub fn new(source: &Path) -> Self {
        Self {
            ctx: Arc::new(SessionContext::new()),
            source: source.to_path_buf(),
            registered: OnceCell::new(),
        }
    }

    async fn ensure_registered(&self) -> Result<bool, ScanError> {
        self.registered
            .get_or_try_init(|| async {
                let files = resolve_csv_files(&self.source)?;

                // One frame per file, matched on header names: files may order
                // or omit columns differently, missing ones read as NULL.
                let mut batch: Option<DataFrame> = None;
                for file in &files {
                    let df = self.read_file(file).await?;
                    batch = Some(match batch {
                        Some(acc) => acc.union_by_name(df).map_err(engine_error)?,
                        None => df,
                    });
                }

                let Some(df) = batch else {
                    return Ok(false);
                };
                self.ctx
                    .register_table(BATCH_TABLE, df.into_view())
                    .map_err(engine_error)?;
                Ok(true)
            })
            .await
            .copied()
    }

    async fn read_file(&self, file: &Path) -> Result<DataFrame, ScanError> {
        // The listing table filters on extension, so give it the file's own
        // (".CSV", or none at all for a file passed directly).
        let extension = file
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        self.ctx
            .read_csv(
                file.to_string_lossy().into_owned(),
                CsvReadOptions::new().file_extension(&extension),
            )
            .await
            .map_err(engine_error)
    }

    async fn count(&self, predicate: Option<String>) -> Result<u64, ScanError> {
        if !self.ensure_registered().await? {
            return Ok(0);
        }

        let sql = match predicate {
            Some(p) => format!("SELECT COUNT(*) FROM {} WHERE {}", BATCH_TABLE, p),
            None => format!("SELECT COUNT(*) FROM {}", BATCH_TABLE),
        };

        let batches = self
            .ctx
            .sql(&sql)
            .await
            .map_err(engine_error)?
            .collect()
            .await
            .map_err(engine_error)?;

        let n = batches
            .iter()
            .find(|b| b.num_rows() > 0)
            .and_then(|b| {
                b.column(0)
                    .as_any()
                    .downcast_ref::<Int64Array>()
                    .map(|a| a.value(0))
            })
            .ok_or_else(|| ScanError::Engine("COUNT(*) returned no value".into()))?;

        Ok(u64::try_from(n).unwrap_or(0))
    }
}

fn engine_error(e: datafusion::error::DataFusionError) -> ScanError {
    ScanError::Engine(format!("datafusion: {}", e))
}

#[async_trait]
impl BatchSource for DataFusionBatchSource {
    async fn row_count(&self) -> Result<u64, ScanError> {
        self.count(None).await
    }

    async fn columns(&self) -> Result<Vec<String>, ScanError> {
        if !self.ensure_registered().await? {
            return Ok(Vec::new());
        }
        let df = self.ctx.table(BATCH_TABLE).await.map_err(engine_error)?;
        Ok(df
            .schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect())
    }

    async fn null_count(&self, column: &str) -> Result<u64, ScanError> {
        self.count(Some(format!("{} IS NULL", sql_identifier(column))))
            .await
    }

    async fn out_of_range_count(
        &self,
        column: &str,
        range: ValidRange,
    ) -> Result<u64, ScanError> {
        let value = format!("CAST({} AS DOUBLE)", sql_identifier(column));
        self.count(Some(format!(
            "({v} < {min:?} OR {v} > {max:?})",
            v = value,
            min = range.min,
            max = range.max
        )))
        .await
    }

    fn describe(&self) -> String {
        format!("datafusion:{}", self.source.display())
    }
}

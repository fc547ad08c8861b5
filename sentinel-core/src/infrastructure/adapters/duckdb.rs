// sentinel-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::OnceCell;

// Imports Hexagonaux
use crate::domain::error::ScanError;
use crate::domain::quality::ValidRange;
use crate::infrastructure::adapters::csv_files::{resolve_csv_files, sql_identifier, sql_literal};
use crate::infrastructure::error::InfrastructureError;
use crate::ports::batch_source::BatchSource;

/// CSV batch scanned through an in-memory DuckDB connection.
/// Files are resolved on the first query and that list is kept: every count of
/// one evaluation sees the same snapshot, even if new files land meanwhile.
pub struct DuckDbBatchSource {
    conn: Arc<Mutex<Connection>>,
    source: PathBuf,
    relation: OnceCell<Option<String>>,
}

impl DuckDbBatchSource {
    pub fn new(source: &Path) -> Result<Self, InfrastructureError> {
        let conn = Connection::open_in_memory_with_flags(Config::default())?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            source: source.to_path_buf(),
            relation: OnceCell::new(),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, ScanError> {
        self.conn
            .lock()
            .map_err(|_| ScanError::Engine("DuckDB Mutex Poisoned".into()))
    }

    /// `None` when the source holds no CSV file at all.
    async fn relation(&self) -> Result<Option<&str>, ScanError> {
        let relation = self
            .relation
            .get_or_try_init(|| async {
                let files = resolve_csv_files(&self.source)?;
                if files.is_empty() {
                    return Ok::<_, ScanError>(None);
                }
                let list: Vec<String> = files
                    .iter()
                    .map(|f| sql_literal(&f.to_string_lossy()))
                    .collect();
                Ok(Some(format!(
                    "read_csv_auto([{}], union_by_name = true)",
                    list.join(", ")
                )))
            })
            .await?;
        Ok(relation.as_deref())
    }

    fn count(&self, relation: &str, predicate: Option<String>) -> Result<u64, ScanError> {
        let sql = match predicate {
            Some(p) => format!("SELECT COUNT(*) FROM {} WHERE {}", relation, p),
            None => format!("SELECT COUNT(*) FROM {}", relation),
        };
        let conn = self.lock()?;
        let n: i64 = conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(engine_error)?;
        Ok(u64::try_from(n).unwrap_or(0))
    }
}

fn engine_error(e: duckdb::Error) -> ScanError {
    ScanError::Engine(format!("duckdb: {}", e))
}

#[async_trait]
impl BatchSource for DuckDbBatchSource {
    async fn row_count(&self) -> Result<u64, ScanError> {
        match self.relation().await? {
            Some(rel) => self.count(rel, None),
            None => Ok(0),
        }
    }

    async fn columns(&self) -> Result<Vec<String>, ScanError> {
        let Some(rel) = self.relation().await? else {
            return Ok(Vec::new());
        };
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!("DESCRIBE SELECT * FROM {}", rel))
            .map_err(engine_error)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(engine_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(engine_error)?;
        Ok(names)
    }

    async fn null_count(&self, column: &str) -> Result<u64, ScanError> {
        match self.relation().await? {
            Some(rel) => self.count(rel, Some(format!("{} IS NULL", sql_identifier(column)))),
            None => Ok(0),
        }
    }

    async fn out_of_range_count(
        &self,
        column: &str,
        range: ValidRange,
    ) -> Result<u64, ScanError> {
        let Some(rel) = self.relation().await? else {
            return Ok(0);
        };
        // Explicit cast: a text value in a numeric column must fail the scan, not compare as a string.
        let value = format!("CAST({} AS DOUBLE)", sql_identifier(column));
        let predicate = format!(
            "({v} < {min:?} OR {v} > {max:?})",
            v = value,
            min = range.min,
            max = range.max
        );
        self.count(rel, Some(predicate))
    }

    fn describe(&self) -> String {
        format!("duckdb:{}", self.source.display())
    }
}

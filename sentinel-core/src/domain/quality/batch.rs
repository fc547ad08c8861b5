// sentinel-core/src/domain/quality/batch.rs

use std::collections::BTreeMap;

use crate::domain::error::ScanError;

/// A single cell of a telemetry record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Number(f64),
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

pub type Record = BTreeMap<String, Value>;

/// Closed interval of plausible values. Anything strictly outside is an outlier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
}

impl ValidRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchedColumn {
    pub name: &'static str,
    pub range: Option<ValidRange>,
}

pub const SENSOR_ID: WatchedColumn = WatchedColumn {
    name: "sensor_id",
    range: None,
};
pub const TEMPERATURE: WatchedColumn = WatchedColumn {
    name: "temperature",
    range: Some(ValidRange::new(-50.0, 100.0)),
};
pub const HUMIDITY: WatchedColumn = WatchedColumn {
    name: "humidity",
    range: Some(ValidRange::new(0.0, 100.0)),
};

/// Columns the scorer looks at, in scan order.
pub const WATCHED_COLUMNS: [WatchedColumn; 3] = [SENSOR_ID, TEMPERATURE, HUMIDITY];

/// In-memory tabular batch. The column list is the batch schema: a record
/// missing one of these keys holds a null for it.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Batch {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Builds a batch whose schema is the union of the record keys, in first-seen order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, records }
    }

    pub fn push(&mut self, record: Record) {
        for key in record.keys() {
            if !self.columns.contains(key) {
                self.columns.push(key.clone());
            }
        }
        self.records.push(record);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn null_count(&self, column: &str) -> u64 {
        if !self.has_column(column) {
            return 0;
        }
        self.records
            .iter()
            .filter(|r| matches!(r.get(column), None | Some(Value::Null)))
            .count() as u64
    }

    /// Counts non-null values outside `range`. Text cells are parsed as numbers;
    /// one that does not parse makes the whole column unreadable.
    pub fn out_of_range_count(&self, column: &str, range: ValidRange) -> Result<u64, ScanError> {
        let mut count = 0;
        for record in &self.records {
            let value = match record.get(column) {
                None | Some(Value::Null) => continue,
                Some(Value::Number(n)) => *n,
                Some(Value::Text(s)) => s.trim().parse::<f64>().map_err(|_| ScanError::NonNumeric {
                    column: column.to_string(),
                    value: s.clone(),
                })?,
            };
            if !range.contains(value) {
                count += 1;
            }
        }
        Ok(count)
    }
}

// sentinel-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid quarantine location: '{0}'")]
    #[diagnostic(
        code(sentinel::domain::location),
        help("Use a local directory or an object-store URI such as s3://bucket/prefix.")
    )]
    InvalidLocation(String),

    #[error("Unknown engine: '{0}'")]
    #[diagnostic(code(sentinel::domain::engine), help("Supported engines: duckdb, datafusion."))]
    UnknownEngine(String),
}

/// Fault raised by a batch source while it is being scanned.
/// The scorer never propagates it: it is absorbed into a neutral assessment.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Column '{column}' holds a non-numeric value: {value:?}")]
    NonNumeric { column: String, value: String },

    #[error("Batch engine error: {0}")]
    Engine(String),
}

/// Fault raised while enumerating a quarantine location.
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("invalid quarantine location: {0}")]
    InvalidLocation(String),

    #[error("no lister available for {0}")]
    Unsupported(String),

    #[error("{0}")]
    Backend(String),
}

/// Transport fault on the metrics or notification side.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Delivery to '{sink}' failed: {reason}")]
    Sink { sink: String, reason: String },

    #[error("Delivery I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Delivery serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

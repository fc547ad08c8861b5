// sentinel-core/src/error.rs

use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SentinelError {
    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing, Config) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS APPLICATIVES ---
    #[error("Unsafe report name: {0}")]
    #[diagnostic(help("Job names end up in file names; avoid path separators and '..'."))]
    UnsafePath(String),
}

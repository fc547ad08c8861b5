// sentinel-core/src/domain/remediation/detector.rs

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemediationStatus {
    NoQuarantine,
    QuarantineDetected,
    Error,
}

impl RemediationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoQuarantine => "NO_QUARANTINE",
            Self::QuarantineDetected => "QUARANTINE_DETECTED",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for RemediationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationOutcome {
    pub file_count: u64,
    pub status: RemediationStatus,
    pub message: String,
}

pub struct RemediationDetector;

impl RemediationDetector {
    pub fn detect(quarantine_object_count: u64) -> RemediationOutcome {
        if quarantine_object_count == 0 {
            return RemediationOutcome {
                file_count: 0,
                status: RemediationStatus::NoQuarantine,
                message: "No quarantined files found".to_string(),
            };
        }

        RemediationOutcome {
            file_count: quarantine_object_count,
            status: RemediationStatus::QuarantineDetected,
            message: format!(
                "Found {} quarantined files requiring attention",
                quarantine_object_count
            ),
        }
    }

    /// Boundary for the lister's result. Detection is advisory: a listing fault
    /// becomes an `ERROR` outcome, never an error for the caller.
    pub fn detect_listing<E: fmt::Display>(listing: Result<u64, E>) -> RemediationOutcome {
        match listing {
            Ok(count) => Self::detect(count),
            Err(e) => RemediationOutcome {
                file_count: 0,
                status: RemediationStatus::Error,
                message: format!("Remediation check failed: {}", e),
            },
        }
    }
}

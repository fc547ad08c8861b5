// sentinel-core/src/domain/remediation/mod.rs

pub mod detector;
pub mod location;

pub use detector::{RemediationDetector, RemediationOutcome, RemediationStatus};
pub use location::QuarantineLocation;

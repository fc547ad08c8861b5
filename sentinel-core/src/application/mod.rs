// sentinel-core/src/application/mod.rs

pub mod delivery;
pub mod quality_check;
pub mod remediation_check;
pub mod report;
pub mod scoring;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI fait `use sentinel_core::application::{run_quality_check, run_remediation_check};`

pub use delivery::DeliveryReport;
pub use quality_check::{QualityRunReport, run_quality_check};
pub use remediation_check::{RemediationRunReport, run_remediation_check};
pub use report::{ReportKind, save_report};
pub use scoring::{ScanFault, profile_batch, score_batch, try_score_batch};

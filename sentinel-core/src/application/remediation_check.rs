// sentinel-core/src/application/remediation_check.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::application::delivery::{DeliveryReport, deliver_notification};
use crate::domain::error::ListingError;
use crate::domain::job::JobConfig;
use crate::domain::notification::{NotificationPayload, build_payload};
use crate::domain::remediation::{
    QuarantineLocation, RemediationDetector, RemediationOutcome, RemediationStatus,
};
use crate::ports::{NotificationDispatcher, QuarantineLister};

#[derive(Debug, Clone, Serialize)]
pub struct RemediationRunReport {
    pub job_name: String,
    pub location: String,
    pub evaluated_at: DateTime<Utc>,
    pub outcome: RemediationOutcome,
    pub notification: NotificationPayload,
    pub delivery: DeliveryReport,
}

/// Lists the quarantine once and publishes the advisory outcome.
/// An unreadable location is reported as `ERROR`, not returned as an error.
#[instrument(skip_all, fields(job = %config.job_name, location = %config.quarantine_path))]
pub async fn run_remediation_check(
    config: &JobConfig,
    lister: &dyn QuarantineLister,
    notifier: &dyn NotificationDispatcher,
) -> RemediationRunReport {
    let listing = match QuarantineLocation::parse(&config.quarantine_path) {
        Ok(location) => lister.object_count(&location).await,
        Err(e) => Err(ListingError::InvalidLocation(e.to_string())),
    };

    let outcome = RemediationDetector::detect_listing(listing);
    match outcome.status {
        RemediationStatus::Error => warn!("❌ {}", outcome.message),
        RemediationStatus::QuarantineDetected => warn!("🔒 {}", outcome.message),
        RemediationStatus::NoQuarantine => info!("✅ {}", outcome.message),
    }

    let notification = build_payload(&outcome, None);
    let mut delivery = DeliveryReport::default();
    deliver_notification(
        notifier,
        &config.notification.topic,
        &notification,
        &mut delivery,
    )
    .await;

    RemediationRunReport {
        job_name: config.job_name.clone(),
        location: config.quarantine_path.clone(),
        evaluated_at: Utc::now(),
        outcome,
        notification,
        delivery,
    }
}

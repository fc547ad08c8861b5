// sentinel-core/src/domain/notification.rs

use serde::{Deserialize, Serialize};

use crate::domain::quality::StatusOutcome;
use crate::domain::remediation::RemediationOutcome;

pub const QUALITY_CHECK_NAME: &str = "Data Quality Check";
pub const REMEDIATION_CHECK_NAME: &str = "Remediation Check";

/// Anything that can be turned into an operator notification.
pub trait Notifiable {
    fn check_name(&self) -> &'static str;
    fn status_label(&self) -> &'static str;
    fn message(&self) -> &str;
}

impl Notifiable for StatusOutcome {
    fn check_name(&self) -> &'static str {
        QUALITY_CHECK_NAME
    }
    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
    fn message(&self) -> &str {
        &self.message
    }
}

impl Notifiable for RemediationOutcome {
    fn check_name(&self) -> &'static str {
        REMEDIATION_CHECK_NAME
    }
    fn status_label(&self) -> &'static str {
        self.status.as_str()
    }
    fn message(&self) -> &str {
        &self.message
    }
}

/// Where the observations of this run can be found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub namespace: String,
    pub job_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub subject: String,
    pub message: String,
}

pub fn build_payload(
    outcome: &dyn Notifiable,
    summary: Option<&MetricsSummary>,
) -> NotificationPayload {
    let subject = format!("{} - {}", outcome.check_name(), outcome.status_label());

    let message = match summary {
        Some(s) => format!(
            "{}\n\nMetrics:\n  Namespace: {}\n  Job: {}",
            outcome.message(),
            s.namespace,
            s.job_name
        ),
        None => outcome.message().to_string(),
    };

    NotificationPayload { subject, message }
}

// sentinel-core/src/application/delivery.rs

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::metrics::MetricDatum;
use crate::domain::notification::NotificationPayload;
use crate::ports::{MetricsEmitter, NotificationDispatcher};

/// What happened on the way out. Never feeds back into the evaluation result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeliveryReport {
    pub metrics_delivered: bool,
    pub notification_delivered: bool,
    pub failures: Vec<String>,
}

pub async fn deliver_metrics(
    emitter: &dyn MetricsEmitter,
    namespace: &str,
    observations: &[MetricDatum],
    report: &mut DeliveryReport,
) {
    match emitter.emit(namespace, observations).await {
        Ok(()) => {
            debug!(count = observations.len(), "Metrics emitted");
            report.metrics_delivered = true;
        }
        Err(e) => {
            warn!("⚠️  Metrics emission failed: {}", e);
            report.failures.push(format!("metrics: {}", e));
        }
    }
}

pub async fn deliver_notification(
    notifier: &dyn NotificationDispatcher,
    topic: &str,
    payload: &NotificationPayload,
    report: &mut DeliveryReport,
) {
    match notifier.publish(topic, payload).await {
        Ok(()) => {
            debug!(topic, "Notification published");
            report.notification_delivered = true;
        }
        Err(e) => {
            warn!("⚠️  Notification to '{}' failed: {}", topic, e);
            report.failures.push(format!("notification: {}", e));
        }
    }
}

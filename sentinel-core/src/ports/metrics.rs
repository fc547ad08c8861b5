// sentinel-core/src/ports/metrics.rs

use async_trait::async_trait;

use crate::domain::error::DeliveryError;
use crate::domain::metrics::MetricDatum;

/// Fire-and-forget sink for observations. Callers log failures and move on.
#[async_trait]
pub trait MetricsEmitter: Send + Sync {
    async fn emit(&self, namespace: &str, observations: &[MetricDatum])
    -> Result<(), DeliveryError>;
}

// sentinel-core/src/ports/notifier.rs

use async_trait::async_trait;

use crate::domain::error::DeliveryError;
use crate::domain::notification::NotificationPayload;

#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn publish(&self, topic: &str, payload: &NotificationPayload)
    -> Result<(), DeliveryError>;
}

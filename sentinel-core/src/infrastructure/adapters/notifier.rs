// sentinel-core/src/infrastructure/adapters/notifier.rs

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::domain::error::DeliveryError;
use crate::domain::notification::NotificationPayload;
use crate::ports::notifier::NotificationDispatcher;

pub struct LogNotifier;

#[async_trait]
impl NotificationDispatcher for LogNotifier {
    async fn publish(
        &self,
        topic: &str,
        payload: &NotificationPayload,
    ) -> Result<(), DeliveryError> {
        info!(topic, subject = %payload.subject, "📣 {}", payload.message);
        Ok(())
    }
}

#[derive(Serialize)]
struct OutboxEntry<'a> {
    timestamp: String,
    topic: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Outbox file: one JSON line per notification, for a relay process to pick up.
pub struct OutboxNotifier {
    path: PathBuf,
}

impl OutboxNotifier {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl NotificationDispatcher for OutboxNotifier {
    async fn publish(
        &self,
        topic: &str,
        payload: &NotificationPayload,
    ) -> Result<(), DeliveryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let entry = OutboxEntry {
            timestamp: Utc::now().to_rfc3339(),
            topic,
            subject: &payload.subject,
            message: &payload.message,
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

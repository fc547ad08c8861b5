// sentinel-core/src/ports/mod.rs

pub mod batch_source;
pub mod metrics;
pub mod notifier;
pub mod quarantine;

pub use batch_source::BatchSource;
pub use metrics::MetricsEmitter;
pub use notifier::NotificationDispatcher;
pub use quarantine::QuarantineLister;

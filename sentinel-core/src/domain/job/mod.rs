// sentinel-core/src/domain/job/mod.rs

pub mod configuration;
pub use configuration::{
    Engine, JobConfig, MetricsConfig, MetricsSink, NotificationConfig, NotificationSink,
};

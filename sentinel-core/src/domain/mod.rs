pub mod error;
pub mod job;
pub mod metrics;
pub mod notification;
pub mod quality;
pub mod remediation;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::{DeliveryError, DomainError, ListingError, ScanError};

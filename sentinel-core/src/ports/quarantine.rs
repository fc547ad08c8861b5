// sentinel-core/src/ports/quarantine.rs

use async_trait::async_trait;

use crate::domain::error::ListingError;
use crate::domain::remediation::QuarantineLocation;

#[async_trait]
pub trait QuarantineLister: Send + Sync {
    async fn object_count(&self, location: &QuarantineLocation) -> Result<u64, ListingError>;
}

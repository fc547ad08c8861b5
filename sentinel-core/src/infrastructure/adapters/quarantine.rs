// sentinel-core/src/infrastructure/adapters/quarantine.rs

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::domain::error::ListingError;
use crate::domain::remediation::QuarantineLocation;
use crate::ports::quarantine::QuarantineLister;

/// Counts quarantined files under a local directory, recursively.
/// Object-store locations need a cloud client this workspace does not ship.
pub struct FsQuarantineLister;

#[async_trait]
impl QuarantineLister for FsQuarantineLister {
    async fn object_count(&self, location: &QuarantineLocation) -> Result<u64, ListingError> {
        let path = match location {
            QuarantineLocation::Local { path } => path,
            QuarantineLocation::ObjectStore { .. } => {
                return Err(ListingError::Unsupported(location.to_string()));
            }
        };

        // Like a prefix listing: nothing there yet means nothing quarantined.
        if !path.exists() {
            return Ok(0);
        }

        let mut count = 0;
        for entry in WalkDir::new(path) {
            let entry = entry.map_err(|e| ListingError::Backend(e.to_string()))?;
            if entry.file_type().is_file() {
                count += 1;
            }
        }
        Ok(count)
    }
}

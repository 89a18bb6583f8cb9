use crate::shared::Result;
use async_trait::async_trait;

/// RegionLister port for enumerating provider regions
///
/// This port abstracts the provider call that returns every region
/// identifier visible to the active credentials. The returned order is
/// whatever the provider produced; callers must not assume it is stable
/// across invocations.
///
/// # Async Support
/// Implementations must be `Send + Sync` so region work can be driven
/// from a concurrent scan.
#[async_trait]
pub trait RegionLister: Send + Sync {
    /// Lists all regions visible to the active credentials
    ///
    /// # Errors
    /// Returns an error if authentication fails or the provider call
    /// fails (network, throttling). Any error aborts the scan.
    async fn list_regions(&self) -> Result<Vec<String>>;
}

use crate::scan::domain::SecurityGroup;
use crate::shared::Result;
use async_trait::async_trait;

/// SecurityGroupDescriber port for fetching security groups of one region
///
/// This port abstracts the provider call that returns every security
/// group in a region together with its inbound permission list.
#[async_trait]
pub trait SecurityGroupDescriber: Send + Sync {
    /// Fetches all security groups in `region`
    ///
    /// # Errors
    /// Returns an error if authentication fails or the provider call
    /// fails for this region (network, throttling, permission denial).
    /// Any error aborts the scan; there is no per-region retry.
    async fn describe_security_groups(&self, region: &str) -> Result<Vec<SecurityGroup>>;
}

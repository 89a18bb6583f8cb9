use async_trait::async_trait;
use sg_audit::prelude::*;

/// Mock RegionLister for testing
pub struct MockRegionLister {
    pub regions: Vec<String>,
    pub should_fail: bool,
}

impl MockRegionLister {
    pub fn new(regions: &[&str]) -> Self {
        Self {
            regions: regions.iter().map(|r| r.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            regions: vec![],
            should_fail: true,
        }
    }
}

#[async_trait]
impl RegionLister for MockRegionLister {
    async fn list_regions(&self) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock region lister failure");
        }
        Ok(self.regions.clone())
    }
}

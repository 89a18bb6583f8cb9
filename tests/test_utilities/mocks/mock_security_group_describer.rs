use async_trait::async_trait;
use sg_audit::prelude::*;
use std::collections::HashMap;

/// Mock SecurityGroupDescriber for testing
///
/// Groups are registered per region; unregistered regions resolve to an
/// empty list, and one region can be marked as failing.
pub struct MockSecurityGroupDescriber {
    pub groups: HashMap<String, Vec<SecurityGroup>>,
    pub failing_region: Option<String>,
}

impl MockSecurityGroupDescriber {
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
            failing_region: None,
        }
    }

    pub fn with_groups(mut self, region: &str, groups: Vec<SecurityGroup>) -> Self {
        self.groups.insert(region.to_string(), groups);
        self
    }

    pub fn with_failing_region(mut self, region: &str) -> Self {
        self.failing_region = Some(region.to_string());
        self
    }
}

impl Default for MockSecurityGroupDescriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecurityGroupDescriber for MockSecurityGroupDescriber {
    async fn describe_security_groups(&self, region: &str) -> Result<Vec<SecurityGroup>> {
        if self.failing_region.as_deref() == Some(region) {
            anyhow::bail!("Mock describe failure in {}", region);
        }
        Ok(self.groups.get(region).cloned().unwrap_or_default())
    }
}

use crate::scan::domain::SecurityGroup;

/// A single report row: one security group found to violate the policy.
///
/// At most one record is produced per group per scan, even when several
/// of its permissions match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub group_id: String,
    pub group_name: String,
    pub region: String,
    pub owner_account_id: String,
}

impl MatchRecord {
    pub fn from_group(group: &SecurityGroup, region: &str) -> Self {
        Self {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            region: region.to_string(),
            owner_account_id: group.owner_account_id.clone(),
        }
    }

    /// The record as the four report columns, in header order.
    pub fn as_columns(&self) -> [&str; 4] {
        [
            &self.group_id,
            &self.group_name,
            &self.region,
            &self.owner_account_id,
        ]
    }
}

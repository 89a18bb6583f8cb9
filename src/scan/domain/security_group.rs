use serde::Deserialize;

/// One security group as returned by `ec2 describe-security-groups`.
///
/// Entirely externally sourced and read-only to this tool. The serde
/// renames follow the EC2 JSON wire shape so groups deserialize straight
/// out of the provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityGroup {
    #[serde(rename = "GroupId")]
    pub id: String,
    #[serde(rename = "GroupName")]
    pub name: String,
    #[serde(rename = "OwnerId")]
    pub owner_account_id: String,
    #[serde(rename = "IpPermissions", default)]
    pub inbound_permissions: Vec<InboundPermission>,
}

/// One inbound rule entry of a security group.
///
/// `protocol` uses the provider sentinel `"-1"` for "all protocols".
/// A rule with neither `from_port` nor `to_port` covers all ports.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundPermission {
    #[serde(rename = "IpProtocol")]
    pub protocol: String,
    #[serde(rename = "FromPort")]
    pub from_port: Option<i64>,
    #[serde(rename = "ToPort")]
    pub to_port: Option<i64>,
    #[serde(rename = "IpRanges", default)]
    pub ip_ranges: Vec<IpRange>,
}

/// An IPv4 source range permitted by an inbound rule.
///
/// `CidrIp` is optional on the wire; entries without it never match the
/// unrestricted-source check.
#[derive(Debug, Clone, Deserialize)]
pub struct IpRange {
    #[serde(rename = "CidrIp")]
    pub cidr_ip: Option<String>,
}

impl InboundPermission {
    /// Convenience constructor for synthetic permissions in tests.
    #[cfg(test)]
    pub fn synthetic(
        protocol: &str,
        from_port: Option<i64>,
        to_port: Option<i64>,
        cidrs: &[&str],
    ) -> Self {
        Self {
            protocol: protocol.to_string(),
            from_port,
            to_port,
            ip_ranges: cidrs
                .iter()
                .map(|c| IpRange {
                    cidr_ip: Some(c.to_string()),
                })
                .collect(),
        }
    }
}

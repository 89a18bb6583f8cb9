use crate::ports::outbound::{RegionLister, SecurityGroupDescriber};
use crate::scan::domain::SecurityGroup;
use crate::shared::error::{AuditError, RetrievalScope};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tokio::process::Command;

/// Default invocation name of the AWS command-line interface.
pub const DEFAULT_AWS_BIN: &str = "aws";

const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Substrings in `aws` stderr that indicate a credential problem rather
/// than a transient retrieval failure.
const AUTH_FAILURE_MARKERS: [&str; 6] = [
    "Unable to locate credentials",
    "ExpiredToken",
    "RequestExpired",
    "AuthFailure",
    "InvalidClientTokenId",
    "SignatureDoesNotMatch",
];

/// Explicit credential and invocation context for the AWS CLI adapter.
///
/// Everything the adapter needs is passed in at construction; the core
/// logic never reads ambient global state itself. The profile selects the
/// credential set the CLI resolves, and `bin` is overridable so tests can
/// substitute a stub executable.
#[derive(Debug, Clone)]
pub struct AwsCliConfig {
    pub bin: String,
    pub profile: Option<String>,
    /// Deadline applied to every individual CLI call.
    pub timeout: Duration,
}

impl Default for AwsCliConfig {
    fn default() -> Self {
        Self {
            bin: DEFAULT_AWS_BIN.to_string(),
            profile: None,
            timeout: DEFAULT_CALL_TIMEOUT,
        }
    }
}

/// AwsCliClient adapter for the RegionLister and SecurityGroupDescriber ports
///
/// Invokes the `aws` CLI as a subprocess and parses its JSON output. This
/// mirrors how operators already query EC2 by hand, and keeps the tool
/// free of any provider SDK: whatever credentials, SSO session, or role
/// the CLI resolves for the configured profile is what the scan uses.
#[derive(Debug, Clone)]
pub struct AwsCliClient {
    config: AwsCliConfig,
}

impl AwsCliClient {
    pub fn new(config: AwsCliConfig) -> Self {
        Self { config }
    }

    /// Runs one `aws ec2` subcommand under the configured deadline and
    /// returns its stdout.
    async fn run_ec2(&self, scope: RetrievalScope, args: &[&str]) -> Result<Vec<u8>> {
        let mut command = Command::new(&self.config.bin);
        command.arg("ec2").args(args).args(["--output", "json"]);
        if let Some(profile) = &self.config.profile {
            command.args(["--profile", profile]);
        }
        // A canceled scan must not leave orphaned CLI processes behind
        command.kill_on_drop(true);

        let output = tokio::time::timeout(self.config.timeout, command.output())
            .await
            .map_err(|_| AuditError::Retrieval {
                scope: scope.clone(),
                details: format!(
                    "call did not complete within {} seconds",
                    self.config.timeout.as_secs()
                ),
            })?
            .map_err(|e| AuditError::Retrieval {
                scope: scope.clone(),
                details: format!("failed to invoke '{}': {}", self.config.bin, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(scope, stderr.trim()).into());
        }

        Ok(output.stdout)
    }
}

/// Distinguishes credential failures from ordinary retrieval failures
/// based on the CLI's stderr, so they surface with the right error kind.
fn classify_failure(scope: RetrievalScope, stderr: &str) -> AuditError {
    if AUTH_FAILURE_MARKERS
        .iter()
        .any(|marker| stderr.contains(marker))
    {
        AuditError::Authentication {
            details: stderr.to_string(),
        }
    } else {
        AuditError::Retrieval {
            scope,
            details: stderr.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DescribeRegionsResponse {
    #[serde(rename = "Regions", default)]
    regions: Vec<RegionEntry>,
}

#[derive(Debug, Deserialize)]
struct RegionEntry {
    #[serde(rename = "RegionName")]
    region_name: String,
}

#[derive(Debug, Deserialize)]
struct DescribeSecurityGroupsResponse {
    #[serde(rename = "SecurityGroups", default)]
    security_groups: Vec<SecurityGroup>,
}

fn parse_regions(stdout: &[u8]) -> Result<Vec<String>> {
    let response: DescribeRegionsResponse =
        serde_json::from_slice(stdout).map_err(|e| AuditError::Retrieval {
            scope: RetrievalScope::RegionListing,
            details: format!("unexpected describe-regions output: {}", e),
        })?;
    Ok(response
        .regions
        .into_iter()
        .map(|entry| entry.region_name)
        .collect())
}

fn parse_security_groups(region: &str, stdout: &[u8]) -> Result<Vec<SecurityGroup>> {
    let response: DescribeSecurityGroupsResponse =
        serde_json::from_slice(stdout).map_err(|e| AuditError::Retrieval {
            scope: RetrievalScope::Region(region.to_string()),
            details: format!("unexpected describe-security-groups output: {}", e),
        })?;
    Ok(response.security_groups)
}

#[async_trait]
impl RegionLister for AwsCliClient {
    async fn list_regions(&self) -> Result<Vec<String>> {
        let stdout = self
            .run_ec2(RetrievalScope::RegionListing, &["describe-regions"])
            .await?;
        parse_regions(&stdout)
    }
}

#[async_trait]
impl SecurityGroupDescriber for AwsCliClient {
    async fn describe_security_groups(&self, region: &str) -> Result<Vec<SecurityGroup>> {
        let scope = RetrievalScope::Region(region.to_string());
        let stdout = self
            .run_ec2(scope, &["describe-security-groups", "--region", region])
            .await?;
        parse_security_groups(region, &stdout)
    }
}

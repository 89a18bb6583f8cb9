use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::outbound::aws::cli_client::DEFAULT_AWS_BIN;
use crate::application::dto::DEFAULT_CONCURRENCY;
use crate::config::ConfigFile;
use crate::scan::policies::ALL_PROTOCOLS;
use crate::shared::error::AuditError;
use crate::shared::Result;

/// Default report destination when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT: &str = "unsafe-security-groups.csv";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Audit AWS security groups for inbound rules open to the world
#[derive(Parser, Debug)]
#[command(name = "sg-audit")]
#[command(version)]
#[command(about = "Audit AWS security groups for inbound rules open to 0.0.0.0/0", long_about = None)]
pub struct Args {
    /// Port to audit for unrestricted inbound access
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Transport protocol to audit; use "-1" to match any protocol
    #[arg(long)]
    pub protocol: Option<String>,

    /// Report destination (CSV, appended to across runs)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Initialize a new report with a header row when the destination does
    /// not exist yet; an existing report is never truncated
    #[arg(long)]
    pub fresh: bool,

    /// Maximum number of regions scanned in parallel
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// AWS profile the CLI resolves credentials from
    #[arg(long)]
    pub profile: Option<String>,

    /// Per-call deadline for provider requests, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Path to a config file (defaults to ./sg-audit.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress progress output (warnings are still shown)
    #[arg(short, long)]
    pub quiet: bool,

    /// AWS CLI executable to invoke
    #[arg(long, env = "SG_AUDIT_AWS_BIN", default_value = DEFAULT_AWS_BIN, hide = true)]
    pub aws_bin: String,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Fully resolved scan settings: CLI arguments merged over config file
/// values merged over built-in defaults.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub port: u16,
    pub protocol: String,
    pub output: PathBuf,
    pub fresh: bool,
    pub concurrency: usize,
    pub profile: Option<String>,
    pub timeout: Duration,
    pub quiet: bool,
    pub aws_bin: String,
}

/// Merges CLI arguments with an optional config file.
///
/// The port is the one parameter without a built-in default; it must come
/// from either source.
pub fn resolve_settings(args: Args, config: Option<ConfigFile>) -> Result<ScanSettings> {
    let config = config.unwrap_or_default();

    let port = args.port.or(config.port).ok_or_else(|| AuditError::InvalidScanParameters {
        message: "no port given; pass --port or set `port` in the config file".to_string(),
    })?;

    Ok(ScanSettings {
        port,
        protocol: args
            .protocol
            .or(config.protocol)
            .unwrap_or_else(|| ALL_PROTOCOLS.to_string()),
        output: args
            .output
            .or_else(|| config.output.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        fresh: args.fresh,
        concurrency: args
            .concurrency
            .or(config.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY),
        profile: args.profile.or(config.profile),
        timeout: Duration::from_secs(
            args.timeout_secs
                .or(config.timeout_secs)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        quiet: args.quiet,
        aws_bin: args.aws_bin,
    })
}

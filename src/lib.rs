//! sg-audit - Security-group audit tool for AWS accounts
//!
//! This library scans every region visible to the active credentials for
//! security-group inbound rules that allow traffic from the unrestricted
//! source range `0.0.0.0/0` on a given port and protocol, and appends each
//! offending group to a durable CSV report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan`): Security-group data model and the pure
//!   open-ingress evaluation policy
//! - **Application Layer** (`application`): The scan use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sg_audit::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let aws = AwsCliClient::new(AwsCliConfig::default());
//! let report_sink = CsvReportSink::new(PathBuf::from("unsafe-security-groups.csv"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case with injected dependencies
//! let use_case =
//!     ScanSecurityGroupsUseCase::new(aws.clone(), aws, report_sink, progress_reporter);
//!
//! // Execute: audit SSH open to the world
//! let request = ScanRequest::new(22, "tcp".to_string(), true, DEFAULT_CONCURRENCY);
//! let response = use_case.execute(request).await?;
//! eprintln!("{} match(es) written to {}", response.matches_found, response.destination);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod scan;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::aws::{AwsCliClient, AwsCliConfig};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{CsvReportSink, REPORT_HEADER};
    pub use crate::application::dto::{ScanRequest, ScanResponse, DEFAULT_CONCURRENCY};
    pub use crate::application::use_cases::ScanSecurityGroupsUseCase;
    pub use crate::ports::outbound::{
        BootstrapOutcome, ProgressReporter, RegionLister, ReportSink, SecurityGroupDescriber,
    };
    pub use crate::scan::domain::{InboundPermission, IpRange, MatchRecord, SecurityGroup};
    pub use crate::scan::policies::{
        first_open_ingress, has_unrestricted_source, port_in_scope, protocol_matches,
        ALL_PROTOCOLS, UNRESTRICTED_CIDR,
    };
    pub use crate::shared::Result;
}

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the scan completed, including the zero-matches case
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (provider retrieval error, report write error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// What a failed retrieval call was trying to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalScope {
    /// The account-wide region listing
    RegionListing,
    /// The security groups of one region
    Region(String),
}

impl fmt::Display for RetrievalScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalScope::RegionListing => write!(f, "region listing"),
            RetrievalScope::Region(region) => write!(f, "region {}", region),
        }
    }
}

/// Application-specific errors for the security-group audit.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Authentication with the provider failed: {details}\n\n💡 Hint: Check that your AWS credentials are configured and not expired (aws configure, AWS_PROFILE)")]
    Authentication { details: String },

    #[error("Failed to retrieve {scope}: {details}\n\n💡 Hint: Check network connectivity and that your credentials may describe EC2 resources")]
    Retrieval {
        scope: RetrievalScope,
        details: String,
    },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ReportWrite { path: PathBuf, details: String },

    #[error("Invalid scan parameters: {message}")]
    InvalidScanParameters { message: String },
}

use crate::shared::error::AuditError;
use crate::shared::Result;

/// Default number of regions scanned concurrently. Kept modest because
/// provider rate limits apply per account; 1 gives strictly sequential
/// scanning.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// ScanRequest - Internal request DTO for the security-group scan use case
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Target port the audit checks for unrestricted access
    pub port: u16,
    /// Target protocol; the provider sentinel "-1" matches any protocol
    pub protocol: String,
    /// Whether to initialize a new report (header row) when the
    /// destination does not exist yet
    pub fresh: bool,
    /// Upper bound on regions scanned in parallel
    pub concurrency: usize,
}

impl ScanRequest {
    pub fn new(port: u16, protocol: String, fresh: bool, concurrency: usize) -> Self {
        Self {
            port,
            protocol,
            fresh,
            concurrency,
        }
    }

    /// Checks the scan preconditions before any provider call is made.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AuditError::InvalidScanParameters {
                message: "port must be a positive integer".to_string(),
            }
            .into());
        }
        if self.protocol.trim().is_empty() {
            return Err(AuditError::InvalidScanParameters {
                message: "protocol must not be empty (use \"-1\" to match any protocol)"
                    .to_string(),
            }
            .into());
        }
        if self.concurrency == 0 {
            return Err(AuditError::InvalidScanParameters {
                message: "concurrency must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

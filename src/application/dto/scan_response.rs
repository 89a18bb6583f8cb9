use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// ScanResponse - Summary of one completed scan
///
/// The report file is the sole output artifact; this response carries
/// only bookkeeping for the completion message and for tests.
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// Identifier of this scan run, for correlating audit output
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub regions_scanned: usize,
    pub groups_scanned: usize,
    pub matches_found: usize,
    /// Where the report was written
    pub destination: String,
}

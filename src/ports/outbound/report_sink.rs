use crate::scan::domain::MatchRecord;
use crate::shared::Result;

/// Result of preparing the report destination before a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// A new report was created with the canonical header row
    Created,
    /// A fresh report was requested but the destination already exists;
    /// existing content is preserved and new rows will be appended
    PreservedExisting,
    /// Plain append mode, no header handling
    AppendMode,
}

/// ReportSink port for the durable match report
///
/// The sink is append-only: rows are written whole and made durable one
/// at a time, and prior rows are never rewritten or reordered. Re-running
/// a scan against an existing report appends duplicate rows rather than
/// deduplicating.
pub trait ReportSink: Send + Sync {
    /// Prepares the destination. With `fresh` set, a missing destination
    /// is initialized with the header row; an existing one is left
    /// untouched (never truncated) and reported as preserved.
    fn bootstrap(&self, fresh: bool) -> Result<BootstrapOutcome>;

    /// Appends one record and flushes it before returning, so a mid-scan
    /// crash preserves every row appended so far.
    fn append(&self, record: &MatchRecord) -> Result<()>;

    /// Human-readable destination location for completion messages.
    fn destination(&self) -> String;
}

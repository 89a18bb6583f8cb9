use crate::ports::outbound::{BootstrapOutcome, ReportSink};
use crate::scan::domain::MatchRecord;
use crate::shared::error::AuditError;
use crate::shared::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Canonical header row of the match report.
pub const REPORT_HEADER: [&str; 4] = ["SG_ID", "SG_NAME", "AWS_REGION", "AWS_ACCOUNT_ID"];

/// CsvReportSink adapter for the ReportSink port
///
/// Writes the match report as a UTF-8 CSV file. Every append opens the
/// file in append mode, writes exactly one row, and flushes before
/// returning, so each record is durable on disk before the scan moves
/// on and a crash can never leave a partial row behind. Fields are
/// quoted only when they contain the delimiter (csv default quoting).
pub struct CsvReportSink {
    path: PathBuf,
}

impl CsvReportSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(AuditError::ReportWrite {
                    path: self.path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    fn write_error(&self, details: impl ToString) -> anyhow::Error {
        AuditError::ReportWrite {
            path: self.path.clone(),
            details: details.to_string(),
        }
        .into()
    }

    fn append_row(&self, columns: &[&str]) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(columns)
            .map_err(|e| self.write_error(e))?;
        writer.flush().map_err(|e| self.write_error(e))?;
        Ok(())
    }
}

impl ReportSink for CsvReportSink {
    fn bootstrap(&self, fresh: bool) -> Result<BootstrapOutcome> {
        self.validate_parent_directory()?;

        if !fresh {
            return Ok(BootstrapOutcome::AppendMode);
        }

        if self.path.exists() {
            // Never truncate a file that might hold prior audit history
            return Ok(BootstrapOutcome::PreservedExisting);
        }

        self.append_row(&REPORT_HEADER)?;
        Ok(BootstrapOutcome::Created)
    }

    fn append(&self, record: &MatchRecord) -> Result<()> {
        self.append_row(&record.as_columns())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (cloud provider, file system,
/// console).
pub mod progress_reporter;
pub mod region_lister;
pub mod report_sink;
pub mod security_group_describer;

pub use progress_reporter::ProgressReporter;
pub use region_lister::RegionLister;
pub use report_sink::{BootstrapOutcome, ReportSink};
pub use security_group_describer::SecurityGroupDescriber;

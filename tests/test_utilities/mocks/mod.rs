pub mod mock_progress_reporter;
pub mod mock_region_lister;
pub mod mock_security_group_describer;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_region_lister::MockRegionLister;
pub use mock_security_group_describer::MockSecurityGroupDescriber;

pub mod scan_security_groups;

pub use scan_security_groups::ScanSecurityGroupsUseCase;

pub mod scan_request;
pub mod scan_response;

pub use scan_request::{ScanRequest, DEFAULT_CONCURRENCY};
pub use scan_response::ScanResponse;

pub mod match_record;
pub mod security_group;

pub use match_record::MatchRecord;
pub use security_group::{InboundPermission, IpRange, SecurityGroup};

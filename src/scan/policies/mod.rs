pub mod open_ingress;

pub use open_ingress::{
    first_open_ingress, has_unrestricted_source, port_in_scope, protocol_matches, ALL_PROTOCOLS,
    UNRESTRICTED_CIDR,
};

//! Open-ingress evaluation policy.
//!
//! Three independent predicates over a single inbound permission, composed
//! with a short-circuiting AND by [`first_open_ingress`]. All of this is
//! pure and testable with synthetic permissions; nothing here touches the
//! network or the filesystem.

use crate::scan::domain::{InboundPermission, SecurityGroup};

/// Provider sentinel meaning "all protocols", both on inbound rules and as
/// a scan target.
pub const ALL_PROTOCOLS: &str = "-1";

/// The one CIDR this tool recognizes as unrestricted. Exact string match
/// only; equivalent notations are deliberately not resolved.
pub const UNRESTRICTED_CIDR: &str = "0.0.0.0/0";

/// True when the rule covers the target protocol.
///
/// A rule protocol of `"-1"` covers everything. Otherwise the target is
/// matched as a substring of the rule protocol, which is intentionally
/// loose (a target of `"tc"` matches `"tcp"`).
pub fn protocol_matches(permission: &InboundPermission, target_protocol: &str) -> bool {
    permission.protocol == ALL_PROTOCOLS || permission.protocol.contains(target_protocol)
}

/// True when the rule's port range covers the target port.
///
/// A rule without `from_port` covers all ports. A `from_port` with no
/// `to_port` is a degenerate range and never matches. Range direction is
/// not validated; an inverted range simply never contains anything.
pub fn port_in_scope(permission: &InboundPermission, target_port: u16) -> bool {
    match (permission.from_port, permission.to_port) {
        (None, _) => true,
        (Some(from), Some(to)) => {
            let port = i64::from(target_port);
            from <= port && port <= to
        }
        (Some(_), None) => false,
    }
}

/// True when at least one of the rule's source ranges is exactly
/// `0.0.0.0/0`.
pub fn has_unrestricted_source(permission: &InboundPermission) -> bool {
    permission
        .ip_ranges
        .iter()
        .any(|range| range.cidr_ip.as_deref() == Some(UNRESTRICTED_CIDR))
}

/// Finds the first inbound permission of `group` that grants unrestricted
/// access on `target_port`/`target_protocol`.
///
/// Permissions are evaluated in their given order with cheap checks first
/// (protocol, then port, then the CIDR scan). Iteration stops at the first
/// match, so later matching permissions on the same group are never
/// inspected.
pub fn first_open_ingress<'a>(
    group: &'a SecurityGroup,
    target_port: u16,
    target_protocol: &str,
) -> Option<&'a InboundPermission> {
    group.inbound_permissions.iter().find(|permission| {
        protocol_matches(permission, target_protocol)
            && port_in_scope(permission, target_port)
            && has_unrestricted_source(permission)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_matches_all_protocols_sentinel() {
        let permission = InboundPermission::synthetic("-1", None, None, &[]);
        assert!(protocol_matches(&permission, "tcp"));
        assert!(protocol_matches(&permission, "udp"));
        assert!(protocol_matches(&permission, "anything"));
    }

    #[test]
    fn test_protocol_matches_exact() {
        let tcp = InboundPermission::synthetic("tcp", None, None, &[]);
        assert!(protocol_matches(&tcp, "tcp"));

        let udp = InboundPermission::synthetic("udp", None, None, &[]);
        assert!(!protocol_matches(&udp, "tcp"));
    }

    #[test]
    fn test_protocol_matches_substring_looseness() {
        // Substring matching is deliberately loose
        let tcp = InboundPermission::synthetic("tcp", None, None, &[]);
        assert!(protocol_matches(&tcp, "tc"));
        assert!(!protocol_matches(&tcp, "tcpx"));
    }

    #[test]
    fn test_port_in_scope_absent_range_covers_all_ports() {
        let permission = InboundPermission::synthetic("tcp", None, None, &[]);
        assert!(port_in_scope(&permission, 0));
        assert!(port_in_scope(&permission, 22));
        assert!(port_in_scope(&permission, u16::MAX));
    }

    #[test]
    fn test_port_in_scope_range_boundaries() {
        let permission = InboundPermission::synthetic("tcp", Some(20), Some(25), &[]);
        assert!(!port_in_scope(&permission, 19));
        assert!(port_in_scope(&permission, 20));
        assert!(port_in_scope(&permission, 22));
        assert!(port_in_scope(&permission, 25));
        assert!(!port_in_scope(&permission, 26));
    }

    #[test]
    fn test_port_in_scope_inverted_range_never_matches() {
        let permission = InboundPermission::synthetic("tcp", Some(25), Some(20), &[]);
        assert!(!port_in_scope(&permission, 22));
    }

    #[test]
    fn test_port_in_scope_degenerate_range() {
        let permission = InboundPermission::synthetic("tcp", Some(22), None, &[]);
        assert!(!port_in_scope(&permission, 22));
    }

    #[test]
    fn test_unrestricted_source_empty_ranges() {
        let permission = InboundPermission::synthetic("tcp", Some(22), Some(22), &[]);
        assert!(!has_unrestricted_source(&permission));
    }

    #[test]
    fn test_unrestricted_source_private_range_only() {
        let permission =
            InboundPermission::synthetic("tcp", Some(22), Some(22), &["10.0.0.0/8"]);
        assert!(!has_unrestricted_source(&permission));
    }

    #[test]
    fn test_unrestricted_source_among_other_entries() {
        let permission = InboundPermission::synthetic(
            "tcp",
            Some(22),
            Some(22),
            &["10.0.0.0/8", "0.0.0.0/0", "192.168.0.0/16"],
        );
        assert!(has_unrestricted_source(&permission));
    }

    #[test]
    fn test_unrestricted_source_exact_match_only() {
        // Broader-but-equivalent notations are not recognized
        let permission =
            InboundPermission::synthetic("tcp", Some(22), Some(22), &["0.0.0.0/1"]);
        assert!(!has_unrestricted_source(&permission));
    }

    #[test]
    fn test_unrestricted_source_missing_cidr_field() {
        let permission = InboundPermission {
            protocol: "tcp".to_string(),
            from_port: Some(22),
            to_port: Some(22),
            ip_ranges: vec![crate::scan::domain::IpRange { cidr_ip: None }],
        };
        assert!(!has_unrestricted_source(&permission));
    }

    fn group_with(permissions: Vec<InboundPermission>) -> SecurityGroup {
        SecurityGroup {
            id: "sg-test".to_string(),
            name: "test".to_string(),
            owner_account_id: "123456789012".to_string(),
            inbound_permissions: permissions,
        }
    }

    #[test]
    fn test_first_open_ingress_stops_at_first_match() {
        let group = group_with(vec![
            InboundPermission::synthetic("tcp", Some(22), Some(22), &["0.0.0.0/0"]),
            InboundPermission::synthetic("tcp", Some(80), Some(80), &["0.0.0.0/0"]),
        ]);

        let hit = first_open_ingress(&group, 22, "tcp").unwrap();
        assert_eq!(hit.from_port, Some(22));
    }

    #[test]
    fn test_first_open_ingress_skips_non_matching_entries() {
        let group = group_with(vec![
            InboundPermission::synthetic("tcp", Some(443), Some(443), &["0.0.0.0/0"]),
            InboundPermission::synthetic("tcp", Some(22), Some(22), &["10.0.0.0/8"]),
            InboundPermission::synthetic("tcp", Some(22), Some(22), &["0.0.0.0/0"]),
        ]);

        let hit = first_open_ingress(&group, 22, "tcp").unwrap();
        assert!(has_unrestricted_source(hit));
        assert_eq!(hit.from_port, Some(22));
    }

    #[test]
    fn test_first_open_ingress_no_match() {
        let group = group_with(vec![InboundPermission::synthetic(
            "udp",
            Some(53),
            Some(53),
            &["0.0.0.0/0"],
        )]);
        assert!(first_open_ingress(&group, 22, "tcp").is_none());
    }

    #[test]
    fn test_first_open_ingress_any_protocol_target() {
        // A "-1" target only matches rules that are themselves "-1"
        let group = group_with(vec![
            InboundPermission::synthetic("tcp", Some(22), Some(22), &["0.0.0.0/0"]),
            InboundPermission::synthetic("-1", None, None, &["0.0.0.0/0"]),
        ]);

        let hit = first_open_ingress(&group, 22, "-1").unwrap();
        assert_eq!(hit.protocol, "-1");
    }
}

/// Scan domain layer
///
/// Pure business logic for security-group auditing: the data model for
/// externally sourced security groups and the open-ingress evaluation
/// policies. No I/O happens in this layer.
pub mod domain;
pub mod policies;

/// Outbound adapters - Concrete implementations of the outbound ports
pub mod aws;
pub mod console;
pub mod filesystem;

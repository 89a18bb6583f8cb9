pub mod cli_client;

pub use cli_client::{AwsCliClient, AwsCliConfig};

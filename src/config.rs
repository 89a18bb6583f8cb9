//! Configuration file support for sg-audit.
//!
//! Provides YAML-based configuration through `sg-audit.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! arguments always take precedence over config values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "sg-audit.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub port: Option<u16>,
    pub protocol: Option<String>,
    pub output: Option<String>,
    pub concurrency: Option<usize>,
    pub profile: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.port == Some(0) {
        bail!(
            "Invalid config: port must be a positive integer.\n\n\
             💡 Hint: Set `port` to the port number you want to audit (e.g., 22)."
        );
    }
    if config.concurrency == Some(0) {
        bail!(
            "Invalid config: concurrency must be at least 1.\n\n\
             💡 Hint: Use 1 for strictly sequential region scanning."
        );
    }
    if let Some(ref protocol) = config.protocol {
        if protocol.trim().is_empty() {
            bail!(
                "Invalid config: protocol must not be empty.\n\n\
                 💡 Hint: Use \"-1\" to match any protocol."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

//! Configuration validation.

use crate::config::{Config, ResourceConfig};
use std::collections::HashSet;

/// Validate the configuration.
///
/// Checks for:
/// - A known log level
/// - Non-empty resource paths
/// - No two resources sharing a path
/// - No duplicate listener addresses
///
/// # Returns
///
/// `Ok(())` if valid, or an error message describing the problem.
pub fn validate_config(config: &Config) -> Result<(), String> {
    let mut errors = Vec::new();

    let mut paths = HashSet::new();
    let mut addresses = HashSet::new();

    for (index, resource) in config.resources.iter().enumerate() {
        match resource {
            ResourceConfig::PidFile { path } | ResourceConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    errors.push(format!("resource {} has an empty path", index));
                } else if !paths.insert(path) {
                    errors.push(format!(
                        "duplicate resource path: {} (resource {})",
                        path.display(),
                        index
                    ));
                }
            }
            ResourceConfig::TcpListener { address } => {
                // Port 0 binds a fresh ephemeral port each time.
                if address.port() != 0 && !addresses.insert(*address) {
                    errors.push(format!(
                        "duplicate listener address: {} (resource {})",
                        address, index
                    ));
                }
            }
        }
    }

    if let Err(e) = validate_log_level(&config.global.log_level) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

/// Log levels accepted in configuration and on the command line.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check that `level` names one of [`LOG_LEVELS`], ignoring case.
pub fn validate_log_level(level: &str) -> Result<(), String> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(format!(
            "invalid log level '{}', must be one of: {}",
            level,
            LOG_LEVELS.join(", ")
        ))
    }
}

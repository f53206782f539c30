//! Configuration data types.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub global: GlobalConfig,

    /// What happens once every resource is closed
    #[serde(default)]
    pub mode: ShutdownMode,

    /// Resources to hold open until shutdown, closed in this order
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

/// Global configuration settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GlobalConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: json or pretty
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Json,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Shutdown behavior after cleanup.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShutdownMode {
    /// Exit the process with a success status.
    #[default]
    Terminate,
    /// Return control to the caller, which decides how to exit.
    Report,
}

/// A resource opened at startup and closed on shutdown.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceConfig {
    /// File containing the process id, removed on close
    PidFile { path: PathBuf },

    /// Append-mode file, flushed and synced on close
    File { path: PathBuf },

    /// Bound TCP listener, released on close
    TcpListener { address: SocketAddr },
}

fn default_log_level() -> String {
    "info".to_string()
}

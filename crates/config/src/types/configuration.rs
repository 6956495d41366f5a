//! The typed exporter configuration.
//!
//! Responsibilities:
//! - Define `Configuration` and its `log` / `symo` sections.
//! - Provide the hard-coded defaults used as the lowest configuration layer.
//!
//! Does NOT handle:
//! - Merging flags, environment variables and defaults (see `loader` module).
//! - Resolving the effective log level (see `loader::builder`).

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_SYMO_URL};

/// Exporter configuration, created once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Address to listen on for Prometheus scrapes (e.g. `:8080`)
    #[serde(rename = "bindAddr")]
    pub bind_addr: String,
    /// Logging settings
    pub log: LogConfig,
    /// Fronius Symo target settings
    pub symo: SymoConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level name (`debug`, `info`, `warn`, ...). Corrected to `info` when unrecognized.
    pub level: String,
    /// Shortcut for `level = "debug"`
    pub verbose: bool,
}

/// Fronius Symo target settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymoConfig {
    /// Target URL of the Symo device
    pub url: String,
    /// Raw `"key: value"` headers appended to requests, in flag order
    #[serde(rename = "header")]
    pub headers: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            log: LogConfig::default(),
            symo: SymoConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            verbose: false,
        }
    }
}

impl Default for SymoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SYMO_URL.to_string(),
            headers: Vec::new(),
        }
    }
}

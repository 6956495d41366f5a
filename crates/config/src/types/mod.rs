//! Configuration type definitions for symo-exporter.
//!
//! Responsibilities:
//! - Define the typed `Configuration` handed to the scraper and HTTP server.
//! - Define recognized logging levels and their `tracing` thresholds.
//! - Carry build metadata for usage and version output.
//!
//! Does NOT handle:
//! - Loading configuration from flags or environment variables (see `loader` module).
//! - Installing the log subscriber (see `logging` module).
//!
//! Invariants:
//! - Serialized field names equal the dotted flag names (`bindAddr`, `log.level`, `symo.header`).
//! - `Configuration::default()` holds the hard-coded defaults, not magic numbers.

mod build_info;
mod configuration;
mod level;

pub use build_info::BuildInfo;
pub use configuration::{Configuration, LogConfig, SymoConfig};
pub use level::{LogLevel, ParseLevelError};

//! Centralized constants for the symo-exporter workspace.
//!
//! This module contains default values and flag names used across crates to
//! avoid duplicated string literals.

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default listen address for Prometheus scrapes.
pub const DEFAULT_BIND_ADDR: &str = ":8080";

/// Default logging level name.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default target URL of the Fronius Symo realtime power flow endpoint.
pub const DEFAULT_SYMO_URL: &str =
    "http://symo.ip.or.hostname/solar_api/v1/GetPowerFlowRealtimeData.fcgi";

/// Program name used when the argument vector does not provide one.
pub const DEFAULT_PROGRAM_NAME: &str = "symo-exporter";

/// Placeholder for build metadata that was not provided at compile time.
pub const UNKNOWN_BUILD_VALUE: &str = "unknown";

// =============================================================================
// Flag Names
// =============================================================================

pub const FLAG_BIND_ADDR: &str = "bindAddr";
pub const FLAG_LOG_LEVEL: &str = "log.level";
pub const FLAG_LOG_VERBOSE: &str = "log.verbose";
pub const FLAG_SYMO_HEADER: &str = "symo.header";
pub const FLAG_SYMO_URL: &str = "symo.url";

/// Short alias of `--log.verbose`.
pub const FLAG_LOG_VERBOSE_SHORT: char = 'v';

// =============================================================================
// Environment
// =============================================================================

/// Setting this variable to `1` or `true` skips `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Separator for list values supplied through a single flag or variable.
pub const LIST_SEPARATOR: char = ',';

//! Shared test utilities for symo-exporter integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - No variable bound to an exporter flag leaks in from the host.

use assert_cmd::Command;

/// Environment variables bound to exporter flags.
pub const BOUND_VARS: [&str; 5] = ["BINDADDR", "LOG_LEVEL", "LOG_VERBOSE", "SYMO_HEADER", "SYMO_URL"];

/// Returns a hermetic `symo-exporter` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Variables bound to exporter flags are cleared.
#[allow(dead_code)]
pub fn symo_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("symo-exporter");
    cmd.env("DOTENV_DISABLED", "1");
    clear_bound_env(&mut cmd);
    cmd
}

/// Remove every flag-bound variable from `cmd`'s environment.
pub fn clear_bound_env(cmd: &mut Command) {
    for key in BOUND_VARS {
        cmd.env_remove(key);
    }
}

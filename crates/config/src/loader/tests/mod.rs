//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test flag, environment and default precedence.
//! - Test log level resolution (verbose shortcut, unknown level fallback).
//! - Test fatal conditions surfaced as `ConfigError`.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `global_test_lock()`.
//! - All other tests use `EnvLayer::from_vars` and never read the process environment.

use std::cell::Cell;
use std::sync::Mutex;

use crate::loader::builder::ConfigLoader;
use crate::loader::env::EnvLayer;
use crate::loader::error::ConfigError;
use crate::loader::flags::FlagSet;
use crate::types::{BuildInfo, Configuration, LogLevel};

pub mod basic_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Load with a fixed environment and return the configuration with the level applied.
pub fn load_with(
    args: &[&str],
    vars: &[(&str, &str)],
) -> Result<(Configuration, Option<LogLevel>), ConfigError> {
    let applied = Cell::new(None);
    let levels = |level: LogLevel| applied.set(Some(level));
    let mut flag_set = FlagSet::new("symo-exporter");
    let mut argv = vec!["symo-exporter"];
    argv.extend_from_slice(args);

    let config = ConfigLoader::new(BuildInfo::default())
        .with_env(EnvLayer::from_vars(vars.iter().copied()))
        .load(&mut flag_set, argv, &levels)?;
    Ok((config, applied.get()))
}

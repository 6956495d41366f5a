//! Environment variable layer for configuration.
//!
//! Responsibilities:
//! - Derive the environment variable bound to each flag (`log.level` -> `LOG_LEVEL`).
//! - Read and convert environment values according to the flag kind.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Command-line parsing (see flags.rs).
//! - `.env` file loading (see dotenv.rs).
//!
//! Invariants:
//! - Environment variables take precedence over defaults and yield to explicit flags.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean values return ConfigError::InvalidValue.

use std::collections::HashMap;

use super::error::ConfigError;
use super::flags::{FlagKind, FlagSpec, parse_bool};
use super::source::{ConfigSource, FlagValue, Layer};
use crate::constants::LIST_SEPARATOR;

/// Environment variable name bound to `flag_name`: `.` and `-` become `_`, then upper-cased.
pub fn env_key(flag_name: &str) -> String {
    flag_name.replace(&['.', '-'][..], "_").to_uppercase()
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        // No trimming needed, return original to avoid allocation
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// Environment variables as a configuration layer.
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    fixed: Option<HashMap<String, String>>,
}

impl EnvLayer {
    /// Read from the process environment at lookup time.
    pub fn process() -> Self {
        Self { fixed: None }
    }

    /// Read from a fixed set of variables instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fixed: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        match &self.fixed {
            None => env_var_or_none(key),
            Some(vars) => vars.get(key).cloned().and_then(non_blank),
        }
    }
}

impl ConfigSource for EnvLayer {
    fn layer(&self) -> Layer {
        Layer::Env
    }

    fn lookup(&self, flag: &FlagSpec) -> Result<Option<FlagValue>, ConfigError> {
        let var = env_key(flag.name);
        let Some(raw) = self.get(&var) else {
            return Ok(None);
        };
        let value = match flag.kind {
            FlagKind::String => FlagValue::Str(raw),
            FlagKind::Bool => match parse_bool(&raw) {
                Some(b) => FlagValue::Bool(b),
                None => {
                    return Err(ConfigError::InvalidValue {
                        var,
                        message: "must be true or false".to_string(),
                    });
                }
            },
            FlagKind::StringList => FlagValue::List(
                raw.split(LIST_SEPARATOR)
                    .map(str::to_string)
                    .collect(),
            ),
        };
        Ok(Some(value))
    }
}

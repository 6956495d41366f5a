//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Classify failures into exit codes and the short fatal summary line.
//!
//! Does NOT handle:
//! - Recoverable conditions (unknown log level, malformed header); those are
//!   logged as warnings and never become a `ConfigError`.
//!
//! Invariants:
//! - Every `ConfigError` is fatal for the process.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

use crate::exit::ExitCode;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A flag with the same long name or short alias is already registered.
    #[error("flag redefined: {0}")]
    DuplicateFlag(String),

    /// The argument vector does not match the flag definitions.
    #[error(transparent)]
    Flags(#[from] clap::Error),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// The merged values could not be decoded into a `Configuration`.
    #[error("Failed to decode configuration: {0}")]
    Unmarshal(#[from] serde_json::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// One-line summary printed in front of the fatal diagnostic.
    pub fn summary(&self) -> &'static str {
        match self {
            ConfigError::DuplicateFlag(_) => "Could not bind flags",
            ConfigError::Flags(_) => "Could not parse flags",
            ConfigError::InvalidValue { .. } | ConfigError::Unmarshal(_) => {
                "Could not read config"
            }
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => "Could not load environment",
        }
    }

    /// Whether the error came from the argument vector and usage text should follow it.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, ConfigError::Flags(e) if e.use_stderr())
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            ConfigError::Flags(e) if !e.use_stderr() => ExitCode::Success,
            ConfigError::Flags(_) => ExitCode::UsageError,
            _ => ExitCode::GeneralError,
        }
    }
}

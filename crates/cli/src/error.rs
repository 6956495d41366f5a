//! Process exit codes for the exporter binary.
//!
//! Responsibilities:
//! - Map startup failures carried in an `anyhow::Error` to an `ExitCode`.
//!
//! Invariants:
//! - A `ConfigError` anywhere in the chain decides the code.
//! - Every other failure is `ExitCode::GeneralError`.

use symo_config::{ConfigError, ExitCode};

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if the chain holds no `ConfigError`.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map_or(ExitCode::GeneralError, ConfigError::exit_code)
    }
}

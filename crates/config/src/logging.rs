//! Log subscriber setup and runtime level control.
//!
//! Responsibilities:
//! - Define `LevelControl`, the handle the loader uses to apply the resolved level.
//! - Install the process subscriber with a reloadable filter (`LogHandle`).
//!
//! Does NOT handle:
//! - Deciding which level applies (see `loader::builder`).
//!
//! Invariants:
//! - The subscriber starts at `info` so warnings raised while loading are visible.
//! - Log output goes to stderr; ANSI colors only when stderr is a terminal.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload, util::TryInitError};

use crate::types::LogLevel;

/// Receives the effective logging threshold.
pub trait LevelControl {
    fn set_level(&self, level: LogLevel);
}

impl<F> LevelControl for F
where
    F: Fn(LogLevel),
{
    fn set_level(&self, level: LogLevel) {
        self(level)
    }
}

/// Handle to the installed subscriber's filter.
#[derive(Debug, Clone)]
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Install the global subscriber.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber has already been installed.
    pub fn init() -> Result<Self, TryInitError> {
        let (filter, handle) = reload::Layer::new(filter_for(LogLevel::Info));
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal()),
            )
            .try_init()?;
        Ok(Self { filter: handle })
    }
}

impl LevelControl for LogHandle {
    fn set_level(&self, level: LogLevel) {
        if let Err(e) = self.filter.reload(filter_for(level)) {
            eprintln!("Failed to update log level to {}: {}", level, e);
        }
    }
}

fn filter_for(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.level_filter().to_string())
}

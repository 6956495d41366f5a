//! Configuration loader implementation.
//!
//! Responsibilities:
//! - Register the exporter flags on a caller-supplied `FlagSet`.
//! - Parse the argument vector and merge flag, environment and default layers.
//! - Decode the merged values into a `Configuration` and resolve the effective log level.
//! - Provide `parse_config`, which terminates the process on a fatal error.
//!
//! Does NOT handle:
//! - Installing the log subscriber (see `logging` module).
//! - Converting `symo.header` entries into an HTTP header map (see `headers` module).
//!
//! Invariants / Assumptions:
//! - Explicit flags take precedence over environment variables, which take precedence over defaults.
//! - `log.verbose = true` always resolves the level to `debug`.
//! - An unrecognized level is stored as `info` and never fails the load.

use std::ffi::OsString;

use super::env::EnvLayer;
use super::error::ConfigError;
use super::flags::{FlagSet, FlagSpec};
use super::source::{ConfigSource, DefaultLayer, merge};
use crate::constants::{
    DEFAULT_LOG_LEVEL, FLAG_BIND_ADDR, FLAG_LOG_LEVEL, FLAG_LOG_VERBOSE, FLAG_LOG_VERBOSE_SHORT,
    FLAG_SYMO_HEADER, FLAG_SYMO_URL,
};
use crate::logging::LevelControl;
use crate::types::{BuildInfo, Configuration, LogLevel};

/// Register the exporter flags, using `defaults` for their default values.
///
/// # Errors
///
/// Returns `ConfigError::DuplicateFlag` if `flag_set` already defines one of them.
pub fn register_flags(flag_set: &mut FlagSet, defaults: &Configuration) -> Result<(), ConfigError> {
    flag_set.add(FlagSpec::string(
        FLAG_BIND_ADDR,
        defaults.bind_addr.clone(),
        "IP Address to bind to listen for Prometheus scrapes",
    ))?;
    flag_set.add(FlagSpec::string(
        FLAG_LOG_LEVEL,
        defaults.log.level.clone(),
        "Logging level",
    ))?;
    flag_set.add(
        FlagSpec::bool(
            FLAG_LOG_VERBOSE,
            defaults.log.verbose,
            "Shortcut for --log.level=debug",
        )
        .with_short(FLAG_LOG_VERBOSE_SHORT),
    )?;
    flag_set.add(FlagSpec::string_list(
        FLAG_SYMO_HEADER,
        Vec::new(),
        "List of \"key: value\" headers to append to the requests going to Fronius Symo",
    ))?;
    flag_set.add(FlagSpec::string(
        FLAG_SYMO_URL,
        defaults.symo.url.clone(),
        "Target URL of Fronius Symo device",
    ))?;
    Ok(())
}

/// Configuration loader that merges flags, environment variables and defaults.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    build_info: BuildInfo,
    env: EnvLayer,
    defaults: Configuration,
}

impl ConfigLoader {
    /// Create a loader reading the process environment over the built-in defaults.
    pub fn new(build_info: BuildInfo) -> Self {
        Self {
            build_info,
            env: EnvLayer::process(),
            defaults: Configuration::default(),
        }
    }

    /// Replace the environment layer (primarily for testing).
    pub fn with_env(mut self, env: EnvLayer) -> Self {
        self.env = env;
        self
    }

    /// Replace the default layer.
    pub fn with_defaults(mut self, defaults: Configuration) -> Self {
        self.defaults = defaults;
        self
    }

    /// Register the exporter flags on `flag_set`, parse `args` and build the configuration.
    ///
    /// The resolved level is passed to `levels` before the configuration is returned.
    pub fn load<I, T>(
        &self,
        flag_set: &mut FlagSet,
        args: I,
        levels: &dyn LevelControl,
    ) -> Result<Configuration, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        register_flags(flag_set, &self.defaults)?;
        let flags = flag_set.parse(&self.build_info, args)?;
        let defaults = DefaultLayer::from_config(&self.defaults)?;

        let sources: [&dyn ConfigSource; 3] = [&flags, &self.env, &defaults];
        let document = merge(flag_set, &sources)?;
        let mut config: Configuration = serde_json::from_value(document)?;

        resolve_log_level(&mut config, levels);
        tracing::debug!(config = ?config, "Parsed config");
        Ok(config)
    }
}

/// Apply `log.verbose`, validate `log.level` and hand the result to `levels`.
pub(crate) fn resolve_log_level(config: &mut Configuration, levels: &dyn LevelControl) -> LogLevel {
    if config.log.verbose {
        config.log.level = LogLevel::Debug.as_str().to_string();
    }
    let level = match config.log.level.parse::<LogLevel>() {
        Ok(level) => level,
        Err(e) => {
            tracing::warn!(error = %e, "Could not parse log level, fallback to info level");
            config.log.level = DEFAULT_LOG_LEVEL.to_string();
            LogLevel::Info
        }
    };
    levels.set_level(level);
    level
}

/// Load the configuration from `args` and the process environment.
pub fn try_parse_config<I, T>(
    build_info: &BuildInfo,
    flag_set: &mut FlagSet,
    args: I,
    levels: &dyn LevelControl,
) -> Result<Configuration, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ConfigLoader::new(build_info.clone()).load(flag_set, args, levels)
}

/// Load the configuration, terminating the process on any fatal error.
///
/// `--help` and `--version` print to stdout and exit with status 0.
pub fn parse_config<I, T>(
    build_info: &BuildInfo,
    flag_set: &mut FlagSet,
    args: I,
    levels: &dyn LevelControl,
) -> Configuration
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match try_parse_config(build_info, flag_set, args, levels) {
        Ok(config) => config,
        Err(e) => exit_on_error(build_info, flag_set, e),
    }
}

/// Print the fatal diagnostic for `err` to stderr and exit.
pub fn exit_on_error(build_info: &BuildInfo, flag_set: &FlagSet, err: ConfigError) -> ! {
    if let ConfigError::Flags(e) = &err
        && !e.use_stderr()
    {
        e.exit()
    }
    eprint!("{}", fatal_diagnostic(build_info, flag_set, &err));
    std::process::exit(err.exit_code().as_i32())
}

/// Text printed to stderr for a fatal `err`.
///
/// Binding and parse failures include the program name and build triple.
pub(crate) fn fatal_diagnostic(
    build_info: &BuildInfo,
    flag_set: &FlagSet,
    err: &ConfigError,
) -> String {
    match err {
        ConfigError::Flags(e) => {
            format!("{}\n{}\n{}", err.summary(), e, flag_set.usage(build_info))
        }
        ConfigError::DuplicateFlag(_) => format!(
            "{}: {}\n{}\n",
            err.summary(),
            err,
            build_info.usage_header(flag_set.program())
        ),
        _ => format!("{}: {}\n", err.summary(), err),
    }
}

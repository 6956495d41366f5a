//! Configuration loading for the Fronius Symo exporter.
//!
//! This crate merges command-line flags, environment variables and built-in
//! defaults into a typed [`Configuration`], applies the resolved log level, and
//! converts raw `"key: value"` strings into an HTTP header map.

pub mod constants;
pub mod exit;
pub mod headers;
mod loader;
pub mod logging;
pub mod types;

pub use exit::ExitCode;
pub use headers::{convert_headers, header_map};
pub use loader::{
    ConfigError, ConfigLoader, ConfigSource, DefaultLayer, EnvLayer, FlagKind, FlagLayer,
    FlagSet, FlagSpec, FlagValue, Layer, env_key, env_var_or_none, exit_on_error, load_dotenv,
    merge, parse_bool, parse_config, register_flags, try_parse_config,
};
pub use logging::{LevelControl, LogHandle};
pub use types::{BuildInfo, Configuration, LogConfig, LogLevel, ParseLevelError, SymoConfig};

//! Configuration loader for command-line flags and environment variables.
//!
//! Responsibilities:
//! - Register the exporter flags and parse the argument vector.
//! - Bind every flag to an environment variable and merge the layers by precedence.
//! - Decode the result into a `Configuration` and apply the resolved log level.
//!
//! Does NOT handle:
//! - Consuming the configuration (scraping, serving metrics).
//! - Converting headers (see `headers` module).
//!
//! Invariants / Assumptions:
//! - Precedence is explicit flag > environment variable > default.
//! - `load_dotenv()` must be called explicitly, before loading, to enable `.env` files.
//! - Every `ConfigError` is fatal; recoverable problems are logged as warnings.

mod builder;
mod dotenv;
mod env;
mod error;
mod flags;
mod source;

#[cfg(test)]
mod tests;

pub use builder::{
    ConfigLoader, exit_on_error, parse_config, register_flags, try_parse_config,
};
pub use dotenv::load_dotenv;
pub use env::{EnvLayer, env_key, env_var_or_none};
pub use error::ConfigError;
pub use flags::{FlagKind, FlagLayer, FlagSet, FlagSpec, parse_bool};
pub use source::{ConfigSource, DefaultLayer, FlagValue, Layer, merge};

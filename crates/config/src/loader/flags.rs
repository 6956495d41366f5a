//! Flag definitions and command-line parsing.
//!
//! Responsibilities:
//! - Hold the ordered flag definitions (`FlagSpec`) of a program in a `FlagSet`.
//! - Render the definitions as a `clap::Command` and parse an argument vector.
//! - Expose explicitly supplied flags as the highest configuration layer (`FlagLayer`).
//!
//! Does NOT handle:
//! - Environment variables or defaults (see `env.rs` and `source.rs`).
//! - Exiting the process on parse failure (see `parse_config`).
//!
//! Invariants:
//! - Flags carry no clap default, so a value in `FlagLayer` was typed on the command line.
//! - Repeating a scalar flag keeps the last occurrence; repeating a list flag appends.
//! - Boolean flags only take a value with `=` (`-v`, `--log.verbose=false`).
//! - Non-flag arguments are not an error; they are collected and ignored.

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command};

use super::error::ConfigError;
use super::source::{ConfigSource, FlagValue, Layer};
use crate::constants::LIST_SEPARATOR;
use crate::types::BuildInfo;

/// Id of the hidden argument collecting non-flag arguments.
const POSITIONAL_ID: &str = "positional";

/// Ids taken by clap's help and version flags and by `POSITIONAL_ID`.
const RESERVED_NAMES: &[&str] = &["help", "version", POSITIONAL_ID];
const RESERVED_SHORTS: &[char] = &['h', 'V'];

/// Value type of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    String,
    Bool,
    StringList,
}

/// A single named command-line option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    /// Long name, also the dotted configuration key (e.g. `log.level`)
    pub name: &'static str,
    /// Optional one-letter alias
    pub short: Option<char>,
    pub kind: FlagKind,
    pub default: FlagValue,
    pub help: String,
}

impl FlagSpec {
    pub fn string(name: &'static str, default: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name,
            short: None,
            kind: FlagKind::String,
            default: FlagValue::Str(default.into()),
            help: help.into(),
        }
    }

    pub fn bool(name: &'static str, default: bool, help: impl Into<String>) -> Self {
        Self {
            name,
            short: None,
            kind: FlagKind::Bool,
            default: FlagValue::Bool(default),
            help: help.into(),
        }
    }

    pub fn string_list(name: &'static str, default: Vec<String>, help: impl Into<String>) -> Self {
        Self {
            name,
            short: None,
            kind: FlagKind::StringList,
            default: FlagValue::List(default),
            help: help.into(),
        }
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Help text with the default appended, omitting empty and false defaults.
    fn help_with_default(&self) -> String {
        match &self.default {
            FlagValue::Str(s) if !s.is_empty() => format!("{} (default {:?})", self.help, s),
            FlagValue::Bool(true) => format!("{} (default true)", self.help),
            FlagValue::List(items) if !items.is_empty() => {
                format!("{} (default [{}])", self.help, items.join(","))
            }
            _ => self.help.clone(),
        }
    }

    fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.name)
            .long(self.name)
            .help(self.help_with_default());
        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        match self.kind {
            FlagKind::String => arg.value_name("string").action(ArgAction::Set),
            FlagKind::Bool => arg
                .action(ArgAction::Set)
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .value_parser(parse_bool_arg),
            FlagKind::StringList => arg
                .value_name("strings")
                .action(ArgAction::Append)
                .value_delimiter(LIST_SEPARATOR),
        }
    }
}

/// Parse a boolean the way flag values and environment variables accept it.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_bool_arg(raw: &str) -> Result<bool, String> {
    parse_bool(raw).ok_or_else(|| format!("invalid boolean value {raw:?}"))
}

/// Ordered flag definitions of one program.
#[derive(Debug, Clone)]
pub struct FlagSet {
    program: String,
    flags: Vec<FlagSpec>,
}

impl FlagSet {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flags: Vec::new(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    pub fn get(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    /// Register a flag.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateFlag` when the long name or short alias is
    /// already taken, including by the built-in `--help` / `--version` flags.
    pub fn add(&mut self, spec: FlagSpec) -> Result<(), ConfigError> {
        if RESERVED_NAMES.contains(&spec.name) || self.get(spec.name).is_some() {
            return Err(ConfigError::DuplicateFlag(spec.name.to_string()));
        }
        if let Some(short) = spec.short {
            let taken = RESERVED_SHORTS.contains(&short)
                || self.flags.iter().any(|flag| flag.short == Some(short));
            if taken {
                return Err(ConfigError::DuplicateFlag(format!("-{short}")));
            }
        }
        self.flags.push(spec);
        Ok(())
    }

    /// Build the clap command for these flags.
    pub fn command(&self, build: &BuildInfo) -> Command {
        Command::new(self.program.clone())
            .version(build.version.clone())
            .long_version(build.long_version())
            .before_help(build.usage_header(&self.program))
            .args_override_self(true)
            .args(self.flags.iter().map(FlagSpec::to_arg))
            .arg(
                Arg::new(POSITIONAL_ID)
                    .action(ArgAction::Append)
                    .num_args(1..)
                    .hide(true),
            )
    }

    /// Full usage text: the build header followed by the flag descriptions.
    pub fn usage(&self, build: &BuildInfo) -> String {
        self.command(build).render_help().to_string()
    }

    /// Parse `args`; the first element is the program name.
    ///
    /// Non-flag arguments are accepted and ignored.
    pub fn parse<I, T>(&self, build: &BuildInfo, args: I) -> Result<FlagLayer, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command(build).try_get_matches_from(args)?;
        if let Some(extra) = matches.get_many::<String>(POSITIONAL_ID) {
            let extra: Vec<&String> = extra.collect();
            tracing::debug!(args = ?extra, "Ignoring non-flag arguments");
        }
        Ok(FlagLayer { matches })
    }
}

/// Flags explicitly present on the command line.
#[derive(Debug, Clone)]
pub struct FlagLayer {
    matches: ArgMatches,
}

impl ConfigSource for FlagLayer {
    fn layer(&self) -> Layer {
        Layer::Flag
    }

    fn lookup(&self, flag: &FlagSpec) -> Result<Option<FlagValue>, ConfigError> {
        let invalid = |e: clap::parser::MatchesError| ConfigError::InvalidValue {
            var: flag.name.to_string(),
            message: e.to_string(),
        };
        let value = match flag.kind {
            FlagKind::String => self
                .matches
                .try_get_one::<String>(flag.name)
                .map_err(invalid)?
                .cloned()
                .map(FlagValue::Str),
            FlagKind::Bool => self
                .matches
                .try_get_one::<bool>(flag.name)
                .map_err(invalid)?
                .copied()
                .map(FlagValue::Bool),
            FlagKind::StringList => self
                .matches
                .try_get_many::<String>(flag.name)
                .map_err(invalid)?
                .map(|values| FlagValue::List(values.cloned().collect())),
        };
        Ok(value)
    }
}

//! Layered configuration sources.
//!
//! Responsibilities:
//! - Define the `ConfigSource` seam implemented by the flag, environment and default layers.
//! - Merge the layers per flag into a nested document keyed by the dotted flag name.
//!
//! Does NOT handle:
//! - Parsing the argument vector (see `flags.rs`).
//! - Reading environment variables (see `env.rs`).
//! - Decoding the merged document into a `Configuration` (see `builder.rs`).
//!
//! Invariants:
//! - Precedence is `Layer::Flag` > `Layer::Env` > `Layer::Default`, regardless of
//!   the order sources are passed to `merge`.
//! - The first layer returning `Some` for a flag wins; lower layers are not consulted.
//! - `DefaultLayer` answers every flag, so a merged document holds every registered key.

use serde_json::{Map, Value};

use super::error::ConfigError;
use super::flags::{FlagKind, FlagSet, FlagSpec};
use crate::types::Configuration;

/// Where a configuration value came from. Ordered by precedence, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Flag,
    Env,
    Default,
}

impl Layer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Layer::Flag => "flag",
            Layer::Env => "env",
            Layer::Default => "default",
        }
    }
}

/// A typed flag value produced by a layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Str(String),
    Bool(bool),
    List(Vec<String>),
}

impl FlagValue {
    fn into_json(self) -> Value {
        match self {
            FlagValue::Str(s) => Value::String(s),
            FlagValue::Bool(b) => Value::Bool(b),
            FlagValue::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        }
    }

    fn from_json(kind: FlagKind, value: &Value) -> Option<Self> {
        match kind {
            FlagKind::String => value.as_str().map(|s| FlagValue::Str(s.to_string())),
            FlagKind::Bool => value.as_bool().map(FlagValue::Bool),
            FlagKind::StringList => value
                .as_array()?
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(FlagValue::List),
        }
    }
}

/// One precedence layer of the configuration.
pub trait ConfigSource {
    fn layer(&self) -> Layer;

    /// Value of `flag` in this layer, or `None` when the layer does not set it.
    fn lookup(&self, flag: &FlagSpec) -> Result<Option<FlagValue>, ConfigError>;
}

/// Lowest layer: the hard-coded defaults.
///
/// Keys missing from the default `Configuration` fall back to the default
/// registered on the flag itself.
#[derive(Debug, Clone)]
pub struct DefaultLayer {
    document: Value,
}

impl DefaultLayer {
    pub fn from_config(config: &Configuration) -> Result<Self, ConfigError> {
        Ok(Self {
            document: serde_json::to_value(config)?,
        })
    }
}

impl ConfigSource for DefaultLayer {
    fn layer(&self) -> Layer {
        Layer::Default
    }

    fn lookup(&self, flag: &FlagSpec) -> Result<Option<FlagValue>, ConfigError> {
        let from_document = flag
            .name
            .split('.')
            .try_fold(&self.document, |node, part| node.get(part))
            .and_then(|value| FlagValue::from_json(flag.kind, value));
        Ok(Some(from_document.unwrap_or_else(|| flag.default.clone())))
    }
}

/// Resolve every flag of `flags` against `sources` and build the nested document.
pub fn merge(flags: &FlagSet, sources: &[&dyn ConfigSource]) -> Result<Value, ConfigError> {
    let mut ordered = sources.to_vec();
    ordered.sort_by_key(|source| source.layer());

    let mut document = Value::Object(Map::new());
    for flag in flags.flags() {
        for source in &ordered {
            if let Some(value) = source.lookup(flag)? {
                tracing::trace!(flag = flag.name, layer = source.layer().as_str(), "Resolved flag");
                insert_path(&mut document, flag.name, value.into_json())?;
                break;
            }
        }
    }
    Ok(document)
}

/// Insert `value` at the dotted `key`, creating intermediate objects.
fn insert_path(document: &mut Value, key: &str, value: Value) -> Result<(), ConfigError> {
    let mut parts = key.split('.').peekable();
    let mut node = document;
    while let Some(part) = parts.next() {
        let map = node.as_object_mut().ok_or_else(|| ConfigError::InvalidValue {
            var: key.to_string(),
            message: format!("conflicts with a value already set above {part:?}"),
        })?;
        if parts.peek().is_none() {
            map.insert(part.to_string(), value);
            return Ok(());
        }
        node = map
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    Ok(())
}

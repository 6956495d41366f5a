//! Precedence and parsing tests for the configuration loader.

use super::load_with;
use crate::constants::DEFAULT_SYMO_URL;
use crate::loader::builder::{ConfigLoader, fatal_diagnostic};
use crate::loader::env::EnvLayer;
use crate::loader::error::ConfigError;
use crate::loader::flags::{FlagSet, FlagSpec};
use crate::types::{BuildInfo, Configuration, LogLevel};

#[test]
fn test_defaults_when_nothing_is_set() {
    let (config, level) = load_with(&[], &[]).unwrap();
    assert_eq!(config, Configuration::default());
    assert_eq!(config.bind_addr, ":8080");
    assert_eq!(config.symo.url, DEFAULT_SYMO_URL);
    assert_eq!(level, Some(LogLevel::Info));
}

#[test]
fn test_flag_overrides_env_overrides_default() {
    let vars = [("BINDADDR", ":9000"), ("SYMO_URL", "http://env.local")];

    let (config, _) = load_with(&[], &vars).unwrap();
    assert_eq!(config.bind_addr, ":9000");
    assert_eq!(config.symo.url, "http://env.local");

    let (config, _) = load_with(&["--bindAddr", ":9100"], &vars).unwrap();
    assert_eq!(config.bind_addr, ":9100");
    // Flag on one key does not hide env values of other keys
    assert_eq!(config.symo.url, "http://env.local");
}

#[test]
fn test_flag_with_equals_syntax() {
    let (config, _) = load_with(&["--symo.url=http://10.0.0.9/api"], &[]).unwrap();
    assert_eq!(config.symo.url, "http://10.0.0.9/api");
}

#[test]
fn test_headers_from_repeated_flags_keep_order() {
    let (config, _) = load_with(
        &[
            "--symo.header",
            "Authorization: Bearer abc",
            "--symo.header",
            "X-Test: val",
        ],
        &[],
    )
    .unwrap();
    assert_eq!(
        config.symo.headers,
        vec!["Authorization: Bearer abc", "X-Test: val"]
    );
}

#[test]
fn test_headers_flag_replaces_env_list() {
    let vars = [("SYMO_HEADER", "A: 1,B: 2")];

    let (config, _) = load_with(&[], &vars).unwrap();
    assert_eq!(config.symo.headers, vec!["A: 1", "B: 2"]);

    let (config, _) = load_with(&["--symo.header", "C: 3"], &vars).unwrap();
    assert_eq!(config.symo.headers, vec!["C: 3"]);
}

#[test]
fn test_unknown_flag_is_fatal() {
    let err = load_with(&["--nope"], &[]).unwrap_err();
    assert!(matches!(err, ConfigError::Flags(_)));
    assert!(err.is_usage_error());
}

#[test]
fn test_missing_value_is_fatal() {
    let err = load_with(&["--symo.url"], &[]).unwrap_err();
    assert!(err.is_usage_error());
}

#[test]
fn test_positional_arguments_are_accepted() {
    let (config, _) = load_with(&["stray"], &[]).unwrap();
    assert_eq!(config, Configuration::default());

    let (config, level) = load_with(&["--log.verbose", "true", "--bindAddr", ":9200"], &[]).unwrap();
    assert!(config.log.verbose);
    assert_eq!(config.bind_addr, ":9200");
    assert_eq!(level, Some(LogLevel::Debug));
}

#[test]
fn test_invalid_env_bool_is_fatal() {
    let err = load_with(&[], &[("LOG_VERBOSE", "sometimes")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "LOG_VERBOSE"));
    assert_eq!(err.summary(), "Could not read config");
}

#[test]
fn test_flag_set_with_conflicting_definition_is_fatal() {
    let mut flag_set = FlagSet::new("symo-exporter");
    flag_set
        .add(FlagSpec::string("log.level", "trace", "defined by the caller"))
        .unwrap();

    let levels = |_: LogLevel| {};
    let err = ConfigLoader::new(BuildInfo::default())
        .load(&mut flag_set, ["symo-exporter"], &levels)
        .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateFlag(ref name) if name == "log.level"));
}

#[test]
fn test_binding_failure_diagnostic_names_program_and_build() {
    let build = BuildInfo::new("9.9.9", "c0ffee", "2024-01-01");
    let mut flag_set = FlagSet::new("symo-exporter");
    flag_set
        .add(FlagSpec::string("bindAddr", ":1", "defined by the caller"))
        .unwrap();

    let levels = |_: LogLevel| {};
    let err = ConfigLoader::new(build.clone())
        .load(&mut flag_set, ["symo-exporter"], &levels)
        .unwrap_err();

    let message = fatal_diagnostic(&build, &flag_set, &err);
    assert!(message.starts_with("Could not bind flags: flag redefined: bindAddr\n"), "{message}");
    assert!(message.contains("Usage of symo-exporter (version 9.9.9, c0ffee, 2024-01-01):"));
}

#[test]
fn test_parse_failure_diagnostic_includes_usage() {
    let build = BuildInfo::new("9.9.9", "c0ffee", "2024-01-01");
    let mut flag_set = FlagSet::new("symo-exporter");
    let levels = |_: LogLevel| {};
    let err = ConfigLoader::new(build.clone())
        .with_env(EnvLayer::from_vars(Vec::<(String, String)>::new()))
        .load(&mut flag_set, ["symo-exporter", "--nope"], &levels)
        .unwrap_err();

    let message = fatal_diagnostic(&build, &flag_set, &err);
    assert!(message.starts_with("Could not parse flags\n"), "{message}");
    assert!(message.contains("--nope"));
    assert!(message.contains("Usage of symo-exporter (version 9.9.9, c0ffee, 2024-01-01):"));
    assert!(message.contains("--symo.url"));
}

#[test]
fn test_caller_flags_are_parsed_alongside() {
    let mut flag_set = FlagSet::new("symo-exporter");
    flag_set
        .add(FlagSpec::bool("dry-run", false, "caller specific flag"))
        .unwrap();

    let levels = |_: LogLevel| {};
    let config = ConfigLoader::new(BuildInfo::default())
        .load(
            &mut flag_set,
            ["symo-exporter", "--dry-run", "--bindAddr", ":1234"],
            &levels,
        )
        .unwrap();
    assert_eq!(config.bind_addr, ":1234");
    assert_eq!(flag_set.flags().len(), 6);
}

#[test]
fn test_custom_defaults_are_lowest_layer() {
    let mut defaults = Configuration::default();
    defaults.bind_addr = "127.0.0.1:9999".to_string();

    let mut flag_set = FlagSet::new("symo-exporter");
    let levels = |_: LogLevel| {};
    let config = ConfigLoader::new(BuildInfo::default())
        .with_env(EnvLayer::from_vars(Vec::<(String, String)>::new()))
        .with_defaults(defaults)
        .load(&mut flag_set, ["symo-exporter"], &levels)
        .unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:9999");
}

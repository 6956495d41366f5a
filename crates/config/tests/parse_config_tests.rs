//! Integration tests for the public loading API.
//!
//! Test coverage:
//! - Flag registration on a caller-supplied flag set and the rendered usage text
//! - `--help` and `--version` reported as successful exits
//! - End-to-end conversion of configured headers into a header map

use symo_config::{
    BuildInfo, ConfigError, ConfigLoader, EnvLayer, ExitCode, FlagSet, LogLevel, header_map,
    register_flags, Configuration,
};

fn loader() -> ConfigLoader {
    ConfigLoader::new(BuildInfo::new("1.2.3", "abc1234", "2024-05-01"))
        .with_env(EnvLayer::from_vars(Vec::<(String, String)>::new()))
}

#[test]
fn test_usage_lists_every_flag_with_defaults() {
    let build = BuildInfo::new("1.2.3", "abc1234", "2024-05-01");
    let mut flag_set = FlagSet::new("symo-exporter");
    register_flags(&mut flag_set, &Configuration::default()).unwrap();

    let usage = flag_set.usage(&build);
    assert!(usage.starts_with("Usage of symo-exporter (version 1.2.3, abc1234, 2024-05-01):"));
    for name in ["--bindAddr", "--log.level", "--log.verbose", "--symo.header", "--symo.url"] {
        assert!(usage.contains(name), "usage is missing {name}:\n{usage}");
    }
    assert!(usage.contains("(default \":8080\")"));
    assert!(usage.contains("-v"));
}

#[test]
fn test_help_and_version_exit_successfully() {
    let levels = |_: LogLevel| {};
    for arg in ["--help", "-h", "--version"] {
        let mut flag_set = FlagSet::new("symo-exporter");
        let err = loader()
            .load(&mut flag_set, ["symo-exporter", arg], &levels)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Flags(_)));
        assert!(!err.is_usage_error());
        assert_eq!(err.exit_code(), ExitCode::Success);
    }
}

#[test]
fn test_usage_error_exit_code() {
    let levels = |_: LogLevel| {};
    let mut flag_set = FlagSet::new("symo-exporter");
    let err = loader()
        .load(&mut flag_set, ["symo-exporter", "--log.verbose=maybe"], &levels)
        .unwrap_err();
    assert_eq!(err.exit_code(), ExitCode::UsageError);
    assert_eq!(err.exit_code().as_i32(), 2);
}

#[test]
fn test_configured_headers_become_header_map() {
    let levels = |_: LogLevel| {};
    let mut flag_set = FlagSet::new("symo-exporter");
    let config = loader()
        .load(
            &mut flag_set,
            [
                "symo-exporter",
                "--symo.header",
                "Authorization: Basic dXNlcjpwYXNz",
                "--symo.header",
                "no-colon",
                "--symo.header",
                "Referer: http://symo.lan:80/",
            ],
            &levels,
        )
        .unwrap();

    let header = header_map(&config.symo.headers);
    assert_eq!(header.len(), 2);
    assert_eq!(header["authorization"], "Basic dXNlcjpwYXNz");
    assert_eq!(header["referer"], "http://symo.lan:80/");
}

//! Fronius Symo exporter - Prometheus exporter for Fronius Symo inverters.
//!
//! Responsibilities:
//! - Load `.env`, install the log subscriber and parse the configuration.
//! - Normalize the configured `symo.header` entries into an HTTP header map.
//! - Report the effective configuration.
//!
//! Does NOT handle:
//! - Flag definitions, precedence or level resolution (see `symo-config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE flag parsing so `.env` values are seen as environment variables.
//! - Configuration failures terminate the process with a diagnostic on stderr.

mod error;

use std::ffi::OsString;
use std::path::Path;

use anyhow::Context;
use error::ExitCodeExt;
use http::HeaderMap;
use symo_config::constants::DEFAULT_PROGRAM_NAME;
use symo_config::{BuildInfo, Configuration, FlagSet, LogHandle, convert_headers, load_dotenv};

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn run() -> anyhow::Result<()> {
    load_dotenv().context("Failed to load environment")?;
    let logs = LogHandle::init().context("Failed to initialize logging")?;

    let args: Vec<OsString> = std::env::args_os().collect();
    let build = BuildInfo::default();
    let mut flag_set = FlagSet::new(program_name(&args));
    let config = symo_config::parse_config(&build, &mut flag_set, args, &logs);

    let mut header = HeaderMap::new();
    convert_headers(&config.symo.headers, &mut header);
    report(&config, &header);
    Ok(())
}

/// Base name of the executable, used in the usage banner.
fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

fn report(config: &Configuration, header: &HeaderMap) {
    // Header values may carry credentials; only names are logged.
    let names: Vec<&str> = header.keys().map(|name| name.as_str()).collect();
    tracing::info!(
        bind_addr = %config.bind_addr,
        symo_url = %config.symo.url,
        log_level = %config.log.level,
        headers = ?names,
        "Configuration loaded"
    );
}

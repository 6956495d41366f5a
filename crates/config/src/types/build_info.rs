//! Build metadata shown in usage and version output.

use crate::constants::UNKNOWN_BUILD_VALUE;

/// Version, commit and build date of the running binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub date: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new(
            env!("CARGO_PKG_VERSION"),
            option_env!("SYMO_EXPORTER_COMMIT").unwrap_or(UNKNOWN_BUILD_VALUE),
            option_env!("SYMO_EXPORTER_BUILD_DATE").unwrap_or(UNKNOWN_BUILD_VALUE),
        )
    }
}

impl BuildInfo {
    pub fn new(
        version: impl Into<String>,
        commit: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            commit: commit.into(),
            date: date.into(),
        }
    }

    /// First line of the usage text, e.g. `Usage of symo-exporter (version 1.0.0, abc123, 2024-01-01):`.
    pub fn usage_header(&self, program: &str) -> String {
        format!(
            "Usage of {} (version {}, {}, {}):",
            program, self.version, self.commit, self.date
        )
    }

    /// Version string printed by `--version`.
    pub fn long_version(&self) -> String {
        format!("{} ({}, {})", self.version, self.commit, self.date)
    }
}

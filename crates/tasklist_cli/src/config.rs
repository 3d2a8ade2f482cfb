//! Environment-driven settings for the terminal front end.

use std::ffi::OsString;
use std::path::PathBuf;
use tasklist_core::default_log_level;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "TASKLIST_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const LOG_DIR_ENV: &str = "TASKLIST_LOG_DIR";
const DEFAULT_LOG_DIR_NAME: &str = "tasklist-logs";

/// Resolved front-end settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Requested log level; validated later by `init_logging`.
    pub log_level: String,
    /// Directory for rolling log files, kept byte-exact from the environment.
    pub log_dir: PathBuf,
}

impl CliConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Resolves settings through `lookup`; blank values count as unset.
    ///
    /// A non-UTF-8 level is kept lossily so `init_logging` rejects it; a
    /// non-UTF-8 directory is kept as-is so callers can report it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let log_level = lookup(LOG_LEVEL_ENV)
            .map(|raw| raw.to_string_lossy().trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        let log_dir = lookup(LOG_DIR_ENV)
            .and_then(|raw| match raw.to_str() {
                Some(value) => {
                    let trimmed = value.trim();
                    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
                }
                None => Some(PathBuf::from(raw)),
            })
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME));

        Self { log_level, log_dir }
    }

    /// Log directory as UTF-8, or `None` when the path cannot be passed on
    /// unchanged.
    pub fn log_dir_str(&self) -> Option<&str> {
        self.log_dir.to_str()
    }
}

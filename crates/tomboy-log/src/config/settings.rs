//! Logging settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;
use crate::paths::DEFAULT_APP_NAME;

/// Environment variable overriding the threshold (`debug`, `info`, ...)
pub const ENV_LEVEL: &str = "TOMBOY_LOG_LEVEL";
/// Environment variable overriding the log directory
pub const ENV_DIR: &str = "TOMBOY_LOG_DIR";
/// Environment variable muting the logger (`1`/`true`)
pub const ENV_MUTED: &str = "TOMBOY_LOG_MUTED";

/// How the process logger is built
///
/// Every field has a default, so an empty config file is valid:
///
/// ```yaml
/// app_name: Tomboy
/// threshold: INFO
/// log_dir: /var/tmp/tomboy-logs
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Names the log directory and (lower-cased) the log file
    pub app_name: String,
    /// Minimum level that reaches the sink
    pub threshold: Level,
    /// Start muted
    pub muted: bool,
    /// Replaces `<home>/Library/Logs/<app_name>` when set
    pub log_dir: Option<PathBuf>,
    /// Write a log file in addition to the console
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            threshold: Level::Debug,
            muted: false,
            log_dir: None,
            file: true,
        }
    }
}

impl LogConfig {
    /// Defaults with environment overrides applied
    ///
    /// Overrides that cannot be parsed are skipped and returned alongside.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::default().with_env_overrides()
    }

    /// Apply `TOMBOY_LOG_LEVEL`, `TOMBOY_LOG_DIR` and `TOMBOY_LOG_MUTED`
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigError>) {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production)
    ///
    /// Each override is applied on its own; a bad value leaves that field as
    /// it was and is reported in the returned list.
    pub fn with_overrides<F>(mut self, lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();
        if let Some(level) = lookup(ENV_LEVEL).filter(|v| !v.trim().is_empty()) {
            match level.parse() {
                Ok(threshold) => self.threshold = threshold,
                Err(e) => problems.push(e),
            }
        }
        if let Some(dir) = lookup(ENV_DIR).filter(|v| !v.trim().is_empty()) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(muted) = lookup(ENV_MUTED) {
            self.muted = muted == "1" || muted.eq_ignore_ascii_case("true");
        }
        (self, problems)
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Console output only, no log file
    pub fn console_only(mut self) -> Self {
        self.file = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.app_name, "Tomboy");
        assert_eq!(config.threshold, Level::Debug);
        assert!(!config.muted);
        assert!(config.file);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let (config, problems) = LogConfig::default().with_overrides(lookup(&[
            (ENV_LEVEL, "warn"),
            (ENV_DIR, "/tmp/tomboy-logs"),
            (ENV_MUTED, "TRUE"),
        ]));
        assert!(problems.is_empty());
        assert_eq!(config.threshold, Level::Warn);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/tomboy-logs")));
        assert!(config.muted);
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let (config, problems) = LogConfig::default()
            .with_threshold(Level::Error)
            .with_overrides(lookup(&[(ENV_LEVEL, " "), (ENV_DIR, "")]));
        assert!(problems.is_empty());
        assert_eq!(config.threshold, Level::Error);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_invalid_level_override_keeps_other_settings() {
        let base = LogConfig::default()
            .with_app_name("Macboy")
            .with_threshold(Level::Warn)
            .console_only();
        let (config, problems) = base.with_overrides(lookup(&[
            (ENV_LEVEL, "loud"),
            (ENV_DIR, "/tmp/tomboy-logs"),
        ]));

        assert_eq!(problems.len(), 1);
        assert!(matches!(&problems[0], ConfigError::InvalidLevel(v) if v == "loud"));
        // Only the bad field is skipped
        assert_eq!(config.threshold, Level::Warn);
        assert_eq!(config.app_name, "Macboy");
        assert!(!config.file);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/tomboy-logs")));
    }

    #[test]
    fn test_builders() {
        let config = LogConfig::default()
            .with_app_name("Macboy")
            .with_threshold(Level::Info)
            .with_log_dir("/tmp/x")
            .console_only();
        assert_eq!(config.app_name, "Macboy");
        assert_eq!(config.threshold, Level::Info);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/x")));
        assert!(!config.file);
    }
}

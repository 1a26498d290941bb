//! Loading and saving `LogConfig` files (YAML or JSON)
//!
//! The user-level file lives at `<config_dir>/tomboy/logging.yaml`
//! (`~/.config` on Linux, `~/Library/Application Support` on macOS).

use std::fs;
use std::path::{Path, PathBuf};

use super::settings::LogConfig;
use crate::error::{ConfigError, ConfigResult};

/// Default user-level config file path
pub fn user_config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("tomboy").join("logging.yaml")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "yaml" | "yml" => Ok(Format::Yaml),
        "json" => Ok(Format::Json),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

impl LogConfig {
    /// Parse a config file; the format follows the extension
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let content = fs::read_to_string(path)?;
        let config = match format {
            Format::Yaml if content.trim().is_empty() => LogConfig::default(),
            Format::Yaml => serde_yaml::from_str(&content)?,
            Format::Json => serde_json::from_str(&content)?,
        };
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(LogConfig::default());
        }
        Self::load(path)
    }

    /// User-level config file with environment overrides on top
    ///
    /// Never fails: an unreadable file falls back to the defaults and a bad
    /// override is skipped. Everything that was ignored is returned so the
    /// caller can report it.
    pub fn load_user() -> (Self, Vec<ConfigError>) {
        Self::resolve(user_config_path(), |key| std::env::var(key).ok())
    }

    /// Load `path` (or the defaults) and apply overrides from `lookup`
    pub fn resolve<F>(path: impl AsRef<Path>, lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();
        let config = Self::load_or_default(path).unwrap_or_else(|e| {
            problems.push(e);
            LogConfig::default()
        });
        let (config, override_problems) = config.with_overrides(lookup);
        problems.extend(override_problems);
        (config, problems)
    }

    /// Write the config, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = match format_of(path)? {
            Format::Yaml => serde_yaml::to_string(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}

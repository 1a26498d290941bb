//! Log file locations
//!
//! The log lives at `<home>/Library/Logs/<AppName>/<appname>.log`. The same
//! layout is used on every platform so support instructions stay identical.

use std::path::{Path, PathBuf};

use crate::error::{LogError, LogResult};

/// Application name used when none is configured
pub const DEFAULT_APP_NAME: &str = "Tomboy";

/// Directory and file a `FileSink` writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    dir: PathBuf,
    file: PathBuf,
}

impl LogPaths {
    /// Paths for `app_name` inside an explicit directory
    pub fn in_dir(dir: impl Into<PathBuf>, app_name: &str) -> Self {
        let dir = dir.into();
        let file = dir.join(log_file_name(app_name));
        Self { dir, file }
    }

    /// Per-user paths for `app_name` under the home directory
    pub fn for_app(app_name: &str) -> LogResult<Self> {
        Self::for_app_in_home(dirs::home_dir().as_deref(), app_name)
    }

    /// Per-user paths for `app_name` under an explicit home directory
    pub fn for_app_in_home(home: Option<&Path>, app_name: &str) -> LogResult<Self> {
        Ok(Self::in_dir(log_dir_in_home(home, app_name)?, app_name))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// `<home>/Library/Logs/<app_name>`
pub fn user_log_dir(app_name: &str) -> LogResult<PathBuf> {
    log_dir_in_home(dirs::home_dir().as_deref(), app_name)
}

fn log_dir_in_home(home: Option<&Path>, app_name: &str) -> LogResult<PathBuf> {
    let home = home.ok_or(LogError::NoHomeDirectory)?;
    Ok(home.join("Library").join("Logs").join(app_name))
}

/// `<app_name>.log`, lower-cased
pub fn log_file_name(app_name: &str) -> String {
    format!("{}.log", app_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        assert_eq!(log_file_name("Tomboy"), "tomboy.log");
        assert_eq!(log_file_name(DEFAULT_APP_NAME), "tomboy.log");
    }

    #[test]
    fn test_in_dir() {
        let paths = LogPaths::in_dir("/tmp/logs", "Tomboy");
        assert_eq!(paths.dir(), Path::new("/tmp/logs"));
        assert_eq!(paths.file(), Path::new("/tmp/logs/tomboy.log"));
    }

    #[test]
    fn test_for_app_in_home() {
        let paths = LogPaths::for_app_in_home(Some(Path::new("/home/ann")), "Tomboy").unwrap();
        assert_eq!(paths.dir(), Path::new("/home/ann/Library/Logs/Tomboy"));
        assert_eq!(paths.file(), Path::new("/home/ann/Library/Logs/Tomboy/tomboy.log"));

        assert!(matches!(
            LogPaths::for_app_in_home(None, "Tomboy"),
            Err(LogError::NoHomeDirectory)
        ));
    }

    #[test]
    fn test_user_log_dir_layout() {
        // Home may be missing in minimal CI containers
        if let Ok(dir) = user_log_dir("Tomboy") {
            assert!(dir.ends_with("Library/Logs/Tomboy"));
            let paths = LogPaths::for_app("Tomboy").unwrap();
            assert!(paths.file().ends_with("Library/Logs/Tomboy/tomboy.log"));
        }
    }
}

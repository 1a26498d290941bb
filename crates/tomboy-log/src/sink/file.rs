//! File sink implementation
//!
//! Writes every message to the console and, when the log file could be
//! created, appends it to `<home>/Library/Logs/<AppName>/<appname>.log` as
//! well. Each line is flushed before `accept` returns so a crash right after
//! a log call does not lose it.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::console::ConsoleSink;
use super::traits::Sink;
use crate::clock::file_time;
use crate::error::{LogError, LogResult};
use crate::format::message_body;
use crate::level::Level;
use crate::paths::{log_file_name, LogPaths};

/// Console output plus an append-only log file
///
/// If the file cannot be created the sink reports it once, as a WARN line
/// on the console, and keeps working console-only. It never retries.
pub struct FileSink {
    console: ConsoleSink,
    path: PathBuf,
    file: Mutex<Option<BufWriter<File>>>,
}

impl FileSink {
    /// Open the per-user log file for `app_name`
    ///
    /// Returns the sink together with the reason it is console-only, if it is.
    pub fn for_app(app_name: &str) -> (Self, Option<LogError>) {
        Self::for_app_with_console(app_name, ConsoleSink::new())
    }

    /// Like `for_app`, with a caller-supplied console sink
    pub fn for_app_with_console(app_name: &str, console: ConsoleSink) -> (Self, Option<LogError>) {
        Self::for_app_in_home(dirs::home_dir().as_deref(), app_name, console)
    }

    /// Like `for_app_with_console`, resolving the log directory under `home`
    ///
    /// `None` means the home directory is unknown; the sink then runs
    /// console-only.
    pub fn for_app_in_home(
        home: Option<&Path>,
        app_name: &str,
        console: ConsoleSink,
    ) -> (Self, Option<LogError>) {
        match LogPaths::for_app_in_home(home, app_name) {
            Ok(paths) => Self::open_with_console(&paths, console),
            Err(e) => {
                let path = PathBuf::from(log_file_name(app_name));
                Self::report_failure(&console, &path, &e);
                let sink = Self {
                    console,
                    path,
                    file: Mutex::new(None),
                };
                (sink, Some(e))
            }
        }
    }

    /// Open (create or truncate) the log file at `paths`
    pub fn open(paths: &LogPaths) -> (Self, Option<LogError>) {
        Self::open_with_console(paths, ConsoleSink::new())
    }

    /// Like `open`, with a caller-supplied console sink
    pub fn open_with_console(paths: &LogPaths, console: ConsoleSink) -> (Self, Option<LogError>) {
        let (file, diagnostic) = match create_log_file(paths) {
            Ok(writer) => (Some(writer), None),
            Err(e) => {
                Self::report_failure(&console, paths.file(), &e);
                (None, Some(e))
            }
        };

        let sink = Self {
            console,
            path: paths.file().to_path_buf(),
            file: Mutex::new(file),
        };
        (sink, diagnostic)
    }

    fn report_failure(console: &ConsoleSink, path: &Path, err: &LogError) {
        console.accept(
            Level::Warn,
            "Failed to create the logfile at {0}: {1}",
            &[&path.display(), err],
        );
    }

    /// Location of the log file, whether or not it could be opened
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the sink is running console-only
    pub fn is_degraded(&self) -> bool {
        self.file.lock().is_none()
    }
}

fn create_log_file(paths: &LogPaths) -> LogResult<BufWriter<File>> {
    if !paths.dir().exists() {
        fs::create_dir_all(paths.dir()).map_err(|source| LogError::CreateDirectory {
            path: paths.dir().to_path_buf(),
            source,
        })?;
    }

    let to_err = |source| LogError::CreateFile {
        path: paths.file().to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(File::create(paths.file()).map_err(to_err)?);
    writer.flush().map_err(to_err)?;
    Ok(writer)
}

impl Sink for FileSink {
    fn accept(&self, level: Level, message: &str, args: &[&dyn fmt::Display]) {
        self.console.accept(level, message, args);

        let mut file = self.file.lock();
        if let Some(writer) = file.as_mut() {
            let now = self.console.clock().now();
            let _ = writeln!(
                writer,
                "{} [{}]: {}",
                file_time(&now),
                level,
                message_body(message, args)
            );
            let _ = writer.flush();
        }
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Some(writer) = self.file.get_mut().as_mut() {
            let _ = writer.flush();
        }
    }
}

impl fmt::Debug for FileSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSink")
            .field("path", &self.path)
            .field("degraded", &self.is_degraded())
            .field("console", &self.console)
            .finish()
    }
}

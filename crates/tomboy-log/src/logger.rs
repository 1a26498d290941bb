//! Logger facade
//!
//! `Logger` owns the three pieces of mutable state: the threshold, the
//! active sink and the mute flag. All filtering happens in `Logger::log`;
//! sinks record whatever reaches them.
//!
//! Applications normally build one `Logger` at startup and hand out
//! `Arc<Logger>`. Code that cannot be threaded a handle can use the
//! process-wide instance returned by [`global`].

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::config::LogConfig;
use crate::error::LogError;
use crate::level::Level;
use crate::paths::LogPaths;
use crate::sink::{ConsoleSink, FileSink, SharedSink, Sink};

/// Leveled logger with a replaceable sink
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tomboy_log::{Level, Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(sink.clone());
///
/// logger.set_threshold(Level::Warn);
/// logger.info("dropped", &[]);
/// logger.warn("kept", &[]);
/// assert_eq!(sink.messages(), vec!["kept".to_string()]);
/// ```
pub struct Logger {
    threshold: AtomicU8,
    muted: AtomicBool,
    sink: RwLock<SharedSink>,
}

impl Logger {
    /// Create an unmuted logger passing every level to `sink`
    pub fn new(sink: SharedSink) -> Self {
        Self {
            threshold: AtomicU8::new(Level::Debug.as_u8()),
            muted: AtomicBool::new(false),
            sink: RwLock::new(sink),
        }
    }

    /// Build a logger from configuration
    ///
    /// With `config.file` set this opens the log file right away. If that
    /// fails the logger still works (console only) and the failure comes back
    /// as the second element.
    pub fn from_config(config: &LogConfig) -> (Self, Option<LogError>) {
        let mut diagnostic = None;
        let sink: SharedSink = if config.file {
            let (sink, err) = match &config.log_dir {
                Some(dir) => FileSink::open(&LogPaths::in_dir(dir, &config.app_name)),
                None => FileSink::for_app(&config.app_name),
            };
            diagnostic = err;
            Arc::new(sink)
        } else {
            Arc::new(ConsoleSink::new())
        };

        let logger = Self::new(sink);
        logger.set_threshold(config.threshold);
        if config.muted {
            logger.mute();
        }
        (logger, diagnostic)
    }

    /// Send a message to the active sink unless muted or below the threshold
    pub fn log(&self, level: Level, message: &str, args: &[&dyn fmt::Display]) {
        if !self.is_enabled(level) {
            return;
        }
        // Clone out of the lock so a slow sink never blocks `set_sink`
        let sink = self.sink.read().clone();
        sink.accept(level, message, args);
    }

    /// Whether a message at `level` would currently reach the sink
    pub fn is_enabled(&self, level: Level) -> bool {
        !self.is_muted() && level >= self.threshold()
    }

    pub fn debug(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Level::Debug, message, args);
    }

    pub fn info(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Level::Info, message, args);
    }

    pub fn warn(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Level::Warn, message, args);
    }

    pub fn error(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Level::Error, message, args);
    }

    pub fn fatal(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Level::Fatal, message, args);
    }

    /// Log at DEBUG without naming a level
    #[deprecated(note = "use one of the level specific methods (debug, info, warn, error, fatal)")]
    pub fn legacy_log(&self, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Level::Debug, message, args);
    }

    pub fn threshold(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Acquire))
    }

    pub fn set_threshold(&self, threshold: Level) {
        self.threshold.store(threshold.as_u8(), Ordering::Release);
    }

    /// The sink currently receiving messages
    pub fn sink(&self) -> SharedSink {
        self.sink.read().clone()
    }

    /// Route all further messages to `sink`, returning the previous one
    pub fn set_sink(&self, sink: SharedSink) -> SharedSink {
        std::mem::replace(&mut *self.sink.write(), sink)
    }

    /// Suppress all output; the threshold is kept
    pub fn mute(&self) {
        self.muted.store(true, Ordering::Release);
    }

    pub fn unmute(&self) {
        self.muted.store(false, Ordering::Release);
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("muted", &self.is_muted())
            .finish_non_exhaustive()
    }
}

// Process-wide logger, built from the user config on first use
static GLOBAL_LOGGER: Lazy<Arc<Logger>> = Lazy::new(|| {
    let (config, problems) = LogConfig::load_user();
    if !problems.is_empty() {
        let console = ConsoleSink::new();
        for problem in &problems {
            console.accept(
                Level::Warn,
                "Ignoring logging configuration: {0}",
                &[problem],
            );
        }
    }
    Arc::new(Logger::from_config(&config).0)
});

/// The process-wide logger
///
/// Defaults to DEBUG, unmuted, writing to the console and
/// `<home>/Library/Logs/Tomboy/tomboy.log`, with the user config file and
/// `TOMBOY_LOG_*` variables applied on top. An unreadable config file or a
/// bad variable is reported as a WARN line on the console and skipped.
pub fn global() -> Arc<Logger> {
    GLOBAL_LOGGER.clone()
}

/// Log at DEBUG through the process-wide logger
pub fn debug(message: &str, args: &[&dyn fmt::Display]) {
    GLOBAL_LOGGER.debug(message, args);
}

/// Log at INFO through the process-wide logger
pub fn info(message: &str, args: &[&dyn fmt::Display]) {
    GLOBAL_LOGGER.info(message, args);
}

/// Log at WARN through the process-wide logger
pub fn warn(message: &str, args: &[&dyn fmt::Display]) {
    GLOBAL_LOGGER.warn(message, args);
}

/// Log at ERROR through the process-wide logger
pub fn error(message: &str, args: &[&dyn fmt::Display]) {
    GLOBAL_LOGGER.error(message, args);
}

/// Log at FATAL through the process-wide logger
pub fn fatal(message: &str, args: &[&dyn fmt::Display]) {
    GLOBAL_LOGGER.fatal(message, args);
}

//! Tomboy logging
//!
//! Leveled, pluggable logging for the Tomboy note application. Messages go
//! through a [`Logger`], which drops anything below its threshold or while
//! muted, and everything else reaches the active [`Sink`]:
//!
//! - `ConsoleSink`: `[LEVEL HH:MM:SS.mmm] message` on stdout
//! - `FileSink`: console plus `<home>/Library/Logs/Tomboy/tomboy.log`
//! - `NullSink` / `MemorySink`: for tests and embedding
//!
//! Messages take positional arguments: `"got {0} items"` with `[&3]`. A
//! message logged without arguments is written exactly as given.
//!
//! ```rust,no_run
//! use tomboy_log::{Level, LogConfig, Logger};
//!
//! let (logger, problem) = Logger::from_config(&LogConfig::default());
//! if let Some(e) = problem {
//!     eprintln!("log file unavailable: {}", e);
//! }
//! logger.set_threshold(Level::Info);
//! logger.info("loaded {0} notes", &[&128]);
//! ```

pub mod level;
pub mod error;
pub mod format;
pub mod clock;
pub mod paths;
pub mod sink;
pub mod config;
pub mod logger;
mod macros;

#[cfg(test)]
mod test_support;

pub use level::Level;
pub use error::{ConfigError, ConfigResult, FormatError, LogError, LogResult};
pub use format::{message_body, render};
pub use clock::{Clock, FixedClock, SystemClock};
pub use paths::{LogPaths, DEFAULT_APP_NAME};
pub use sink::{ConsoleSink, FileSink, MemorySink, NullSink, Record, SharedSink, Sink};
pub use config::LogConfig;
pub use logger::{global, Logger};

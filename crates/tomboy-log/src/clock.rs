//! Clock abstraction for log timestamps

use std::fmt;

use chrono::{DateTime, Local};

/// Source of the local wall-clock time stamped on each line
///
/// Implementations:
/// - `SystemClock`: the real local time
/// - `FixedClock`: a frozen instant, for tests
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// `HH:MM:SS.mmm`, used by the console sink
pub(crate) fn console_time(t: &DateTime<Local>) -> impl fmt::Display + '_ {
    t.format("%H:%M:%S%.3f")
}

/// Full date and time, used by the file sink
pub(crate) fn file_time(t: &DateTime<Local>) -> impl fmt::Display + '_ {
    t.format("%Y-%m-%d %H:%M:%S")
}

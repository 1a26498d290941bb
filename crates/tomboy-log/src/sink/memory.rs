//! In-memory sink

use std::fmt;

use parking_lot::Mutex;

use super::traits::Sink;
use crate::format::message_body;
use crate::level::Level;

/// One message as received by a `MemorySink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    /// The template exactly as the caller passed it
    pub template: String,
    /// Rendered arguments, in order
    pub args: Vec<String>,
    /// The message body a console or file line would carry
    pub message: String,
}

/// Sink that keeps every record in memory
///
/// Handy for tests (swap it in with `Logger::set_sink` and assert on
/// `records()`) and for showing recent log lines inside the application.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tomboy_log::{Logger, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(sink.clone());
/// logger.info("synced {0} notes", &[&4]);
/// assert_eq!(sink.records()[0].message, "synced 4 notes");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything received so far
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Rendered message bodies, in arrival order
    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }

    /// Remove and return all records
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn accept(&self, level: Level, message: &str, args: &[&dyn fmt::Display]) {
        let record = Record {
            level,
            template: message.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            message: message_body(message, args),
        };
        self.records.lock().push(record);
    }
}

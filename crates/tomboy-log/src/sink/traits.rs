//! Sink trait definition

use std::fmt;
use std::sync::Arc;

use crate::level::Level;

/// A destination that can record one leveled, formatted message
///
/// Implementations:
/// - `NullSink`: discards everything
/// - `ConsoleSink`: timestamped lines on stdout
/// - `FileSink`: console plus a per-user log file
/// - `MemorySink`: keeps records in memory
///
/// `accept` must not fail or panic. A sink whose I/O breaks degrades on its
/// own; the logger never learns about it. Threshold and mute checks happen in
/// `Logger`, so a sink records everything it is given.
pub trait Sink: Send + Sync {
    /// Record `message`, substituting `args` when there are any
    fn accept(&self, level: Level, message: &str, args: &[&dyn fmt::Display]);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn accept(&self, level: Level, message: &str, args: &[&dyn fmt::Display]) {
        (**self).accept(level, message, args)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn accept(&self, level: Level, message: &str, args: &[&dyn fmt::Display]) {
        (**self).accept(level, message, args)
    }
}

//! Console sink implementation

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use super::traits::Sink;
use crate::clock::{console_time, Clock, SystemClock};
use crate::format::message_body;
use crate::level::Level;

enum Target {
    Stdout,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// A sink that writes `[LEVEL HH:MM:SS.mmm] message` lines to stdout
///
/// The output target and the clock can be replaced, which is how tests
/// capture exact lines. Each line is written with a single `write_all`
/// under a lock, so lines from concurrent callers never interleave.
pub struct ConsoleSink {
    target: Target,
    clock: Arc<dyn Clock>,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Create a console sink writing to standard output
    pub fn new() -> Self {
        Self {
            target: Target::Stdout,
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a console sink writing to an arbitrary writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: Target::Writer(Mutex::new(Box::new(writer))),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for timestamps
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub(crate) fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    fn format_line(&self, level: Level, message: &str, args: &[&dyn fmt::Display]) -> String {
        let now = self.clock.now();
        format!(
            "[{} {}] {}\n",
            level,
            console_time(&now),
            message_body(message, args)
        )
    }

    fn write_line(&self, line: &str) {
        // Best effort: a console that cannot be written to is not reported.
        let _ = match &self.target {
            Target::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes()).and_then(|_| out.flush())
            }
            Target::Writer(writer) => {
                let mut out = writer.lock();
                out.write_all(line.as_bytes()).and_then(|_| out.flush())
            }
        };
    }
}

impl Sink for ConsoleSink {
    fn accept(&self, level: Level, message: &str, args: &[&dyn fmt::Display]) {
        let line = self.format_line(level, message, args);
        self.write_line(&line);
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = match self.target {
            Target::Stdout => "stdout",
            Target::Writer(_) => "writer",
        };
        f.debug_struct("ConsoleSink").field("target", &target).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::test_support::{sample_time, SharedBuffer};

    fn captured() -> (ConsoleSink, SharedBuffer) {
        let buf = SharedBuffer::new();
        let sink = ConsoleSink::with_writer(buf.clone())
            .with_clock(Arc::new(FixedClock(sample_time())));
        (sink, buf)
    }

    #[test]
    fn test_console_line_format() {
        let (sink, buf) = captured();
        sink.accept(Level::Info, "note saved", &[]);
        assert_eq!(buf.contents(), "[INFO 09:05:02.045] note saved\n");
    }

    #[test]
    fn test_console_no_args_is_verbatim() {
        let (sink, buf) = captured();
        sink.accept(Level::Debug, "100% done {0}", &[]);
        assert_eq!(buf.contents(), "[DEBUG 09:05:02.045] 100% done {0}\n");
    }

    #[test]
    fn test_console_positional_args() {
        let (sink, buf) = captured();
        sink.accept(Level::Warn, "got {0} items", &[&3]);
        assert_eq!(buf.contents(), "[WARN 09:05:02.045] got 3 items\n");
    }

    #[test]
    fn test_console_one_line_per_call() {
        let (sink, buf) = captured();
        for level in Level::ALL {
            sink.accept(level, "line", &[]);
        }
        let contents = buf.contents();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[4].starts_with("[FATAL "));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_console_stdout_does_not_panic() {
        let sink = ConsoleSink::new();
        sink.accept(Level::Debug, "debug message", &[]);
        sink.accept(Level::Error, "error {0}", &[&"message"]);
    }
}

//! Sinks: where log messages end up
//!
//! - `Sink` trait for implementing custom destinations
//! - Built-in implementations: `NullSink`, `ConsoleSink`, `FileSink`, `MemorySink`

mod traits;
mod null;
mod console;
mod file;
mod memory;

pub use traits::{Sink, SharedSink};
pub use null::NullSink;
pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::{MemorySink, Record};

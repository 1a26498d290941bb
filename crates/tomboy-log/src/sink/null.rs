//! Null sink implementation

use std::fmt;

use super::traits::Sink;
use crate::level::Level;

/// A sink that discards every message
///
/// Useful for tests or when an embedding application wants logging off
/// without touching the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NullSink {
    fn accept(&self, _level: Level, _message: &str, _args: &[&dyn fmt::Display]) {}
}

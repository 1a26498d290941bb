//! Helpers shared by the unit tests

use std::io::{self, Write};
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use parking_lot::Mutex;

/// Cloneable in-memory writer; every clone appends to the same buffer
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// 2024-03-07 09:05:02.045 local time
pub(crate) fn sample_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap() + chrono::Duration::milliseconds(45)
}

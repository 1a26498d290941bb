//! Convenience macros that build the argument slice
//!
//! ```
//! use std::sync::Arc;
//! use tomboy_log::{log_info, Logger, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::new(sink.clone());
//! let title = "Groceries";
//! log_info!(logger, "opened note {0} ({1} chars)", title, 42);
//! assert_eq!(sink.messages()[0], "opened note Groceries (42 chars)");
//! ```

#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $msg, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($rest:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Debug, $($rest)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($rest:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Info, $($rest)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($rest:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Warn, $($rest)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($rest:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Error, $($rest)*)
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($rest:tt)*) => {
        $crate::log_at!($logger, $crate::Level::Fatal, $($rest)*)
    };
}

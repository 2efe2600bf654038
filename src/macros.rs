//! Logging macros for format-style messages.
//!
//! Each macro formats its arguments lazily through `format_args!` and
//! hands them to the matching [`Logger`](crate::Logger) method, so the
//! reported caller location is the macro call site.
//!
//! # Examples
//!
//! ```
//! use logx::prelude::*;
//! use logx::{info, warn};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone());
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, "{} connections pending", 3);
//!
//! assert_eq!(sink.lines().len(), 2);
//! ```

/// Log at an explicit level, returning the sink result.
///
/// ```
/// # use logx::prelude::*;
/// # let logger = Logger::new(MemorySink::new());
/// use logx::log;
/// log!(logger, Level::new(6), "Retrying in {}s", 5).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

//! # logx
//!
//! A small synchronous logger: every call formats one line (timestamp,
//! level, caller location, prefix, message) and writes it straight to a
//! configurable sink.
//!
//! ## Features
//!
//! - **Integer levels**: `DEBUG`, `INFO`, `WARN`, `ERROR` bands with
//!   in-between levels rendered as offsets (`INFO+2`)
//! - **Pluggable output**: any [`Sink`], any [`Formatter`] (closures included)
//! - **Thread safe**: configuration behind a reader/writer lock, emits
//!   never serialize on each other
//! - **Global logger**: lazily created, see [`global`]
//!
//! ```
//! use logx::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone());
//! logger.set_formatter(DefaultFormatter::plain());
//! logger.set_prefix("db");
//! logger.warn("slow query");
//!
//! let line = sink.contents();
//! assert!(line.contains(" WARN ["));
//! assert!(line.ends_with("db: slow query\n"));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        trim_path, Caller, DefaultFormatter, Emphasis, Formatter, JsonFormatter, Level, LogEntry,
        Logger, LoggerBuilder, LoggerError, Result, Sink,
    };
    pub use crate::sinks::{FileSink, MemorySink, Stderr, Stdout, WriterSink};
}

pub use core::{
    trim_path, Caller, DefaultFormatter, Emphasis, Formatter, JsonFormatter, Level, LogEntry,
    Logger, LoggerBuilder, LoggerError, Result, Sink,
};
pub use sinks::{FileSink, MemorySink, Stderr, Stdout, WriterSink};

//! Core logger types and traits

pub mod caller;
pub mod error;
pub mod formatter;
pub mod level;
pub mod log_entry;
pub mod logger;
pub mod sink;

pub use caller::{Caller, DEFAULT_CALLER_SKIP, UNKNOWN_FILE};
pub use error::{LoggerError, Result};
pub use formatter::{trim_path, DefaultFormatter, Formatter, JsonFormatter, DEFAULT_TIME_FORMAT};
pub use level::{Emphasis, Level};
pub use log_entry::LogEntry;
pub use logger::{Logger, LoggerBuilder, FORMAT_ERROR_TOKEN};
pub use sink::Sink;

//! Process-wide logger
//!
//! A single [`Logger`] built on first use, writing to standard error
//! until redirected. The free functions here forward to it, so one more
//! frame sits between application code and caller resolution; the
//! global logger's caller skip accounts for that. Raise it on
//! [`logger()`] to look through helpers that wrap these functions.

use crate::core::{Formatter, Level, Logger, Result, Sink};
use crate::sinks::Stderr;
use once_cell::sync::OnceCell;
use std::fmt;

/// Caller skip of the global logger: façade function, logger method, emit.
///
/// All three are `#[track_caller]`, so at this value the reported line is
/// the one calling the façade; each extra unit looks through one more
/// untracked wrapper.
pub const GLOBAL_CALLER_SKIP: usize = 3;

/// Lazily constructed logger, initialized at most once
pub struct GlobalLogger {
    cell: OnceCell<Logger>,
    init: fn() -> Logger,
}

impl GlobalLogger {
    pub const fn new(init: fn() -> Logger) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    pub fn get(&self) -> &Logger {
        self.cell.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

fn default_global_logger() -> Logger {
    Logger::builder()
        .output(Stderr)
        .caller_skip(GLOBAL_CALLER_SKIP)
        .build()
}

static GLOBAL: GlobalLogger = GlobalLogger::new(default_global_logger);

/// The process-wide logger, created on first call
pub fn logger() -> &'static Logger {
    GLOBAL.get()
}

pub fn set_output<S: Sink + 'static>(sink: S) {
    logger().set_output(sink);
}

pub fn set_prefix(prefix: impl Into<String>) {
    logger().set_prefix(prefix);
}

pub fn set_formatter<F: Formatter + 'static>(formatter: F) {
    logger().set_formatter(formatter);
}

/// Drop the global sink; emits then go to standard output
pub fn clear_output() {
    logger().clear_output();
}

#[track_caller]
pub fn debug(message: impl fmt::Display) {
    let _ = logger().emit(Level::DEBUG, message, GLOBAL_CALLER_SKIP);
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    let _ = logger().emit(Level::INFO, message, GLOBAL_CALLER_SKIP);
}

#[track_caller]
pub fn warn(message: impl fmt::Display) {
    let _ = logger().emit(Level::WARN, message, GLOBAL_CALLER_SKIP);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    let _ = logger().emit(Level::ERROR, message, GLOBAL_CALLER_SKIP);
}

#[track_caller]
pub fn log(level: Level, message: impl fmt::Display) -> Result<()> {
    logger().emit(level, message, GLOBAL_CALLER_SKIP)
}

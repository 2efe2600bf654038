//! Main logger implementation

use super::{
    caller::{Caller, DEFAULT_CALLER_SKIP},
    error::{LoggerError, Result},
    formatter::{DefaultFormatter, Formatter},
    level::Level,
    log_entry::LogEntry,
    sink::Sink,
};
use crate::sinks::Stdout;
use parking_lot::RwLock;
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// Appended to a message whose `Display` implementation reported an error
pub const FORMAT_ERROR_TOKEN: &str = "!(FORMAT_ERROR)";

struct LoggerConfig {
    sink: Option<Arc<dyn Sink>>,
    prefix: String,
    formatter: Arc<dyn Formatter>,
    /// Until a formatter is chosen explicitly, the default one follows
    /// the sink's terminal capability.
    formatter_is_custom: bool,
    caller_skip: usize,
}

impl LoggerConfig {
    fn retarget(&mut self, sink: Option<Arc<dyn Sink>>) {
        if !self.formatter_is_custom {
            self.formatter = default_formatter_for(sink.as_deref());
        }
        self.sink = sink;
    }
}

/// Colored only when the destination (stdout when unset) is a terminal
fn default_formatter_for(sink: Option<&dyn Sink>) -> Arc<dyn Formatter> {
    let colors = match sink {
        Some(sink) => sink.is_terminal(),
        None => Stdout.is_terminal(),
    };
    Arc::new(DefaultFormatter::with_colors(colors))
}

/// Synchronous write-through logger.
///
/// Configuration lives behind one reader/writer lock: emitting threads
/// take a shared lock only long enough to snapshot it, while the setters
/// take it exclusively. Formatting and the sink write happen outside the
/// lock, one write per call.
///
/// # Example
///
/// ```
/// use logx::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(sink.clone());
/// logger.set_prefix("api");
/// logger.info(format_args!("listening on port {}", 8080));
///
/// assert!(sink.contents().contains("listening on port 8080"));
/// ```
pub struct Logger {
    config: RwLock<LoggerConfig>,
}

impl Logger {
    /// Create a logger writing to `sink` with the default formatter.
    ///
    /// The default formatter styles its output only when the sink reports
    /// a terminal, so files and buffers receive plain text.
    #[must_use]
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self::builder().output(sink).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logx::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .output(Stderr)
    ///     .prefix("worker")
    ///     .formatter(JsonFormatter::new())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Redirect output; a default formatter is re-chosen for the new sink
    pub fn set_output<S: Sink + 'static>(&self, sink: S) {
        self.config.write().retarget(Some(Arc::new(sink)));
    }

    /// Drop the configured sink; emits then go to standard output
    pub fn clear_output(&self) {
        self.config.write().retarget(None);
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.config.write().prefix = prefix.into();
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        let mut config = self.config.write();
        config.formatter = Arc::new(formatter);
        config.formatter_is_custom = true;
    }

    /// Number of frames between application code and caller resolution;
    /// `0` selects the default of 2 (emit routine and level method).
    ///
    /// Each frame beyond that is one untracked wrapper to look through:
    /// with 3, a helper function that logs on behalf of its caller reports
    /// the helper's call site instead of its own line. Wrappers marked
    /// `#[track_caller]` are already transparent and need no extra skip.
    pub fn set_caller_skip(&self, caller_skip: usize) {
        self.config.write().caller_skip = caller_skip;
    }

    pub fn prefix(&self) -> String {
        self.config.read().prefix.clone()
    }

    pub fn caller_skip(&self) -> usize {
        self.config.read().caller_skip
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        let _ = self.emit(Level::DEBUG, message, DEFAULT_CALLER_SKIP);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        let _ = self.emit(Level::INFO, message, DEFAULT_CALLER_SKIP);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        let _ = self.emit(Level::WARN, message, DEFAULT_CALLER_SKIP);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        let _ = self.emit(Level::ERROR, message, DEFAULT_CALLER_SKIP);
    }

    /// Emit at an arbitrary level, reporting sink failures.
    ///
    /// The level-named methods discard the same errors.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) -> Result<()> {
        self.emit(level, message, DEFAULT_CALLER_SKIP)
    }

    /// `tracked` is the number of `#[track_caller]` frames on this path,
    /// which the compiler has already looked through.
    #[track_caller]
    pub(crate) fn emit(
        &self,
        level: Level,
        message: impl fmt::Display,
        tracked: usize,
    ) -> Result<()> {
        let (prefix, formatter, sink, caller_skip) = {
            let config = self.config.read();
            (
                config.prefix.clone(),
                Arc::clone(&config.formatter),
                config.sink.clone(),
                config.caller_skip,
            )
        };
        let caller_skip = if caller_skip == 0 {
            DEFAULT_CALLER_SKIP
        } else {
            caller_skip
        };

        let entry = LogEntry::new(level, render_message(&message))
            .with_prefix(prefix)
            .with_caller(Caller::resolve_skipping(caller_skip.saturating_sub(tracked)))
            .with_caller_skip(caller_skip);

        let line = formatter.format(&entry);
        let written = match sink {
            Some(sink) => sink
                .write(&line)
                .map_err(|err| LoggerError::write(sink.name(), err))?,
            None => Stdout
                .write(&line)
                .map_err(|err| LoggerError::write(Stdout.name(), err))?,
        };
        if written < line.len() {
            return Err(LoggerError::short_write(written, line.len()));
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config.read();
        f.debug_struct("Logger")
            .field("sink", &config.sink.as_ref().map(|sink| sink.name().to_string()))
            .field("prefix", &config.prefix)
            .field("caller_skip", &config.caller_skip)
            .finish_non_exhaustive()
    }
}

/// Expand a message without panicking on a failing `Display` impl
fn render_message(message: &dyn fmt::Display) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", message).is_err() {
        rendered.push_str(FORMAT_ERROR_TOKEN);
    }
    rendered
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use logx::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .output(sink.clone())
///     .prefix("db")
///     .formatter(DefaultFormatter::plain())
///     .build();
///
/// logger.warn("slow query");
/// assert!(sink.contents().contains("WARN"));
/// ```
pub struct LoggerBuilder {
    sink: Option<Arc<dyn Sink>>,
    prefix: String,
    formatter: Option<Arc<dyn Formatter>>,
    caller_skip: usize,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            sink: None,
            prefix: String::new(),
            formatter: None,
            caller_skip: 0,
        }
    }

    /// Set the output sink; without one the logger writes to stdout
    #[must_use = "builder methods return a new value"]
    pub fn output<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Without one, a [`DefaultFormatter`] colored only for terminal sinks
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// See [`Logger::set_caller_skip`]
    #[must_use = "builder methods return a new value"]
    pub fn caller_skip(mut self, caller_skip: usize) -> Self {
        self.caller_skip = caller_skip;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let formatter_is_custom = self.formatter.is_some();
        let formatter = match self.formatter {
            Some(formatter) => formatter,
            None => default_formatter_for(self.sink.as_deref()),
        };
        Logger {
            config: RwLock::new(LoggerConfig {
                sink: self.sink,
                prefix: self.prefix,
                formatter,
                formatter_is_custom,
                caller_skip: self.caller_skip,
            }),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UNKNOWN_FILE;
    use crate::sinks::MemorySink;
    use parking_lot::Mutex;
    use std::io;

    struct FailingSink;

    impl Sink for FailingSink {
        fn write(&self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct HalfSink;

    impl Sink for HalfSink {
        fn write(&self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len() / 2)
        }
    }

    struct FailingDisplay;

    impl fmt::Display for FailingDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    fn capture(logger: &Logger) -> Arc<Mutex<Vec<LogEntry>>> {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        logger.set_formatter(move |entry: &LogEntry| {
            sink.lock().push(entry.clone());
            b"captured\n".to_vec()
        });
        captured
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build();
        assert_eq!(logger.prefix(), "");
        assert_eq!(logger.caller_skip(), 0);
    }

    #[test]
    fn test_entry_fields_populated() {
        let logger = Logger::new(MemorySink::new());
        let captured = capture(&logger);

        let expected_line = line!() + 1;
        logger.info("test message");

        let entries = captured.lock();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.level, Level::INFO);
        assert_eq!(entry.message, "test message");
        assert_eq!(entry.line, expected_line);
        assert!(entry.file.ends_with("logger.rs"), "file was {}", entry.file);
        assert_eq!(entry.caller_skip, DEFAULT_CALLER_SKIP);
        assert!(entry.prefix.is_empty());
    }

    #[test]
    fn test_explicit_caller_skip_is_recorded() {
        let logger = Logger::builder().output(MemorySink::new()).caller_skip(5).build();
        let captured = capture(&logger);

        logger.warn("deep");

        assert_eq!(captured.lock()[0].caller_skip, 5);
    }

    #[inline(never)]
    fn log_on_behalf(logger: &Logger) -> u32 {
        let line = line!() + 1;
        logger.info("from helper");
        line
    }

    #[test]
    fn test_caller_skip_looks_through_plain_helper() {
        let helper: fn(&Logger) -> u32 = log_on_behalf;

        let direct = Logger::new(MemorySink::new());
        let direct_entries = capture(&direct);
        let helper_line = helper(&direct);
        assert_eq!(direct_entries.lock()[0].line, helper_line);

        let skipping = Logger::builder()
            .output(MemorySink::new())
            .caller_skip(3)
            .build();
        let skipping_entries = capture(&skipping);
        let call_line = line!() + 1;
        helper(&skipping);

        let entry = &skipping_entries.lock()[0];
        assert_eq!(entry.line, call_line);
        assert_ne!(entry.line, helper_line);
        assert!(entry.file.ends_with("logger.rs"), "file was {}", entry.file);
    }

    #[test]
    fn test_set_caller_skip_applies_to_later_emits() {
        let helper: fn(&Logger) -> u32 = log_on_behalf;
        let logger = Logger::new(MemorySink::new());
        let captured = capture(&logger);

        let helper_line = helper(&logger);
        logger.set_caller_skip(3);
        let call_line = line!() + 1;
        helper(&logger);

        let lines: Vec<u32> = captured.lock().iter().map(|entry| entry.line).collect();
        assert_eq!(lines, vec![helper_line, call_line]);
    }

    #[test]
    fn test_caller_skip_beyond_stack_reports_unknown() {
        let logger = Logger::builder()
            .output(MemorySink::new())
            .caller_skip(10_000)
            .build();
        let captured = capture(&logger);

        logger.info("nowhere");

        let entry = &captured.lock()[0];
        assert_eq!(entry.file, UNKNOWN_FILE);
        assert_eq!(entry.line, 0);
    }

    #[test]
    fn test_level_methods_use_canonical_levels() {
        let logger = Logger::new(MemorySink::new());
        let captured = capture(&logger);

        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");
        logger.log(Level::new(3), "custom").unwrap();

        let levels: Vec<Level> = captured.lock().iter().map(|entry| entry.level).collect();
        assert_eq!(
            levels,
            vec![Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR, Level::new(3)]
        );
    }

    #[test]
    fn test_log_surfaces_write_error() {
        let logger = Logger::new(FailingSink);

        let err = logger.log(Level::ERROR, "lost").unwrap_err();
        assert!(matches!(err, LoggerError::Write { ref sink, .. } if sink == "failing"));

        // Level-named methods swallow the same failure
        logger.error("also lost");
        logger.info("still running");
    }

    #[test]
    fn test_short_write_is_reported() {
        let logger = Logger::new(HalfSink);
        let err = logger.log(Level::INFO, "truncated").unwrap_err();
        assert!(matches!(err, LoggerError::ShortWrite { .. }));
    }

    #[test]
    fn test_failing_display_does_not_panic() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .output(sink.clone())
            .formatter(DefaultFormatter::plain())
            .build();

        logger.info(FailingDisplay);

        assert!(sink.contents().contains("partial!(FORMAT_ERROR)"));
    }

    #[test]
    fn test_clear_output_falls_back_without_persisting() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone());
        logger.clear_output();
        logger.set_formatter(|_: &LogEntry| Vec::new());

        assert!(logger.log(Level::INFO, "to stdout").is_ok());
        assert!(sink.is_empty());
        assert!(format!("{:?}", logger).contains("sink: None"));
    }

    #[test]
    fn test_debug_output_names_sink() {
        let logger = Logger::builder().output(MemorySink::new()).prefix("p").build();
        let debug = format!("{:?}", logger);
        assert!(debug.contains("memory"));
        assert!(debug.contains("\"p\""));
    }
}

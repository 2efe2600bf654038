//! Rendering of log entries into output lines
//!
//! A formatter turns one [`LogEntry`] into the bytes of exactly one line,
//! newline included. It must be deterministic in the entry's fields and
//! must not have side effects; the logger may call it from many threads
//! at once.

use super::log_entry::LogEntry;
use colored::Colorize;

/// Timestamp layout used by [`DefaultFormatter`]
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> Vec<u8>;
}

impl<F> Formatter for F
where
    F: Fn(&LogEntry) -> Vec<u8> + Send + Sync,
{
    fn format(&self, entry: &LogEntry) -> Vec<u8> {
        self(entry)
    }
}

/// `2023-01-01 12:00:00 INFO [main.rs:42] prefix: message`
#[derive(Debug, Clone, Copy)]
pub struct DefaultFormatter {
    use_colors: bool,
}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Colors are still subject to `colored`'s terminal detection
    /// (`NO_COLOR`, `CLICOLOR`, non-tty stdout) when enabled here.
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn plain() -> Self {
        Self::with_colors(false)
    }
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for DefaultFormatter {
    fn format(&self, entry: &LogEntry) -> Vec<u8> {
        let timestamp = entry.time.format(DEFAULT_TIME_FORMAT);
        let level = entry.level.to_string();
        let file_line = format!("[{}:{}]", trim_path(&entry.file, 1), entry.line);
        let prefix = if entry.prefix.is_empty() {
            String::new()
        } else {
            format!("{}: ", entry.prefix)
        };

        let line = if self.use_colors {
            let emphasis = entry.level.emphasis();
            let prefix = if prefix.is_empty() {
                prefix
            } else {
                prefix.bright_black().bold().to_string()
            };
            format!(
                "{} {} {} {}{}\n",
                timestamp,
                emphasis.paint(&level),
                file_line.bright_black(),
                prefix,
                emphasis.paint(&entry.message)
            )
        } else {
            format!(
                "{} {} {} {}{}\n",
                timestamp, level, file_line, prefix, entry.message
            )
        };

        line.into_bytes()
    }
}

/// One JSON object per line, with the level in its string form
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &LogEntry) -> Vec<u8> {
        let mut line = serde_json::to_vec(entry).unwrap_or_else(|err| {
            format!(
                "{{\"level\":\"{}\",\"message\":\"!(FORMAT_ERROR: {})\"}}",
                entry.level, err
            )
            .into_bytes()
        });
        line.push(b'\n');
        line
    }
}

/// Keep the last `n` segments of a forward-slash separated path.
///
/// `n == 0` and paths with fewer than `n` separators come back unchanged.
pub fn trim_path(path: &str, n: usize) -> &str {
    if n == 0 {
        return path;
    }

    let mut end = path.len();
    for _ in 0..n {
        match path[..end].rfind('/') {
            Some(idx) => end = idx,
            None => return path,
        }
    }

    &path[end + 1..]
}

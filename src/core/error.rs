//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Sink rejected the rendered line
    #[error("Failed to write log line to {sink}: {source}")]
    Write {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Sink accepted fewer bytes than the rendered line
    #[error("Short write: {written}/{expected} bytes accepted")]
    ShortWrite { written: usize, expected: usize },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Level string that does not name a band
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create a sink write error carrying the sink's name
    pub fn write(sink: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Write {
            sink: sink.into(),
            source,
        }
    }

    pub fn short_write(written: usize, expected: usize) -> Self {
        LoggerError::ShortWrite { written, expected }
    }

    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(input.into())
    }
}

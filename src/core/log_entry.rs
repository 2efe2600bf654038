//! Log entry structure

use super::caller::Caller;
use super::level::Level;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One rendered-to-be log record.
///
/// Built fresh for every emit call and handed to the formatter by
/// reference; nothing downstream mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(with = "rfc3339_millis")]
    pub time: DateTime<Local>,
    pub level: Level,
    pub prefix: String,
    /// Source path as reported by the compiler, forward-slash separated
    pub file: String,
    /// Line number, `0` when the location is unknown
    pub line: u32,
    pub message: String,
    /// Frame depth requested for caller resolution; informational only
    #[serde(skip)]
    pub caller_skip: usize,
}

impl LogEntry {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        let caller = Caller::unknown();
        Self {
            time: Local::now(),
            level,
            prefix: String::new(),
            file: caller.file,
            line: caller.line,
            message: message.into(),
            caller_skip: 0,
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.file = caller.file;
        self.line = caller.line;
        self
    }

    #[must_use]
    pub fn with_caller_skip(mut self, caller_skip: usize) -> Self {
        self.caller_skip = caller_skip;
        self
    }
}

mod rfc3339_millis {
    use chrono::{DateTime, Local, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.to_rfc3339_opts(SecondsFormat::Millis, false))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Local>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|time| time.with_timezone(&Local))
            .map_err(serde::de::Error::custom)
    }
}

//! Log level definitions
//!
//! A level is a signed severity. Four named bands partition the integer
//! line, each anchored at a canonical value; levels between canonical
//! values render as the band name plus a signed offset (`INFO+2`).

use super::error::LoggerError;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Band name and the canonical level it is measured from
    fn band(self) -> (&'static str, Level) {
        if self < Level::INFO {
            ("DEBUG", Level::DEBUG)
        } else if self < Level::WARN {
            ("INFO", Level::INFO)
        } else if self < Level::ERROR {
            ("WARN", Level::WARN)
        } else {
            ("ERROR", Level::ERROR)
        }
    }

    /// Visual emphasis tier used by terminal renderings
    #[must_use]
    pub fn emphasis(self) -> Emphasis {
        if self >= Level::ERROR {
            Emphasis::High
        } else if self >= Level::WARN {
            Emphasis::Warn
        } else if self >= Level::INFO {
            Emphasis::Info
        } else if self >= Level::DEBUG {
            Emphasis::Low
        } else {
            Emphasis::Fallback
        }
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, canonical) = self.band();
        let offset = i64::from(self.0) - i64::from(canonical.0);
        if offset == 0 {
            f.write_str(name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    /// Parses `INFO`, `warn`, `DEBUG-2`, `ERROR+92` and the like
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let split = input.find(|c: char| c == '+' || c == '-').unwrap_or(input.len());
        let (name, offset) = input.split_at(split);

        let canonical = match name.to_uppercase().as_str() {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" | "WARNING" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => return Err(LoggerError::invalid_level(s)),
        };

        if offset.is_empty() {
            return Ok(canonical);
        }

        offset
            .parse::<i32>()
            .ok()
            .and_then(|offset| canonical.0.checked_add(offset))
            .map(Level)
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

// Structured output carries the band name, never the raw integer.
impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Presentation tiers, ordered from least to most prominent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Emphasis {
    /// Below every canonical level
    Fallback,
    Low,
    Info,
    Warn,
    High,
}

impl Emphasis {
    pub fn color_code(self) -> colored::Color {
        use colored::Color::*;
        match self {
            Emphasis::Fallback => White,
            Emphasis::Low => Blue,
            Emphasis::Info => Green,
            Emphasis::Warn => Yellow,
            Emphasis::High => BrightRed,
        }
    }

    /// Wrap `text` in this tier's terminal styling
    pub fn paint(self, text: &str) -> ColoredString {
        let styled = text.color(self.color_code());
        match self {
            Emphasis::Warn | Emphasis::High => styled.bold(),
            _ => styled,
        }
    }
}

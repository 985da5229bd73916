//! Log severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    /// "What a terrible failure": a condition that should never happen.
    Wtf,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Verbose,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Wtf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Verbose => "verbose",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Wtf => "wtf",
        }
    }

    /// Single-letter form used in logcat output (`V`, `D`, ...).
    pub fn letter(&self) -> char {
        match self {
            Level::Verbose => 'V',
            Level::Debug => 'D',
            Level::Info => 'I',
            Level::Warn => 'W',
            Level::Error => 'E',
            Level::Wtf => 'A',
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for tracing::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Verbose => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error | Level::Wtf => tracing::Level::ERROR,
        }
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v" | "verbose" | "trace" => Ok(Level::Verbose),
            "d" | "debug" => Ok(Level::Debug),
            "i" | "info" => Ok(Level::Info),
            "w" | "warn" | "warning" => Ok(Level::Warn),
            "e" | "error" => Ok(Level::Error),
            "wtf" | "assert" => Ok(Level::Wtf),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_letters() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("W".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("WTF".parse::<Level>().unwrap(), Level::Wtf);
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Verbose < Level::Debug);
        assert!(Level::Error < Level::Wtf);
    }

    #[test]
    fn test_tracing_mapping() {
        assert_eq!(tracing::Level::from(Level::Wtf), tracing::Level::ERROR);
        assert_eq!(tracing::Level::from(Level::Verbose), tracing::Level::TRACE);
    }
}

//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::logcat::chunk::MAX_CHUNK_LEN;
use crate::logcat::facade::DEFAULT_TAG;
use crate::logcat::level::Level;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LogCatConfig {
    /// Logging facade settings.
    pub logcat: LoggerConfig,

    /// Internal diagnostics settings.
    pub observability: ObservabilityConfig,
}

/// Logging facade settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// Tag used when a call does not name one.
    pub tag: String,

    /// Global switch; nothing is emitted when false.
    pub enabled: bool,

    /// Append the call site to each message.
    pub trace_enabled: bool,

    /// Maximum characters per emitted line.
    pub chunk_size: usize,

    /// Records below this level are dropped.
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            enabled: true,
            trace_enabled: true,
            chunk_size: MAX_CHUNK_LEN,
            level: Level::Verbose,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter for the crate's own diagnostics (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

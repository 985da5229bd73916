//! Log sinks: where formatted records end up.

use std::error::Error;
use std::fmt;
use std::sync::Mutex;

use crate::logcat::level::Level;

/// Destination for emitted log lines. One call per line (or chunk).
pub trait LogSink: Send + Sync {
    fn log(&self, level: Level, tag: &str, msg: &str, error: Option<&(dyn Error + Send + Sync)>);
}

/// Target of every event written by [`TracingSink`]. Distinct from the
/// crate's module paths so subscriber filters can treat application logs and
/// internal diagnostics separately.
pub const SINK_TARGET: &str = "logcat_sink";

/// Forwards records to `tracing` under [`SINK_TARGET`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, tag: &str, msg: &str, error: Option<&(dyn Error + Send + Sync)>) {
        // `None` records no field at all
        let error = error.map(tracing::field::display);
        let priority = level.letter();
        match level {
            Level::Verbose => {
                tracing::trace!(target: SINK_TARGET, tag = %tag, priority = %priority, error, "{}", msg)
            }
            Level::Debug => {
                tracing::debug!(target: SINK_TARGET, tag = %tag, priority = %priority, error, "{}", msg)
            }
            Level::Info => {
                tracing::info!(target: SINK_TARGET, tag = %tag, priority = %priority, error, "{}", msg)
            }
            Level::Warn => {
                tracing::warn!(target: SINK_TARGET, tag = %tag, priority = %priority, error, "{}", msg)
            }
            Level::Error => {
                tracing::error!(target: SINK_TARGET, tag = %tag, priority = %priority, error, "{}", msg)
            }
            Level::Wtf => {
                tracing::error!(target: SINK_TARGET, tag = %tag, priority = %priority, error, wtf = true, "{}", msg)
            }
        }
    }
}

/// One line captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkEntry {
    pub level: Level,
    pub tag: String,
    pub msg: String,
    pub error: Option<String>,
}

/// Renders as a logcat line, `I/Tag: message`, with any error in parentheses.
impl fmt::Display for SinkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}: {}", self.level.letter(), self.tag, self.msg)?;
        if let Some(error) = &self.error {
            write!(f, " ({error})")?;
        }
        Ok(())
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<SinkEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all entries so far, in emission order.
    pub fn entries(&self) -> Vec<SinkEntry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return all entries.
    pub fn drain(&self) -> Vec<SinkEntry> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SinkEntry>> {
        // A panicking sink caller leaves the Vec intact
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: Level, tag: &str, msg: &str, error: Option<&(dyn Error + Send + Sync)>) {
        self.lock().push(SinkEntry {
            level,
            tag: tag.to_string(),
            msg: msg.to_string(),
            error: error.map(|e| e.to_string()),
        });
    }
}

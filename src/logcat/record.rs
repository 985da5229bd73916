//! Per-call log record passed through the hook chain.

use std::error::Error;
use std::sync::Arc;

use crate::logcat::level::Level;
use crate::logcat::occurrence::Occurrence;

/// Error attached to a log call.
pub type LogError = Arc<dyn Error + Send + Sync>;

/// One log call, as seen by hooks before it reaches the sink.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// Message text. A hook that sets this to `None` suppresses the record.
    pub msg: Option<String>,
    pub tag: String,
    pub error: Option<LogError>,
    /// Call site, used only to build the location suffix.
    pub occurred: Option<Occurrence>,
}

impl LogRecord {
    pub fn new(level: Level, msg: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            level,
            msg: Some(msg.into()),
            tag: tag.into(),
            error: None,
            occurred: None,
        }
    }

    /// Drop the record; nothing is emitted for it.
    pub fn suppress(&mut self) {
        self.msg = None;
    }

    pub fn is_suppressed(&self) -> bool {
        self.msg.is_none()
    }
}

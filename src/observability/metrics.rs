//! Metrics collection.
//!
//! # Metrics
//! - `logcat_records_total` (counter): records handed to the sink, by level
//! - `logcat_chunks_total` (counter): lines written for split messages
//! - `logcat_suppressed_total` (counter): records dropped, by reason

use crate::logcat::level::Level;

/// Why a record never reached the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    Disabled,
    BelowLevel,
    Hook,
}

impl SuppressReason {
    fn as_str(&self) -> &'static str {
        match self {
            SuppressReason::Disabled => "disabled",
            SuppressReason::BelowLevel => "below_level",
            SuppressReason::Hook => "hook",
        }
    }
}

pub fn record_emitted(level: Level) {
    metrics::counter!("logcat_records_total", "level" => level.as_str()).increment(1);
}

pub fn record_chunks(count: usize) {
    metrics::counter!("logcat_chunks_total").increment(count as u64);
}

pub fn record_suppressed(reason: SuppressReason) {
    metrics::counter!("logcat_suppressed_total", "reason" => reason.as_str()).increment(1);
}

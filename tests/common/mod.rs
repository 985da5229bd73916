//! Shared utilities for integration tests.

use std::sync::Arc;

use logcat::logcat::{MemorySink, Settings};
use logcat::LogCat;

/// A facade with default settings writing into a fresh in-memory sink.
pub fn recording_logcat() -> (LogCat, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (LogCat::new(sink.clone()), sink)
}

/// Same as [`recording_logcat`], without call-site suffixes.
#[allow(dead_code)]
pub fn recording_logcat_untraced() -> (LogCat, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let settings = Settings {
        trace_enabled: false,
        ..Settings::default()
    };
    (LogCat::with_settings(settings, sink.clone()), sink)
}

/// A unique scratch path under the system temp dir.
#[allow(dead_code)]
pub fn temp_config_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("logcat_{}_{}.toml", name, std::process::id()))
}

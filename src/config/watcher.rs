//! Hot reload of the LogCat config file.
//!
//! The file's parent directory is watched rather than the file itself, so a
//! save that replaces the file (write to a temp file, rename over the
//! original) is picked up like an in-place edit.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::LogCatConfig;

/// Reloads a config file on change and sends every valid result.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<LogCatConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiver for reloaded configs.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LogCatConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching. Reloads stop when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let file_name = self
            .path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| notify::Error::generic("config path has no file name"))?;
        let dir = watch_dir(&self.path).to_path_buf();
        let path = self.path.clone();
        let tx = self.update_tx;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if touches_file(&event, &file_name) => reload(&path, &tx),
                Ok(_) => {}
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %self.path.display(), dir = %dir.display(), "Config watcher started");
        Ok(watcher)
    }
}

fn reload(path: &Path, tx: &mpsc::UnboundedSender<LogCatConfig>) {
    match load_config(path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), tag = %config.logcat.tag, "Config reloaded");
            if tx.send(config).is_err() {
                tracing::warn!(path = %path.display(), "Config receiver dropped, reload discarded");
            }
        }
        // Mid-save states land here; the next event retries
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "Config reload rejected"),
    }
}

/// Directory to watch for `path`; `.` for a bare file name.
fn watch_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Whether `event` is a create/modify (including rename) that ends at a
/// path named `file_name`.
fn touches_file(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

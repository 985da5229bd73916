//! The logging facade.

use arc_swap::ArcSwap;
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::{Arc, Mutex};

use crate::config::schema::{LogCatConfig, LoggerConfig};
use crate::logcat::chunk::{needs_split, split_chunks, MAX_CHUNK_LEN};
use crate::logcat::hook::{HookChain, LogHook};
use crate::logcat::json::format_json;
use crate::logcat::level::Level;
use crate::logcat::occurrence::Occurrence;
use crate::logcat::record::{LogError, LogRecord};
use crate::logcat::sink::LogSink;
use crate::observability::metrics::{self, SuppressReason};

/// Sentinel tag. Records still carrying it when a call site is known are
/// re-tagged with the caller's file stem.
pub const DEFAULT_TAG: &str = "Logger";

/// Runtime settings of a [`LogCat`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tag: String,
    pub enabled: bool,
    pub trace_enabled: bool,
    pub chunk_size: usize,
    pub min_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            enabled: true,
            trace_enabled: true,
            chunk_size: MAX_CHUNK_LEN,
            min_level: Level::Verbose,
        }
    }
}

impl From<&LoggerConfig> for Settings {
    fn from(config: &LoggerConfig) -> Self {
        Self {
            tag: config.tag.clone(),
            enabled: config.enabled,
            trace_enabled: config.trace_enabled,
            chunk_size: config.chunk_size,
            min_level: config.level,
        }
    }
}

/// Per-call options for [`LogCat::log`].
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    tag: Option<String>,
    error: Option<LogError>,
    occurred: Option<Occurrence>,
}

impl LogOptions {
    /// No tag override, no error, no call site.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying the caller's location.
    #[track_caller]
    pub fn here() -> Self {
        Self {
            occurred: Some(Occurrence::here()),
            ..Self::default()
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn error<E>(mut self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(error));
        self
    }

    pub fn shared_error(mut self, error: LogError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn occurred(mut self, occurred: Option<Occurrence>) -> Self {
        self.occurred = occurred;
        self
    }
}

/// Per-call options for [`LogCat::json_with`].
#[derive(Debug, Clone)]
pub struct JsonOptions {
    tag: Option<String>,
    msg: String,
    level: Level,
    occurred: Option<Occurrence>,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            tag: None,
            msg: String::new(),
            level: Level::Info,
            occurred: None,
        }
    }
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    pub fn here() -> Self {
        Self {
            occurred: Some(Occurrence::here()),
            ..Self::default()
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Text placed before the location and the JSON body.
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn occurred(mut self, occurred: Option<Occurrence>) -> Self {
        self.occurred = occurred;
        self
    }
}

/// Logging facade: hooks, call-site suffixes, chunking, one sink.
///
/// Cheap to share behind an `Arc`. Settings and hooks can be changed at any
/// time; each call works on the snapshot it loaded first.
pub struct LogCat {
    settings: ArcSwap<Settings>,
    hooks: ArcSwap<HookChain>,
    sink: Arc<dyn LogSink>,
    /// Held while a multi-chunk message is written.
    chunk_lock: Mutex<()>,
}

impl LogCat {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_settings(Settings::default(), sink)
    }

    pub fn with_settings(settings: Settings, sink: Arc<dyn LogSink>) -> Self {
        Self {
            settings: ArcSwap::from_pointee(settings),
            hooks: ArcSwap::from_pointee(HookChain::new()),
            sink,
            chunk_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &LogCatConfig, sink: Arc<dyn LogSink>) -> Self {
        Self::with_settings(Settings::from(&config.logcat), sink)
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> Arc<Settings> {
        self.settings.load_full()
    }

    /// Switch logging on or off and optionally replace the default tag.
    pub fn set_debug(&self, enabled: bool, tag: Option<&str>) {
        self.update_settings(|s| {
            s.enabled = enabled;
            if let Some(tag) = tag {
                s.tag = tag.to_string();
            }
        });
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.update_settings(|s| s.enabled = enabled);
    }

    pub fn set_trace_enabled(&self, trace_enabled: bool) {
        self.update_settings(|s| s.trace_enabled = trace_enabled);
    }

    /// Replace all settings from a (reloaded) config. Hooks are kept.
    pub fn apply_config(&self, config: &LogCatConfig) {
        let next = Settings::from(&config.logcat);
        tracing::info!(
            tag = %next.tag,
            enabled = next.enabled,
            trace_enabled = next.trace_enabled,
            chunk_size = next.chunk_size,
            min_level = %next.min_level,
            "LogCat settings applied"
        );
        self.settings.store(Arc::new(next));
    }

    fn update_settings(&self, f: impl Fn(&mut Settings)) {
        self.settings.rcu(|current| {
            let mut next = Settings::clone(current);
            f(&mut next);
            next
        });
    }

    /// Append a hook to the end of the chain.
    pub fn add_hook(&self, hook: Arc<dyn LogHook>) {
        self.hooks.rcu(|chain| chain.with_hook(hook.clone()));
    }

    /// Remove the first registration of `hook`. Returns whether one was found.
    pub fn remove_hook(&self, hook: &Arc<dyn LogHook>) -> bool {
        let mut removed = false;
        self.hooks.rcu(|chain| match chain.without_hook(hook) {
            Some(next) => {
                removed = true;
                next
            }
            None => {
                removed = false;
                HookChain::clone(chain)
            }
        });
        removed
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.load().len()
    }

    #[track_caller]
    pub fn v<M: Display>(&self, msg: M) {
        self.log(Level::Verbose, Some(msg), LogOptions::here());
    }

    #[track_caller]
    pub fn d<M: Display>(&self, msg: M) {
        self.log(Level::Debug, Some(msg), LogOptions::here());
    }

    #[track_caller]
    pub fn i<M: Display>(&self, msg: M) {
        self.log(Level::Info, Some(msg), LogOptions::here());
    }

    #[track_caller]
    pub fn w<M: Display>(&self, msg: M) {
        self.log(Level::Warn, Some(msg), LogOptions::here());
    }

    #[track_caller]
    pub fn e<M: Display>(&self, msg: M) {
        self.log(Level::Error, Some(msg), LogOptions::here());
    }

    #[track_caller]
    pub fn wtf<M: Display>(&self, msg: M) {
        self.log(Level::Wtf, Some(msg), LogOptions::here());
    }

    /// Log an error with an empty message at [`Level::Error`].
    #[track_caller]
    pub fn error<E>(&self, error: E)
    where
        E: Error + Send + Sync + 'static,
    {
        self.log(Level::Error, Some(""), LogOptions::here().error(error));
    }

    /// General form. A `None` message is a no-op.
    pub fn log<M: Display>(&self, level: Level, msg: Option<M>, opts: LogOptions) {
        self.print(level, msg.as_ref().map(|m| m as &dyn Display), opts);
    }

    /// Pretty-print `json` at [`Level::Info`] with the caller's location.
    #[track_caller]
    pub fn json<J: Display>(&self, json: J) {
        self.json_with(Some(json), JsonOptions::here());
    }

    /// Pretty-print `json`. Emits `"{msg}{location}\n{body}"`, where the body
    /// is the re-indented JSON or a parse-error placeholder.
    pub fn json_with<J: Display>(&self, json: Option<J>, opts: JsonOptions) {
        let trace_enabled = {
            let settings = self.settings.load();
            if !settings.enabled {
                return;
            }
            settings.trace_enabled
        };
        let Some(json) = json else {
            return;
        };

        let text = json.to_string();
        let location = match (trace_enabled, opts.occurred) {
            (true, Some(occ)) => format!(" ({})", occ),
            _ => String::new(),
        };
        let body = if text.trim().is_empty() {
            text
        } else {
            format_json(&text)
        };
        let message = format!("{}{}\n{}", opts.msg, location, body);

        // Location is already in the message
        let log_opts = LogOptions {
            tag: opts.tag,
            error: None,
            occurred: None,
        };
        self.log(opts.level, Some(message), log_opts);
    }

    fn print(&self, level: Level, msg: Option<&dyn Display>, opts: LogOptions) {
        let settings = self.settings.load_full();
        if !settings.enabled {
            metrics::record_suppressed(SuppressReason::Disabled);
            return;
        }
        let Some(msg) = msg else {
            return;
        };
        if level < settings.min_level {
            metrics::record_suppressed(SuppressReason::BelowLevel);
            return;
        }

        let mut record = LogRecord {
            level,
            msg: Some(msg.to_string()),
            tag: opts.tag.unwrap_or_else(|| settings.tag.clone()),
            error: opts.error,
            occurred: opts.occurred,
        };
        if !self.hooks.load().apply(&mut record) {
            metrics::record_suppressed(SuppressReason::Hook);
            return;
        }

        let LogRecord {
            level,
            msg,
            mut tag,
            error,
            occurred,
        } = record;
        let Some(mut message) = msg else {
            return;
        };

        if settings.trace_enabled {
            if let Some(occ) = occurred {
                message.push_str(&format!(" ...({})", occ));
                if tag == DEFAULT_TAG {
                    tag = occ.file_stem().to_string();
                }
            }
        }

        let error = error.as_deref();
        if needs_split(&message, settings.chunk_size) {
            let chunks = split_chunks(&message, settings.chunk_size);
            {
                let _guard = self.chunk_lock.lock().unwrap_or_else(|e| e.into_inner());
                for chunk in &chunks {
                    self.sink.log(level, &tag, chunk, error);
                }
            }
            metrics::record_chunks(chunks.len());
        } else {
            self.sink.log(level, &tag, &message, error);
        }
        metrics::record_emitted(level);
    }
}

impl fmt::Debug for LogCat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogCat")
            .field("settings", &*self.settings.load())
            .field("hooks", &*self.hooks.load())
            .finish()
    }
}

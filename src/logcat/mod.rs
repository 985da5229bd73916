//! Logging facade subsystem.
//!
//! # Data Flow
//! ```text
//! LogCat::{v,d,i,w,e,wtf,log,json}
//!     → settings check (enabled, min level)
//!     → hook.rs (ordered chain; any hook may rewrite or suppress)
//!     → occurrence.rs (" ...(file:line)" suffix, sentinel tag → file stem)
//!     → chunk.rs (split messages longer than chunk_size)
//!     → sink.rs (one call per line)
//! ```
//!
//! # Design Decisions
//! - The facade is an explicit value; callers share it via `Arc<LogCat>`
//! - Settings and hooks are copy-on-write snapshots (`ArcSwap`)
//! - Call sites come from `#[track_caller]`, not stack inspection
//! - Only multi-chunk output takes a lock, so chunks never interleave

pub mod chunk;
pub mod facade;
pub mod hook;
pub mod json;
pub mod level;
pub mod occurrence;
pub mod record;
pub mod sink;

pub use facade::{JsonOptions, LogCat, LogOptions, Settings, DEFAULT_TAG};
pub use hook::{hook_fn, FnHook, HookChain, LogHook};
pub use level::Level;
pub use occurrence::Occurrence;
pub use record::{LogError, LogRecord};
pub use sink::{LogSink, MemorySink, SinkEntry, TracingSink, SINK_TARGET};

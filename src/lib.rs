//! Logging facade with hooks, call-site tagging and chunked output, plus a
//! write-once application handle.

pub mod app;
pub mod config;
pub mod logcat;
pub mod observability;

pub use app::{AppError, ApplicationModule};
pub use config::LogCatConfig;
pub use logcat::{Level, LogCat, LogOptions, JsonOptions};

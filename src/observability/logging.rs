//! Subscriber setup for binaries embedding the facade.
//!
//! `RUST_LOG` wins over the configured level when set. Otherwise the
//! configured level governs the crate's own diagnostics only: lines emitted
//! through [`TracingSink`](crate::logcat::TracingSink) carry the
//! [`SINK_TARGET`] target and are always let through, since the facade's
//! own level and enable switches already decided they should be printed.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::logcat::SINK_TARGET;

/// Build the filter: `RUST_LOG` if present, else [`default_filter`].
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(default_level))
}

/// `default_level` for internal targets, everything for [`SINK_TARGET`].
pub fn default_filter(default_level: &str) -> EnvFilter {
    EnvFilter::new(format!("{default_level},{SINK_TARGET}=trace"))
}

/// Install a global fmt subscriber. Returns false if one was already set.
pub fn init_tracing(default_level: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

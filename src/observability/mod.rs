//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! LogCat facade produces:
//!     → metrics.rs (emitted / suppressed / chunk counters)
//!     → tracing events for its own diagnostics
//!
//! Consumers:
//!     → logging.rs subscriber (stdout) in the driver binary
//!     → any metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder itself
//! - Metrics are cheap (no-op without a recorder)

pub mod logging;
pub mod metrics;

//! Application handle subsystem.
//!
//! # Data Flow
//! ```text
//! process startup
//!     → ApplicationModule::init(instance)   (exactly once)
//!     → ApplicationModule::get()            (any number of times)
//! ```
//!
//! # Design Decisions
//! - The handle is an explicit value owned by the caller, not ambient state
//! - Single assignment is enforced by a write-once cell
//! - Both state errors surface immediately to the caller

pub mod module;

pub use module::{AppError, ApplicationModule};

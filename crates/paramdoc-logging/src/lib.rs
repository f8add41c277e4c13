//! paramdoc-logging - Tracing setup for paramdoc tools
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber once per process
//! - [`ReloadHandle`] to change the level after installation
//! - [`DiagnosticLayer`] and [`DiagnosticCounts`] to count warnings and errors
//!   emitted during a run

mod diagnostics;
mod layer;
mod reload;

pub use diagnostics::DiagnosticCounts;
pub use layer::{DiagnosticLayer, LOG_ENV_VAR, init_logging};
pub use paramdoc_core::LogLevel;
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DiagnosticCounts, DiagnosticLayer, LogLevel, ReloadHandle, init_logging};
}

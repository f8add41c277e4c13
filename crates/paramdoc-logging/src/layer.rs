//! Subscriber installation and the diagnostic-counting layer

use crate::diagnostics::DiagnosticCounts;
use crate::reload::{ReloadHandle, level_filter};
use paramdoc_core::LogLevel;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding an optional `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "PARAMDOC_LOG";

/// Tracing layer that feeds warning and error events into [`DiagnosticCounts`]
pub struct DiagnosticLayer {
    counts: &'static DiagnosticCounts,
}

impl DiagnosticLayer {
    /// Create a layer using the global counters
    pub fn new() -> Self {
        Self {
            counts: DiagnosticCounts::global(),
        }
    }

    /// Create a layer with specific counters
    pub fn with_counts(counts: &'static DiagnosticCounts) -> Self {
        Self { counts }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for DiagnosticLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for DiagnosticLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::convert_level(event.metadata().level());
        if level < LogLevel::Warn {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.counts.record(level, &visitor.message.unwrap_or_default());
    }
}

/// Visitor to extract the message field from tracing events
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(value.to_string());
        }
    }
}

/// Reload `level` into an installed subscriber, logging a warning on failure
fn apply_level(reload: &ReloadHandle, level: LogLevel) {
    if let Err(e) = reload.reload_level(level) {
        tracing::warn!("Failed to reload log level: {e}");
    }
}

/// Install the global subscriber
///
/// Events at or above `level` are written to stderr and warnings/errors are
/// counted in [`DiagnosticCounts::global`]. When [`LOG_ENV_VAR`] holds a valid
/// directive it further narrows what is emitted. Calling this more than once
/// only reloads the level.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    let reload = ReloadHandle::global();
    if reload.is_initialized() {
        apply_level(reload, level);
        return;
    }

    let (filter, handle) = tracing_subscriber::reload::Layer::new(level_filter(level));
    let env_filter = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok());

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(DiagnosticLayer::new());

    // Another subscriber may already be installed (e.g. by a host test harness)
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        reload.set_handle(handle);
    }
}

//! Warning and error counters

use once_cell::sync::OnceCell;
use paramdoc_core::LogLevel;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Most recent messages kept per counter
const RETAINED_MESSAGES: usize = 64;

static GLOBAL_COUNTS: OnceCell<DiagnosticCounts> = OnceCell::new();

/// Counts of warning and error events seen by a [`DiagnosticLayer`](crate::DiagnosticLayer)
#[derive(Debug, Default)]
pub struct DiagnosticCounts {
    warnings: AtomicUsize,
    errors: AtomicUsize,
    messages: RwLock<VecDeque<String>>,
}

impl DiagnosticCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global counter instance
    pub fn global() -> &'static DiagnosticCounts {
        GLOBAL_COUNTS.get_or_init(DiagnosticCounts::new)
    }

    /// Record one event; levels below `Warn` are ignored
    pub fn record(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Warn => self.warnings.fetch_add(1, Ordering::SeqCst),
            LogLevel::Error => self.errors.fetch_add(1, Ordering::SeqCst),
            _ => return,
        };

        let mut messages = self.messages.write();
        if messages.len() == RETAINED_MESSAGES {
            messages.pop_front();
        }
        messages.push_back(format!("{level}: {message}"));
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }

    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    /// True when at least one warning or error was recorded
    pub fn any(&self) -> bool {
        self.warnings() + self.errors() > 0
    }

    /// Recorded messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().iter().cloned().collect()
    }

    pub fn reset(&self) {
        self.warnings.store(0, Ordering::SeqCst);
        self.errors.store(0, Ordering::SeqCst);
        self.messages.write().clear();
    }
}

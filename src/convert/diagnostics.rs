//! Diagnostics: error reporting for failed conversions.
//!
//! Conversion never logs through global state. Callers hand a [`Reporter`]
//! to the [`Converter`](super::Converter) and decide where failures go:
//! a `tracing` event by default, or an in-memory list.

use std::sync::Arc;

use parking_lot::Mutex;

// ============================================================================
// REPORTER
// ============================================================================

/// Sink for conversion failures.
///
/// Called once per failed conversion. Implementations must be shareable
/// across threads since a converter may be.
pub trait Reporter: Send + Sync {
    /// Record an error raised while doing `context`.
    fn report_error(&self, context: &str, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report_error(&self, context: &str, message: &str) {
        (**self).report_error(context, message);
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn report_error(&self, context: &str, message: &str) {
        (**self).report_error(context, message);
    }
}

/// Reports failures as `tracing` error events.
///
/// The library never installs a subscriber; without one the events are
/// dropped.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report_error(&self, context: &str, message: &str) {
        tracing::error!(context = %context, "{message}");
    }
}

// ============================================================================
// COLLECTOR
// ============================================================================

/// A single recorded failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// The operation that failed.
    pub context: String,
    /// The diagnostic message.
    pub message: String,
}

/// Keeps every reported failure in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: Mutex<Vec<Report>>,
}

impl CollectingReporter {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first.
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Number of reports.
    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    /// Check if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    /// Drop all reports.
    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl Reporter for CollectingReporter {
    fn report_error(&self, context: &str, message: &str) {
        self.reports.lock().push(Report {
            context: context.to_string(),
            message: message.to_string(),
        });
    }
}

//! Failure logging sinks.
//!
//! Logging is fire-and-forget: the reporter hands every stored failure to
//! its sink before rendering and never looks at the outcome, so a broken
//! sink cannot take the error page down with it. Sinks receive the full
//! failure text plus a category string derived from the failure kind
//! (`HttpFailure.404`, `RuntimeFault.warning`, or a bare label).

use std::sync::Arc;

use parking_lot::Mutex;

/// Receives one entry per reported failure.
pub trait FailureLog {
    /// Record `message` under `category` at error level.
    fn log_error(&self, message: &str, category: &str);
}

impl<T: FailureLog + ?Sized> FailureLog for Arc<T> {
    fn log_error(&self, message: &str, category: &str) {
        (**self).log_error(message, category);
    }
}

/// Sink that forwards entries to the `tracing` error level, carrying the
/// category as a structured field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl FailureLog for TracingLog {
    fn log_error(&self, message: &str, category: &str) {
        tracing::error!(category, "{message}");
    }
}

/// Sink that keeps entries in memory for later inspection.
#[derive(Debug, Default)]
pub struct BufferLog {
    records: Mutex<Vec<(String, String)>>,
}

impl BufferLog {
    /// Create an empty in-memory sink.
    pub fn new() -> Self {
        BufferLog::default()
    }

    /// All `(message, category)` entries recorded so far.
    pub fn records(&self) -> Vec<(String, String)> {
        self.records.lock().clone()
    }
}

impl FailureLog for BufferLog {
    fn log_error(&self, message: &str, category: &str) {
        self.records
            .lock()
            .push((message.to_string(), category.to_string()));
    }
}

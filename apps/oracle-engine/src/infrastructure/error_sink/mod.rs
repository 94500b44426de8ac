//! Error sink adapters.
//!
//! Implementations of `ErrorSinkPort`.

use std::sync::Mutex;

use tracing::warn;

use crate::application::ports::{ErrorSinkPort, OracleError};

/// Error sink that reports failures as structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl TracingErrorSink {
    /// Create a new sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ErrorSinkPort for TracingErrorSink {
    fn report(&self, stage: &str, error: &OracleError) {
        warn!(stage = %stage, error = %error, "Oracle pipeline error");
    }
}

/// Error sink that collects reports for later inspection.
///
/// Intended for tests asserting that a pipeline reported (and survived) a
/// failure.
#[derive(Debug, Default)]
pub struct CollectingErrorSink {
    reports: Mutex<Vec<String>>,
}

impl CollectingErrorSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
        }
    }

    /// Number of reports received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    /// The collected reports, formatted as `"{stage}: {error}"`.
    #[must_use]
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorSinkPort for CollectingErrorSink {
    fn report(&self, stage: &str, error: &OracleError) {
        let mut reports = self.reports.lock().unwrap();
        reports.push(format!("{stage}: {error}"));
    }
}

//! Error Sink Port (Driven Port)
//!
//! Fire-and-forget failure reporting for pipelines that must keep running.

use super::OracleError;

/// Port for reporting failures without interrupting the caller.
///
/// Used by the polling loop, where an error is reported and the loop
/// continues; synchronous callers propagate errors instead.
pub trait ErrorSinkPort: Send + Sync {
    /// Report a failure.
    ///
    /// `stage` names the operation that failed, e.g. `"fetch_price"`.
    fn report(&self, stage: &str, error: &OracleError);
}

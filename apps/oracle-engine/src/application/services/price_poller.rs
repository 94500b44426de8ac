//! Price polling service.
//!
//! Polls an oracle on a fixed cadence and emits observations over a
//! channel. Replaces ad-hoc subscription plumbing with an explicit task:
//!
//! ```text
//! PricePoller ──fetch_price──> Oracle ──> mpsc::Receiver<PriceObservation>
//! ```
//!
//! Failure handling: a failed fetch is reported to the error sink and the
//! loop continues - infinite retry, no backoff, no error terminates the
//! stream. Cancellation is cooperative: the loop checks the shutdown
//! signal between fetches, so an in-flight fetch always completes.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::Context;
use crate::application::ports::{ErrorSinkPort, Oracle};
use crate::config::PollerConfig;
use crate::domain::PriceObservation;

/// Polls a single oracle and streams its observations.
pub struct PricePoller {
    oracle: Arc<dyn Oracle>,
    context: Context,
    error_sink: Arc<dyn ErrorSinkPort>,
    config: PollerConfig,
}

impl PricePoller {
    /// Create a new poller.
    #[must_use]
    pub fn new(
        oracle: Arc<dyn Oracle>,
        context: Context,
        error_sink: Arc<dyn ErrorSinkPort>,
        config: PollerConfig,
    ) -> Self {
        Self {
            oracle,
            context,
            error_sink,
            config,
        }
    }

    /// Spawn the polling task.
    ///
    /// The first fetch happens immediately; subsequent fetches follow the
    /// configured interval. The task stops when the shutdown signal fires
    /// or the returned receiver is dropped.
    #[must_use]
    pub fn spawn(
        self,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> (mpsc::Receiver<PriceObservation>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity);
        let handle = tokio::spawn(self.run(tx, shutdown_rx));
        (rx, handle)
    }

    async fn run(self, tx: mpsc::Sender<PriceObservation>, mut shutdown_rx: broadcast::Receiver<()>) {
        let oracle_name = self.oracle.source().name.clone();
        info!(
            oracle = %oracle_name,
            interval_ms = self.config.interval_ms,
            "Price poller started"
        );

        // The first tick completes immediately, so the first observation is
        // emitted without waiting out an interval.
        let mut interval = tokio::time::interval(self.config.interval());
        let mut emitted: u64 = 0;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match self.oracle.fetch_price(&self.context).await {
                        Ok(observation) => {
                            debug!(
                                oracle = %oracle_name,
                                price = %observation.mid,
                                "Fetched price"
                            );
                            if tx.send(observation).await.is_err() {
                                // Consumer dropped the receiver.
                                break;
                            }
                            emitted += 1;
                        }
                        Err(error) => {
                            self.error_sink.report("fetch_price", &error);
                        }
                    }
                }
                _ = shutdown_rx.recv() => {
                    break;
                }
            }
        }

        info!(oracle = %oracle_name, emitted, "Price poller stopped");
    }
}

//! Concurrent consumption of delivery results.
//!
//! The run loop hands every [`DeliveryHandle`] to a [`DeliveryTracker`]; a
//! single background task resolves them in completion order and logs the
//! failures. The loop never waits on this task until the drain phase.
//!
//! Outcome counters live outside the task, so they stay readable when the
//! drain has to abandon the observer.

use crate::error::DeliveryError;
use crate::sink::DeliveryHandle;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Delivery outcomes of records observed over a run.
///
/// Preamble messages are not included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliveryStats {
    pub delivered: u64,
    pub failed: u64,
}

#[derive(Debug, Default)]
struct DeliveryCounters {
    delivered: AtomicU64,
    failed: AtomicU64,
}

impl DeliveryCounters {
    fn snapshot(&self) -> DeliveryStats {
        DeliveryStats {
            delivered: self.delivered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandleKind {
    Record,
    Header,
}

/// Sending side of the observer's event source.
///
/// Dropping the tracker closes the source; the observer then finishes once
/// the handles it already holds have resolved.
pub struct DeliveryTracker {
    tx: mpsc::UnboundedSender<(HandleKind, DeliveryHandle)>,
}

impl DeliveryTracker {
    /// Track a record's delivery; counted in [`DeliveryStats`].
    pub fn track(&self, handle: DeliveryHandle) {
        self.send(HandleKind::Record, handle);
    }

    /// Track a preamble message; failures are logged but not counted.
    pub fn track_header(&self, handle: DeliveryHandle) {
        self.send(HandleKind::Header, handle);
    }

    fn send(&self, kind: HandleKind, handle: DeliveryHandle) {
        if self.tx.send((kind, handle)).is_err() {
            debug!("Delivery observer already stopped; dropping delivery handle");
        }
    }
}

/// Handle on the background observer task.
pub struct DeliveryObserver {
    task: JoinHandle<()>,
    counters: Arc<DeliveryCounters>,
}

impl DeliveryObserver {
    /// Start the observer task. Must be called from within a tokio runtime.
    pub fn spawn() -> (DeliveryTracker, DeliveryObserver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let counters = Arc::new(DeliveryCounters::default());
        let task = tokio::spawn(observe(rx, Arc::clone(&counters)));
        (DeliveryTracker { tx }, DeliveryObserver { task, counters })
    }

    /// Outcomes resolved so far.
    pub fn stats(&self) -> DeliveryStats {
        self.counters.snapshot()
    }

    /// Wait for the observer to finish, at most until `deadline`.
    ///
    /// Returns `false` if the deadline passed first; the task is aborted and
    /// handles still pending are abandoned. [`stats`](Self::stats) keeps
    /// reporting what settled before that.
    pub async fn join_until(&mut self, deadline: Instant) -> bool {
        match tokio::time::timeout_at(deadline, &mut self.task).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                warn!("Delivery observer terminated abnormally: {e}");
                true
            }
            Err(_) => {
                self.task.abort();
                false
            }
        }
    }
}

async fn resolve(
    kind: HandleKind,
    handle: DeliveryHandle,
) -> (HandleKind, Result<(), DeliveryError>) {
    (kind, handle.await)
}

async fn observe(
    mut rx: mpsc::UnboundedReceiver<(HandleKind, DeliveryHandle)>,
    counters: Arc<DeliveryCounters>,
) {
    let mut pending = FuturesUnordered::new();
    let mut open = true;

    loop {
        tokio::select! {
            received = rx.recv(), if open => match received {
                Some((kind, handle)) => pending.push(resolve(kind, handle)),
                None => open = false,
            },
            Some(outcome) = pending.next(), if !pending.is_empty() => match outcome {
                (HandleKind::Record, Ok(())) => {
                    counters.delivered.fetch_add(1, Ordering::Relaxed);
                }
                (HandleKind::Record, Err(err)) => {
                    counters.failed.fetch_add(1, Ordering::Relaxed);
                    warn!("{err}");
                }
                (HandleKind::Header, Ok(())) => debug!("Header delivered"),
                (HandleKind::Header, Err(err)) => warn!("Header delivery failed: {}", err.0),
            },
            else => break,
        }
    }

    let stats = counters.snapshot();
    debug!(
        "Delivery observer finished: {} delivered, {} failed",
        stats.delivered, stats.failed
    );
}

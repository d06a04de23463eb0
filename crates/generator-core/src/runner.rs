//! The generation loop and its shutdown drain.

use crate::config::RunConfig;
use crate::delivery::{DeliveryObserver, DeliveryStats, DeliveryTracker};
use crate::error::DrainError;
use crate::pacer::{Pacer, StopReason, TickOutcome};
use crate::publisher::Publisher;
use crate::record::{StreamRecord, SynthesisContext};
use crate::sink::RecordSink;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Records accepted by the sink.
    pub submitted: u64,
    /// Records the sink refused synchronously.
    pub submit_failures: u64,
    /// Record delivery outcomes resolved before the drain deadline.
    pub deliveries: DeliveryStats,
    /// Whether the drain gave up with deliveries still outstanding.
    pub drain_timed_out: bool,
    pub stop_reason: StopReason,
    pub elapsed: Duration,
}

/// Outcome of the shutdown drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrainOutcome {
    pub deliveries: DeliveryStats,
    pub timed_out: bool,
}

/// Run until the configured cap is reached.
///
/// With an unlimited cap this only returns if the process is stopped
/// externally; binaries should use [`run_until`] with a signal future.
pub async fn run<R, S>(sink: &S, config: &RunConfig) -> RunReport
where
    R: StreamRecord,
    S: RecordSink + ?Sized,
{
    run_until::<R, S, _>(sink, config, std::future::pending()).await
}

/// Run until the cap is reached or `shutdown` resolves, then drain.
pub async fn run_until<R, S, F>(sink: &S, config: &RunConfig, shutdown: F) -> RunReport
where
    R: StreamRecord,
    S: RecordSink + ?Sized,
    F: Future<Output = ()>,
{
    let started = Instant::now();
    let topic = config.topic.as_deref().unwrap_or(R::TOPIC);
    let publisher = Publisher::new(sink, topic);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (tracker, observer) = DeliveryObserver::spawn();

    info!(
        "Producing {} to topic '{}' every {:?}",
        R::KIND,
        publisher.topic(),
        config.rate.interval()
    );

    if let Some(header) = R::header() {
        match publisher.publish_header(header) {
            Ok(handle) => tracker.track_header(handle),
            Err(e) => warn!("Failed to send header: {e}"),
        }
    }

    let mut sequence = 0u64;
    let progress_every = config.progress_every.max(1);
    let mut pacer = Pacer::new(config.rate);

    let exit = pacer
        .run(config.max_messages, shutdown, |produced| {
            sequence += 1;
            let record = R::synthesize(&mut rng, SynthesisContext { sequence });
            match publisher.publish(&record) {
                Ok(handle) => {
                    tracker.track(handle);
                    let sent = produced + 1;
                    if sent % progress_every == 0 {
                        info!("Sent {sent} {}", R::KIND);
                    }
                    TickOutcome::Produced
                }
                Err(e) => {
                    warn!("Failed to produce message: {e}");
                    TickOutcome::Failed
                }
            }
        })
        .await;

    match exit.reason {
        StopReason::CapReached => info!(
            "Reached maximum messages ({}), stopping",
            config.max_messages.limit().unwrap_or_default()
        ),
        StopReason::Shutdown => info!("Shutdown requested, stopping"),
    }

    let drained = drain(sink, tracker, observer, config.drain_timeout).await;

    let report = RunReport {
        submitted: exit.produced,
        submit_failures: exit.failed,
        deliveries: drained.deliveries,
        drain_timed_out: drained.timed_out,
        stop_reason: exit.reason,
        elapsed: started.elapsed(),
    };

    info!(
        "Generator stopped. Total {} sent: {} ({} delivered, {} delivery failures, {} submit failures)",
        R::KIND,
        report.submitted,
        report.deliveries.delivered,
        report.deliveries.failed,
        report.submit_failures
    );

    report
}

/// Wait, at most `timeout`, for in-flight records to settle.
///
/// Flushes the sink, closes the observer's event source and joins the
/// observer. Exceeding the deadline is logged and the observer is abandoned;
/// records still in flight at that point may be lost.
pub async fn drain<S>(
    sink: &S,
    tracker: DeliveryTracker,
    mut observer: DeliveryObserver,
    timeout: Duration,
) -> DrainOutcome
where
    S: RecordSink + ?Sized,
{
    let deadline = Instant::now() + timeout;
    let mut timed_out = false;

    match sink.flush(timeout).await {
        Ok(()) => debug!("Flushed all in-flight records"),
        Err(DrainError::TimedOut(after)) => {
            timed_out = true;
            warn!("Flush timed out after {after:?}; in-flight records may be lost");
        }
        Err(e) => warn!("{e}"),
    }

    drop(tracker);

    if !observer.join_until(deadline).await {
        timed_out = true;
        warn!("Deliveries still outstanding after {timeout:?}; abandoning them");
    }
    let deliveries = observer.stats();

    DrainOutcome {
        deliveries,
        timed_out,
    }
}

//! Fixed-rate tick source driving the synthesize-and-submit loop.

use crate::config::{MessageCap, Rate};
use std::future::Future;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};

/// Result of a single tick callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A record was synthesized and accepted by the sink.
    Produced,
    /// The cycle failed; it does not count towards the cap.
    Failed,
}

/// Why the pacer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    CapReached,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacerExit {
    /// Ticks whose callback returned [`TickOutcome::Produced`].
    pub produced: u64,
    /// Ticks whose callback returned [`TickOutcome::Failed`].
    pub failed: u64,
    pub reason: StopReason,
}

/// Fires at `1 / rate` intervals.
///
/// A late tick is not compensated by firing faster afterwards: the schedule
/// restarts from the moment the late tick fired.
pub struct Pacer {
    interval: Interval,
}

impl Pacer {
    /// Must be called from within a tokio runtime. The first tick fires immediately.
    pub fn new(rate: Rate) -> Self {
        let mut interval = tokio::time::interval(rate.interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) -> tokio::time::Instant {
        self.interval.tick().await
    }

    /// Invoke `on_tick` once per tick until `cap` successful cycles have run
    /// or `shutdown` resolves.
    ///
    /// `on_tick` receives the number of records produced so far, this tick excluded.
    ///
    /// The cap is checked before each cycle, so `on_tick` never produces more
    /// than `cap` records.
    pub async fn run<F, S>(&mut self, cap: MessageCap, shutdown: S, mut on_tick: F) -> PacerExit
    where
        F: FnMut(u64) -> TickOutcome,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut produced = 0u64;
        let mut failed = 0u64;

        loop {
            if cap.reached(produced) {
                return PacerExit {
                    produced,
                    failed,
                    reason: StopReason::CapReached,
                };
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    return PacerExit {
                        produced,
                        failed,
                        reason: StopReason::Shutdown,
                    };
                }
                _ = self.interval.tick() => {}
            }

            match on_tick(produced) {
                TickOutcome::Produced => produced += 1,
                TickOutcome::Failed => failed += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_stops_exactly_at_cap() {
        let mut pacer = Pacer::new(Rate::new(100.0).unwrap());
        let mut calls = 0u64;

        let exit = pacer
            .run(MessageCap::new(5), std::future::pending(), |_| {
                calls += 1;
                TickOutcome::Produced
            })
            .await;

        assert_eq!(calls, 5);
        assert_eq!(exit.produced, 5);
        assert_eq!(exit.failed, 0);
        assert_eq!(exit.reason, StopReason::CapReached);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_ticks_do_not_count_towards_cap() {
        let mut pacer = Pacer::new(Rate::new(100.0).unwrap());
        let mut calls = 0u64;

        let exit = pacer
            .run(MessageCap::new(3), std::future::pending(), |_| {
                calls += 1;
                if calls % 2 == 0 {
                    TickOutcome::Failed
                } else {
                    TickOutcome::Produced
                }
            })
            .await;

        // Produced on calls 1, 3, 5; failed on 2, 4.
        assert_eq!(calls, 5);
        assert_eq!(exit.produced, 3);
        assert_eq!(exit.failed, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_callback_sees_produced_count() {
        let mut pacer = Pacer::new(Rate::new(100.0).unwrap());
        let mut seen = Vec::new();

        pacer
            .run(MessageCap::new(3), std::future::pending(), |produced| {
                seen.push(produced);
                if seen.len() == 2 {
                    TickOutcome::Failed
                } else {
                    TickOutcome::Produced
                }
            })
            .await;

        assert_eq!(seen, vec![0, 1, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mean_interval_matches_rate() {
        let mut pacer = Pacer::new(Rate::new(20.0).unwrap());
        assert_eq!(pacer.period(), Duration::from_millis(50));
        let mut fired = Vec::new();

        pacer
            .run(MessageCap::new(101), std::future::pending(), |_| {
                fired.push(Instant::now());
                TickOutcome::Produced
            })
            .await;

        let total = fired[fired.len() - 1] - fired[0];
        let mean = total / (fired.len() as u32 - 1);
        let diff = mean.abs_diff(Duration::from_millis(50));
        assert!(diff <= Duration::from_millis(2), "mean interval {mean:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_burst_after_stall() {
        let mut pacer = Pacer::new(Rate::new(10.0).unwrap());
        pacer.tick().await;

        // Miss several periods, then make sure ticks resume at the normal spacing.
        tokio::time::sleep(Duration::from_millis(350)).await;
        let late = pacer.tick().await;
        let next = pacer.tick().await;
        assert!(next - late >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_unbounded_run() {
        let mut pacer = Pacer::new(Rate::new(10.0).unwrap());
        let mut calls = 0u64;
        let shutdown = tokio::time::sleep(Duration::from_millis(450));

        let exit = pacer
            .run(MessageCap::unlimited(), shutdown, |_| {
                calls += 1;
                TickOutcome::Produced
            })
            .await;

        assert_eq!(exit.reason, StopReason::Shutdown);
        // Ticks at 0, 100, 200, 300, 400 ms.
        assert_eq!(calls, 5);
        assert_eq!(exit.produced, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_cap_means_unbounded() {
        let mut pacer = Pacer::new(Rate::new(1000.0).unwrap());
        let mut calls = 0u64;
        let shutdown = tokio::time::sleep(Duration::from_millis(100));

        pacer
            .run(MessageCap::new(0), shutdown, |_| {
                calls += 1;
                TickOutcome::Produced
            })
            .await;

        assert!(calls > 50);
    }
}

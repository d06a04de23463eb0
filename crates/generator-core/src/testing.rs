//! In-memory sink and a minimal record type for exercising the run loop
//! without a broker.

use crate::error::{DeliveryError, DrainError, EncodeError, SubmitError};
use crate::record::{StreamRecord, SynthesisContext};
use crate::sink::{DeliveryHandle, RecordSink};
use futures::FutureExt;
use rand::Rng;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// A message accepted by [`MemorySink`].
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub topic: String,
    pub key: Option<Vec<u8>>,
    pub payload: Vec<u8>,
    /// Time of submission on the tokio clock.
    pub at: Instant,
}

impl SentMessage {
    pub fn payload_str(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

/// Records every accepted submission.
///
/// Failures are injected by 0-based submission attempt index, counting every
/// call to `submit` (header messages included).
#[derive(Debug, Default)]
pub struct MemorySink {
    sent: Mutex<Vec<SentMessage>>,
    attempts: AtomicU64,
    flushes: AtomicU64,
    rejected: HashSet<u64>,
    failed_deliveries: HashSet<u64>,
    stall_from: Option<u64>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse the given attempts with [`SubmitError::QueueFull`].
    pub fn reject_submissions(mut self, attempts: impl IntoIterator<Item = u64>) -> Self {
        self.rejected.extend(attempts);
        self
    }

    /// Accept the given attempts but resolve their handles with a delivery error.
    pub fn fail_deliveries(mut self, attempts: impl IntoIterator<Item = u64>) -> Self {
        self.failed_deliveries.extend(attempts);
        self
    }

    /// Never resolve delivery handles; `flush` waits out its timeout.
    pub fn stall_deliveries(self) -> Self {
        self.stall_deliveries_from(0)
    }

    /// Resolve handles normally before `attempt`, never from `attempt` on.
    /// `flush` waits out its timeout.
    pub fn stall_deliveries_from(mut self, attempt: u64) -> Self {
        self.stall_from = Some(attempt);
        self
    }

    fn stalls(&self, attempt: u64) -> bool {
        self.stall_from.is_some_and(|from| attempt >= from)
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn flush_count(&self) -> u64 {
        self.flushes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RecordSink for MemorySink {
    fn submit(
        &self,
        topic: &str,
        key: Option<&[u8]>,
        payload: &[u8],
    ) -> Result<DeliveryHandle, SubmitError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.rejected.contains(&attempt) {
            return Err(SubmitError::QueueFull);
        }

        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(SentMessage {
                topic: topic.to_string(),
                key: key.map(<[u8]>::to_vec),
                payload: payload.to_vec(),
                at: Instant::now(),
            });

        if self.stalls(attempt) {
            return Ok(futures::future::pending().boxed());
        }
        let outcome = if self.failed_deliveries.contains(&attempt) {
            Err(DeliveryError::new(format!("injected failure for attempt {attempt}")))
        } else {
            Ok(())
        };
        Ok(futures::future::ready(outcome).boxed())
    }

    async fn flush(&self, timeout: Duration) -> Result<(), DrainError> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        if self.stall_from.is_some() {
            tokio::time::sleep(timeout).await;
            return Err(DrainError::TimedOut(timeout));
        }
        Ok(())
    }
}

/// Minimal record: a sequence number plus a random nonce.
///
/// Encodes as `record-<sequence>`; keyed by the nonce in hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub sequence: u64,
    pub nonce: u32,
}

impl StreamRecord for SequenceRecord {
    const TOPIC: &'static str = "sequence-records";
    const KIND: &'static str = "records";

    fn synthesize<R: Rng>(rng: &mut R, ctx: SynthesisContext) -> Self {
        Self {
            sequence: ctx.sequence,
            nonce: rng.gen(),
        }
    }

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(format!("record-{}", self.sequence).into_bytes())
    }

    fn key(&self) -> Option<String> {
        Some(format!("{:08x}", self.nonce))
    }
}

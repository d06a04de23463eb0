//! The record-stream abstraction implemented by each generator.

use crate::error::EncodeError;
use rand::Rng;

/// Wall-clock timestamp layout used by every stream (`2024-06-15 12:30:45`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn wall_clock_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Invocation context handed to [`StreamRecord::synthesize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisContext {
    /// 1-based count of records synthesized so far in this run, this one included.
    pub sequence: u64,
}

/// A record type that can be synthesized, encoded and published on a channel.
///
/// Records are created fresh on each tick, encoded once and dropped; the
/// payload bytes are owned by the broker client after submission.
pub trait StreamRecord: Sized + Send + 'static {
    /// Default channel the stream publishes to.
    const TOPIC: &'static str;

    /// Plural noun used in log lines ("readings", "orders").
    const KIND: &'static str;

    /// Preamble sent once, before the first record of a run.
    fn header() -> Option<&'static str> {
        None
    }

    /// Produce one fully-populated record. Never fails.
    fn synthesize<R: Rng>(rng: &mut R, ctx: SynthesisContext) -> Self;

    /// Serialize to the stream's wire format.
    fn encode(&self) -> Result<Vec<u8>, EncodeError>;

    /// Optional partitioning key.
    fn key(&self) -> Option<String> {
        None
    }
}

//! Error types for the generation core.

use std::time::Duration;
use thiserror::Error;

/// Invalid run configuration, reported before the loop starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Rate must be a positive, finite number of records per second (got {0})")]
    InvalidRate(f64),

    #[error("Rate {0} records/sec yields an unusable tick interval")]
    UnusableInterval(f64),

    #[error("Progress interval must be at least 1 record")]
    InvalidProgressInterval,
}

/// A record could not be handed to the broker client.
///
/// These are synchronous failures (local queue full, client unusable). The
/// record is dropped and the loop moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Producer queue is full")]
    QueueFull,

    #[error("Broker unavailable: {0}")]
    Unavailable(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// An accepted record was not delivered by the broker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Delivery failed: {0}")]
pub struct DeliveryError(pub String);

impl DeliveryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Flushing outstanding records at shutdown did not complete cleanly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrainError {
    #[error("Flush did not complete within {0:?}")]
    TimedOut(Duration),

    #[error("Flush failed: {0}")]
    Failed(String),
}

/// A record could not be serialized to its wire format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Record encoding error: {0}")]
pub struct EncodeError(pub String);

impl EncodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure of a single publish call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

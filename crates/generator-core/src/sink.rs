//! The broker collaborator as seen by the generator.

use crate::error::{DeliveryError, DrainError, SubmitError};
use futures::future::BoxFuture;
use std::time::Duration;

/// Resolves once the broker has delivered, or definitively failed, a record.
pub type DeliveryHandle = BoxFuture<'static, Result<(), DeliveryError>>;

/// Producer-side view of a message broker.
///
/// `submit` must return without waiting for acknowledgement; the returned
/// handle is resolved later by the delivery observer.
#[async_trait::async_trait]
pub trait RecordSink: Send + Sync {
    /// Queue one message for asynchronous delivery.
    fn submit(
        &self,
        topic: &str,
        key: Option<&[u8]>,
        payload: &[u8],
    ) -> Result<DeliveryHandle, SubmitError>;

    /// Wait until every queued message is delivered or failed, at most `timeout`.
    async fn flush(&self, timeout: Duration) -> Result<(), DrainError>;
}

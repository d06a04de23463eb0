//! Encodes records and submits them to the sink without awaiting delivery.

use crate::error::PublishError;
use crate::record::StreamRecord;
use crate::sink::{DeliveryHandle, RecordSink};
use tracing::trace;

/// Publishes records of any [`StreamRecord`] type to one topic.
pub struct Publisher<'a, S: RecordSink + ?Sized> {
    sink: &'a S,
    topic: String,
}

impl<'a, S: RecordSink + ?Sized> Publisher<'a, S> {
    pub fn new(sink: &'a S, topic: impl Into<String>) -> Self {
        Self {
            sink,
            topic: topic.into(),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Encode `record` and hand it to the sink.
    ///
    /// Returns as soon as the sink accepted the message; the handle resolves
    /// when the broker acknowledges (or fails) it.
    pub fn publish<R: StreamRecord>(&self, record: &R) -> Result<DeliveryHandle, PublishError> {
        let payload = record.encode()?;
        let key = record.key();
        let handle = self
            .sink
            .submit(&self.topic, key.as_deref().map(str::as_bytes), &payload)?;
        trace!(topic = %self.topic, bytes = payload.len(), "Submitted record");
        Ok(handle)
    }

    /// Send a preamble line (e.g. a CSV header) as a plain message.
    pub fn publish_header(&self, line: &str) -> Result<DeliveryHandle, PublishError> {
        Ok(self.sink.submit(&self.topic, None, line.as_bytes())?)
    }
}

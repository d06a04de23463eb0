//! Producer settings.

use rdkafka::ClientConfig;
use std::time::Duration;

/// Connection and buffering settings for [`crate::KafkaSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaSinkConfig {
    /// Comma-separated `host:port` list.
    pub brokers: String,
    /// How long librdkafka keeps retrying a message before reporting it failed.
    pub message_timeout: Duration,
    /// Budget for the startup metadata probe.
    pub connect_timeout: Duration,
    pub linger_ms: u32,
    pub queue_buffering_max_messages: u32,
}

impl KafkaSinkConfig {
    pub fn new(brokers: impl Into<String>) -> Self {
        Self {
            brokers: brokers.into(),
            message_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            linger_ms: 5,
            queue_buffering_max_messages: 100_000,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_message_timeout(mut self, timeout: Duration) -> Self {
        self.message_timeout = timeout;
        self
    }

    /// librdkafka client configuration for the producer.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &self.brokers)
            .set(
                "message.timeout.ms",
                self.message_timeout.as_millis().to_string(),
            )
            .set(
                "queue.buffering.max.messages",
                self.queue_buffering_max_messages.to_string(),
            )
            .set("linger.ms", self.linger_ms.to_string());
        config
    }
}

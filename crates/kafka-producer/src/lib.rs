//! Kafka producer backing the stream generators.
//!
//! [`KafkaSink`] implements [`generator_core::RecordSink`] on top of an
//! rdkafka `FutureProducer`: submissions are enqueued with `send_result` and
//! never awaited in the caller, delivery futures are handed back to the run
//! loop's observer, and shutdown flushes the producer on the blocking pool.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use generator_kafka_producer::{KafkaSink, KafkaSinkConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let sink = KafkaSink::connect(KafkaSinkConfig::new("localhost:9092")).await?;
//!     sink.create_topic_if_not_exists("iot-sensors-csv", 3).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod sink;

// Re-exports for convenience
pub use config::KafkaSinkConfig;
pub use error::KafkaSinkError;
pub use sink::KafkaSink;

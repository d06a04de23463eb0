//! Stream generators
//!
//! Two producer binaries share one rate-controlled generate-and-publish loop:
//!
//! - `iot-generator` publishes IoT sensor readings as CSV lines to
//!   `iot-sensors-csv`, preceded by a header line.
//! - `order-generator` publishes e-commerce orders as JSON objects to
//!   `ecommerce-orders`.
//!
//! # CLI Usage
//!
//! ```bash
//! # 10 readings per second until stopped
//! iot-generator
//!
//! # 50 orders per second, stop after 1000
//! order-generator --rate 50 --max-messages 1000 --kafka-brokers kafka:9092
//! ```
//!
//! Set `RUST_LOG` to adjust log verbosity (default `info`).

use clap::Parser;
use generator_core::RunConfig;
use generator_kafka_producer::KafkaSinkConfig;
use std::time::Duration;

pub mod generate;

pub use generate::{init_tracing, run_generator, shutdown_signal};

/// Command-line options shared by both generators.
#[derive(Parser, Clone, Debug)]
pub struct GeneratorArgs {
    /// Records per second
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: u32,

    /// Maximum messages to send (0 = unlimited)
    #[arg(long, default_value = "0")]
    pub max_messages: u64,

    /// Kafka brokers (comma-separated, e.g., "localhost:9092")
    #[arg(long, env = "KAFKA_BROKERS", default_value = "localhost:9092")]
    pub kafka_brokers: String,

    /// Topic to publish to (defaults to the stream's own topic)
    #[arg(long)]
    pub topic: Option<String>,

    /// Random seed for reproducible record content
    #[arg(long)]
    pub seed: Option<u64>,

    /// Create the topic before producing if it does not exist
    #[arg(long)]
    pub create_topic: bool,

    /// Partition count used with --create-topic
    #[arg(long, default_value = "3")]
    pub partitions: i32,

    /// Seconds to wait for in-flight deliveries at shutdown
    #[arg(long, default_value = "15")]
    pub drain_timeout_secs: u64,
}

impl GeneratorArgs {
    pub fn run_config(&self) -> Result<RunConfig, generator_core::ConfigError> {
        let config = RunConfig::new(f64::from(self.rate), self.max_messages)?
            .with_drain_timeout(Duration::from_secs(self.drain_timeout_secs))
            .with_seed(self.seed);
        Ok(match &self.topic {
            Some(topic) => config.with_topic(topic.clone()),
            None => config,
        })
    }

    pub fn kafka_config(&self) -> KafkaSinkConfig {
        KafkaSinkConfig::new(self.kafka_brokers.clone())
    }
}

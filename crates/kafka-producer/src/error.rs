//! Error types for the Kafka sink.

use thiserror::Error;

/// Errors raised while setting up the Kafka producer.
#[derive(Error, Debug)]
pub enum KafkaSinkError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    #[error("Failed to reach Kafka brokers at {brokers}: {message}")]
    Connect { brokers: String, message: String },

    #[error("Topic creation error: {0}")]
    TopicCreation(String),
}

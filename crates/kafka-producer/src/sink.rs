//! [`RecordSink`] implementation over an rdkafka `FutureProducer`.

use crate::config::KafkaSinkConfig;
use crate::error::KafkaSinkError;
use futures::FutureExt;
use generator_core::{DeliveryError, DeliveryHandle, DrainError, RecordSink, SubmitError};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use std::time::Duration;
use tracing::{debug, info};

/// Producer handle shared by the run loop and the drain.
pub struct KafkaSink {
    producer: FutureProducer,
    config: KafkaSinkConfig,
}

impl KafkaSink {
    /// Create the producer and verify the cluster is reachable.
    ///
    /// Creating an rdkafka producer does not contact the brokers, so a
    /// metadata request is issued within `connect_timeout`; failure here is
    /// the fatal startup error.
    pub async fn connect(config: KafkaSinkConfig) -> Result<Self, KafkaSinkError> {
        let producer: FutureProducer = config.client_config().create()?;

        let probe = producer.clone();
        let timeout = config.connect_timeout;
        let broker_count = tokio::task::spawn_blocking(move || {
            probe
                .client()
                .fetch_metadata(None, timeout)
                .map(|metadata| metadata.brokers().len())
        })
        .await
        .map_err(|e| KafkaSinkError::Connect {
            brokers: config.brokers.clone(),
            message: e.to_string(),
        })?
        .map_err(|e| KafkaSinkError::Connect {
            brokers: config.brokers.clone(),
            message: e.to_string(),
        })?;

        info!(
            "Connected to Kafka at {} ({} brokers)",
            config.brokers, broker_count
        );

        Ok(Self { producer, config })
    }

    pub fn config(&self) -> &KafkaSinkConfig {
        &self.config
    }

    /// Create Kafka topic if it doesn't exist
    pub async fn create_topic_if_not_exists(
        &self,
        topic: &str,
        partitions: i32,
    ) -> Result<(), KafkaSinkError> {
        let admin_client: AdminClient<DefaultClientContext> = rdkafka::ClientConfig::new()
            .set("bootstrap.servers", &self.config.brokers)
            .create()?;

        let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(1));
        let opts = AdminOptions::new().operation_timeout(Some(self.config.connect_timeout));

        let results = admin_client
            .create_topics(&[new_topic], &opts)
            .await
            .map_err(|e| KafkaSinkError::TopicCreation(format!("Failed to create topic: {e}")))?;

        for result in results {
            match result {
                Ok(topic_name) => info!("Topic '{topic_name}' created successfully"),
                Err((topic_name, RDKafkaErrorCode::TopicAlreadyExists)) => {
                    info!("Topic '{topic_name}' already exists");
                }
                Err((topic_name, err)) => {
                    return Err(KafkaSinkError::TopicCreation(format!(
                        "Failed to create topic {topic_name}: {err}"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Classify a synchronous `send_result` failure.
pub(crate) fn submit_error(err: KafkaError) -> SubmitError {
    match err {
        KafkaError::MessageProduction(RDKafkaErrorCode::QueueFull) => SubmitError::QueueFull,
        KafkaError::MessageProduction(
            code @ (RDKafkaErrorCode::AllBrokersDown
            | RDKafkaErrorCode::BrokerTransportFailure
            | RDKafkaErrorCode::UnknownTopic
            | RDKafkaErrorCode::UnknownTopicOrPartition),
        ) => SubmitError::Unavailable(code.to_string()),
        other => SubmitError::Rejected(other.to_string()),
    }
}

#[async_trait::async_trait]
impl RecordSink for KafkaSink {
    fn submit(
        &self,
        topic: &str,
        key: Option<&[u8]>,
        payload: &[u8],
    ) -> Result<DeliveryHandle, SubmitError> {
        let mut record = FutureRecord::<[u8], [u8]>::to(topic).payload(payload);
        if let Some(key) = key {
            record = record.key(key);
        }

        let delivery = self
            .producer
            .send_result(record)
            .map_err(|(err, _record)| submit_error(err))?;

        Ok(async move {
            match delivery.await {
                Ok(Ok(_)) => Ok(()),
                Ok(Err((err, _message))) => Err(DeliveryError::new(err.to_string())),
                Err(_canceled) => Err(DeliveryError::new(
                    "producer dropped before the delivery report arrived",
                )),
            }
        }
        .boxed())
    }

    async fn flush(&self, timeout: Duration) -> Result<(), DrainError> {
        debug!("Flushing producer (timeout {timeout:?})");
        let producer = self.producer.clone();
        let flushed = tokio::task::spawn_blocking(move || producer.flush(timeout))
            .await
            .map_err(|e| DrainError::Failed(e.to_string()))?;

        match flushed {
            Ok(()) => Ok(()),
            Err(KafkaError::Flush(RDKafkaErrorCode::OperationTimedOut)) => {
                Err(DrainError::TimedOut(timeout))
            }
            Err(e) => Err(DrainError::Failed(e.to_string())),
        }
    }
}

//! Glue between the command line, the Kafka sink and the run loop.

use crate::GeneratorArgs;
use anyhow::Context;
use generator_core::{run_until, RunReport, StreamRecord};
use generator_kafka_producer::KafkaSink;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolves on Ctrl-C (SIGINT).
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

/// Connect to Kafka and run the generator for `R` until the cap or Ctrl-C.
///
/// Configuration and connection problems are returned before any record is
/// produced; once the loop has started the run always completes with a report.
pub async fn run_generator<R: StreamRecord>(args: GeneratorArgs) -> anyhow::Result<RunReport> {
    let config = args.run_config().context("Invalid generator configuration")?;
    let topic = config.topic.clone().unwrap_or_else(|| R::TOPIC.to_string());

    info!(
        "Starting generator: {} {}/sec, max={}, topic={}, brokers={}",
        args.rate,
        R::KIND,
        args.max_messages,
        topic,
        args.kafka_brokers
    );

    let sink = KafkaSink::connect(args.kafka_config())
        .await
        .context("Failed to create producer")?;

    if args.create_topic {
        sink.create_topic_if_not_exists(&topic, args.partitions)
            .await
            .with_context(|| format!("Failed to create topic '{topic}'"))?;
    }

    Ok(run_until::<R, _, _>(&sink, &config, shutdown_signal()).await)
}

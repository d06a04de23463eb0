//! Publishes synthetic IoT sensor readings as CSV lines.

use clap::Parser;
use sensor_records::SensorReading;
use stream_generators::{init_tracing, run_generator, GeneratorArgs};

#[derive(Parser)]
#[command(name = "iot-generator")]
#[command(about = "Publish synthetic IoT sensor readings to Kafka as CSV lines")]
struct Cli {
    #[command(flatten)]
    args: GeneratorArgs,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run_generator::<SensorReading>(cli.args).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

//! Publishes synthetic e-commerce orders as JSON objects.

use clap::Parser;
use order_records::Order;
use stream_generators::{init_tracing, run_generator, GeneratorArgs};

#[derive(Parser)]
#[command(name = "order-generator")]
#[command(about = "Publish synthetic e-commerce orders to Kafka as JSON")]
struct Cli {
    #[command(flatten)]
    args: GeneratorArgs,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run_generator::<Order>(cli.args).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

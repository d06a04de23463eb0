use clap::Parser;
use std::time::Duration;
use stream_generators::GeneratorArgs;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    args: GeneratorArgs,
}

fn parse(argv: &[&str]) -> Result<GeneratorArgs, clap::Error> {
    let mut full = vec!["generator"];
    full.extend_from_slice(argv);
    TestCli::try_parse_from(full).map(|cli| cli.args)
}

#[test]
fn test_defaults() {
    let args = parse(&[]).unwrap();

    assert_eq!(args.rate, 10);
    assert_eq!(args.max_messages, 0);
    assert_eq!(args.topic, None);
    assert_eq!(args.seed, None);
    assert!(!args.create_topic);
    assert_eq!(args.partitions, 3);
    assert_eq!(args.drain_timeout_secs, 15);
}

#[test]
fn test_rate_and_cap_flags() {
    let args = parse(&["--rate", "20", "--max-messages", "5"]).unwrap();
    assert_eq!(args.rate, 20);
    assert_eq!(args.max_messages, 5);

    let config = args.run_config().unwrap();
    assert_eq!(config.rate.interval(), Duration::from_millis(50));
    assert_eq!(config.max_messages.limit(), Some(5));
    assert_eq!(config.drain_timeout, Duration::from_secs(15));
}

#[test]
fn test_zero_rate_is_rejected() {
    assert!(parse(&["--rate", "0"]).is_err());
    assert!(parse(&["--rate", "-3"]).is_err());
}

#[test]
fn test_negative_max_messages_is_rejected() {
    assert!(parse(&["--max-messages", "-1"]).is_err());
}

#[test]
fn test_no_subcommands() {
    assert!(parse(&["run"]).is_err());
}

#[test]
fn test_overrides_flow_into_run_config() {
    let args = parse(&[
        "--topic",
        "custom-topic",
        "--seed",
        "42",
        "--drain-timeout-secs",
        "3",
        "--kafka-brokers",
        "kafka:9092",
    ])
    .unwrap();

    let config = args.run_config().unwrap();
    assert_eq!(config.topic.as_deref(), Some("custom-topic"));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.drain_timeout, Duration::from_secs(3));
    assert_eq!(args.kafka_config().brokers, "kafka:9092");
}

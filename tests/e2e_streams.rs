//! Full generator runs against the in-memory sink.
//!
//! These exercise the same loop the binaries run, with the Kafka sink
//! replaced by `MemorySink` so no broker is required.

use generator_core::testing::MemorySink;
use generator_core::{run, RunConfig, StopReason};
use order_records::{format_order_id, Order};
use sensor_records::{SensorReading, SensorStatus, CSV_HEADER};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_sensor_stream_sends_header_then_capped_readings() {
    let sink = MemorySink::new();
    let config = RunConfig::new(20.0, 5).unwrap().with_seed(Some(42));

    let report = run::<SensorReading, _>(&sink, &config).await;

    assert_eq!(report.submitted, 5);
    assert_eq!(report.stop_reason, StopReason::CapReached);
    // The header is delivered too, but only records are counted.
    assert_eq!(report.deliveries.delivered, 5);
    assert_eq!(report.deliveries.failed, 0);

    let sent = sink.sent();
    assert_eq!(sent.len(), 6);
    assert!(sent.iter().all(|m| m.topic == "iot-sensors-csv"));
    assert_eq!(sent[0].payload_str(), CSV_HEADER);

    for message in &sent[1..] {
        let line = message.payload_str();
        let columns: Vec<&str> = line.split(',').collect();
        assert_eq!(columns.len(), 8, "{line}");

        let temperature: f64 = columns[3].parse().unwrap();
        let humidity: f64 = columns[4].parse().unwrap();
        let pressure: f64 = columns[5].parse().unwrap();
        let battery: f64 = columns[6].parse().unwrap();
        assert!((15.0..=35.0).contains(&temperature));
        assert!((30.0..=80.0).contains(&humidity));
        assert!((980.0..=1040.0).contains(&pressure));
        assert!((20.0..=100.0).contains(&battery));

        for value in &columns[3..7] {
            let (_, decimals) = value.split_once('.').unwrap();
            assert_eq!(decimals.len(), 2, "{line}");
        }
        assert!(SensorStatus::ALL
            .iter()
            .any(|status| status.as_str() == columns[7]));
    }
}

#[tokio::test(start_paused = true)]
async fn test_header_failure_does_not_count_or_stop() {
    let sink = MemorySink::new().reject_submissions([0]);
    let config = RunConfig::new(20.0, 3).unwrap();

    let report = run::<SensorReading, _>(&sink, &config).await;

    assert_eq!(report.submitted, 3);
    assert_eq!(report.submit_failures, 0);
    let sent = sink.sent();
    assert_eq!(sent.len(), 3);
    assert_ne!(sent[0].payload_str(), CSV_HEADER);
}

#[tokio::test(start_paused = true)]
async fn test_order_stream_ids_and_totals() {
    let sink = MemorySink::new();
    let config = RunConfig::new(20.0, 25).unwrap();

    let report = run::<Order, _>(&sink, &config).await;
    assert_eq!(report.submitted, 25);

    let sent = sink.sent();
    assert_eq!(sent.len(), 25);
    for (n, message) in sent.iter().enumerate() {
        assert_eq!(message.topic, "ecommerce-orders");

        let order: Order = serde_json::from_slice(&message.payload).unwrap();
        let expected_id = format_order_id(n as u64 + 1);
        assert_eq!(order.order_id, expected_id);
        assert_eq!(message.key.as_deref(), Some(expected_id.as_bytes()));
        assert!((1..=5).contains(&order.quantity));
        assert!((order.total_price - f64::from(order.quantity) * order.unit_price).abs() < 1e-9);
    }
}

#[tokio::test(start_paused = true)]
async fn test_order_ids_stay_unique_across_submit_failures() {
    let sink = MemorySink::new().reject_submissions([1]);
    let config = RunConfig::new(20.0, 3).unwrap();

    let report = run::<Order, _>(&sink, &config).await;
    assert_eq!(report.submitted, 3);
    assert_eq!(report.submit_failures, 1);

    let ids: Vec<String> = sink
        .sent()
        .iter()
        .map(|m| serde_json::from_slice::<Order>(&m.payload).unwrap().order_id)
        .collect();
    // ORD-000002 was synthesized but refused; it is never reused.
    assert_eq!(ids, vec!["ORD-000001", "ORD-000003", "ORD-000004"]);
}

#[tokio::test(start_paused = true)]
async fn test_rate_controls_spacing() {
    let sink = MemorySink::new();
    let config = RunConfig::new(20.0, 101).unwrap();

    run::<Order, _>(&sink, &config).await;

    let sent = sink.sent();
    let total = sent[sent.len() - 1].at - sent[0].at;
    let mean = total / (sent.len() as u32 - 1);
    assert!(mean.abs_diff(Duration::from_millis(50)) <= Duration::from_millis(2));
}

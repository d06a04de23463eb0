//! Sensor reading model, synthesis and CSV encoding.

use crate::status::SensorStatus;
use generator_core::{wall_clock_timestamp, EncodeError, StreamRecord, SynthesisContext};
use rand::Rng;
use std::ops::Range;

/// Default channel for sensor readings.
pub const TOPIC: &str = "iot-sensors-csv";

/// Column names, sent once as the first message of a run.
pub const CSV_HEADER: &str =
    "timestamp,sensor_id,location,temperature,humidity,pressure,battery_level,status";

pub const SENSOR_IDS: [&str; 10] = [
    "SENS-001", "SENS-002", "SENS-003", "SENS-004", "SENS-005", "SENS-006", "SENS-007",
    "SENS-008", "SENS-009", "SENS-010",
];

pub const BUILDINGS: [&str; 3] = ["Warehouse", "Parking", "Rooftop"];

pub const FLOORS: [u8; 5] = [1, 2, 3, 4, 5];

/// Degrees Celsius.
pub const TEMPERATURE_RANGE: Range<f64> = 15.0..35.0;
/// Relative humidity, percent.
pub const HUMIDITY_RANGE: Range<f64> = 30.0..80.0;
/// hPa.
pub const PRESSURE_RANGE: Range<f64> = 980.0..1040.0;
/// Percent.
pub const BATTERY_RANGE: Range<f64> = 20.0..100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub timestamp: String,
    pub sensor_id: String,
    pub location: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub battery_level: f64,
    pub status: SensorStatus,
}

impl SensorReading {
    /// Draw a fresh reading stamped with the current wall-clock time.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self::generate_at(rng, wall_clock_timestamp())
    }

    pub fn generate_at<R: Rng>(rng: &mut R, timestamp: String) -> Self {
        let sensor_id = SENSOR_IDS[rng.gen_range(0..SENSOR_IDS.len())];
        let building = BUILDINGS[rng.gen_range(0..BUILDINGS.len())];
        let floor = FLOORS[rng.gen_range(0..FLOORS.len())];

        let temperature = rng.gen_range(TEMPERATURE_RANGE);
        let humidity = rng.gen_range(HUMIDITY_RANGE);
        let pressure = rng.gen_range(PRESSURE_RANGE);
        let battery_level = rng.gen_range(BATTERY_RANGE);

        Self {
            timestamp,
            sensor_id: sensor_id.to_string(),
            location: format!("{building}-Floor-{floor}"),
            temperature,
            humidity,
            pressure,
            battery_level,
            status: SensorStatus::classify(battery_level, temperature, humidity),
        }
    }

    /// One CSV line in [`CSV_HEADER`] column order; measurements use two decimals.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{:.2},{:.2},{:.2},{:.2},{}",
            self.timestamp,
            self.sensor_id,
            self.location,
            self.temperature,
            self.humidity,
            self.pressure,
            self.battery_level,
            self.status
        )
    }
}

impl StreamRecord for SensorReading {
    const TOPIC: &'static str = TOPIC;
    const KIND: &'static str = "readings";

    fn header() -> Option<&'static str> {
        Some(CSV_HEADER)
    }

    fn synthesize<R: Rng>(rng: &mut R, _ctx: SynthesisContext) -> Self {
        Self::generate(rng)
    }

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(self.to_csv_line().into_bytes())
    }
}

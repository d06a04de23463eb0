//! Synthetic IoT sensor telemetry.
//!
//! Each [`SensorReading`] is drawn independently: a sensor id, a location
//! built from a building and floor, and four uniformly distributed
//! measurements. The [`SensorStatus`] is derived from the measurements and is
//! never drawn on its own.
//!
//! Readings are published as comma-separated lines on `iot-sensors-csv`,
//! preceded once per run by [`CSV_HEADER`].

pub mod reading;
pub mod status;

pub use reading::{
    SensorReading, BATTERY_RANGE, BUILDINGS, CSV_HEADER, FLOORS, HUMIDITY_RANGE, PRESSURE_RANGE,
    SENSOR_IDS, TEMPERATURE_RANGE, TOPIC,
};
pub use status::SensorStatus;

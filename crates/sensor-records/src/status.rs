//! Reading status classification.

use std::fmt;

/// Health status of a reading.
///
/// Derived from the measurements in a fixed priority order, see
/// [`SensorStatus::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorStatus {
    Normal,
    HighTemp,
    LowTemp,
    HighHumidity,
    LowBattery,
}

impl SensorStatus {
    pub const ALL: [SensorStatus; 5] = [
        SensorStatus::Normal,
        SensorStatus::HighTemp,
        SensorStatus::LowTemp,
        SensorStatus::HighHumidity,
        SensorStatus::LowBattery,
    ];

    /// First matching rule wins:
    /// battery < 30, temperature > 30, temperature < 18, humidity > 70.
    pub fn classify(battery_level: f64, temperature: f64, humidity: f64) -> Self {
        if battery_level < 30.0 {
            SensorStatus::LowBattery
        } else if temperature > 30.0 {
            SensorStatus::HighTemp
        } else if temperature < 18.0 {
            SensorStatus::LowTemp
        } else if humidity > 70.0 {
            SensorStatus::HighHumidity
        } else {
            SensorStatus::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Normal => "normal",
            SensorStatus::HighTemp => "high_temp",
            SensorStatus::LowTemp => "low_temp",
            SensorStatus::HighHumidity => "high_humidity",
            SensorStatus::LowBattery => "low_battery",
        }
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_battery_wins_over_high_temp() {
        assert_eq!(
            SensorStatus::classify(25.0, 32.0, 50.0),
            SensorStatus::LowBattery
        );
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(SensorStatus::classify(29.99, 16.0, 75.0), SensorStatus::LowBattery);
        assert_eq!(SensorStatus::classify(50.0, 31.0, 75.0), SensorStatus::HighTemp);
        assert_eq!(SensorStatus::classify(50.0, 17.0, 75.0), SensorStatus::LowTemp);
        assert_eq!(SensorStatus::classify(50.0, 25.0, 75.0), SensorStatus::HighHumidity);
        assert_eq!(SensorStatus::classify(50.0, 25.0, 50.0), SensorStatus::Normal);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(SensorStatus::classify(30.0, 30.0, 70.0), SensorStatus::Normal);
        assert_eq!(SensorStatus::classify(30.0, 18.0, 70.0), SensorStatus::Normal);
    }

    #[test]
    fn test_wire_names() {
        let names: Vec<&str> = SensorStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec!["normal", "high_temp", "low_temp", "high_humidity", "low_battery"]
        );
        assert_eq!(SensorStatus::HighHumidity.to_string(), "high_humidity");
    }
}

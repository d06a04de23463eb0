//! Run configuration: target rate, message cap and shutdown budget.

use crate::error::ConfigError;
use std::time::Duration;

/// Default time allowed for in-flight deliveries to settle at shutdown.
pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(15);

/// Default number of successful submissions between progress log lines.
pub const DEFAULT_PROGRESS_EVERY: u64 = 100;

/// Target production rate in records per second.
///
/// Always positive and finite, with a non-zero tick interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    per_second: f64,
    interval: Duration,
}

impl Rate {
    pub fn new(per_second: f64) -> Result<Self, ConfigError> {
        if !per_second.is_finite() || per_second <= 0.0 {
            return Err(ConfigError::InvalidRate(per_second));
        }
        let interval = Duration::try_from_secs_f64(1.0 / per_second)
            .map_err(|_| ConfigError::UnusableInterval(per_second))?;
        if interval.is_zero() {
            return Err(ConfigError::UnusableInterval(per_second));
        }
        Ok(Self {
            per_second,
            interval,
        })
    }

    pub fn per_second(&self) -> f64 {
        self.per_second
    }

    /// Time between two ticks (`1 / rate`).
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Upper bound on successful submissions; zero means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageCap(u64);

impl MessageCap {
    pub fn new(max_messages: u64) -> Self {
        Self(max_messages)
    }

    pub fn unlimited() -> Self {
        Self(0)
    }

    pub fn is_unlimited(&self) -> bool {
        self.0 == 0
    }

    pub fn limit(&self) -> Option<u64> {
        (self.0 > 0).then_some(self.0)
    }

    /// Whether `produced` records already exhaust the cap.
    pub fn reached(&self, produced: u64) -> bool {
        self.0 > 0 && produced >= self.0
    }
}

/// Configuration for one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub rate: Rate,
    pub max_messages: MessageCap,
    /// Channel override; the record type's default topic is used when unset.
    pub topic: Option<String>,
    pub drain_timeout: Duration,
    pub progress_every: u64,
    /// Seed for reproducible record content; entropy-seeded when unset.
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn new(rate: f64, max_messages: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            rate: Rate::new(rate)?,
            max_messages: MessageCap::new(max_messages),
            topic: None,
            drain_timeout: DEFAULT_DRAIN_TIMEOUT,
            progress_every: DEFAULT_PROGRESS_EVERY,
            seed: None,
        })
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_drain_timeout(mut self, timeout: Duration) -> Self {
        self.drain_timeout = timeout;
        self
    }

    pub fn with_progress_every(mut self, every: u64) -> Result<Self, ConfigError> {
        if every == 0 {
            return Err(ConfigError::InvalidProgressInterval);
        }
        self.progress_every = every;
        Ok(self)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_interval() {
        let rate = Rate::new(20.0).unwrap();
        assert_eq!(rate.interval(), Duration::from_millis(50));
        assert_eq!(rate.per_second(), 20.0);

        let rate = Rate::new(0.5).unwrap();
        assert_eq!(rate.interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_rate_rejects_non_positive() {
        assert_eq!(Rate::new(0.0), Err(ConfigError::InvalidRate(0.0)));
        assert_eq!(Rate::new(-5.0), Err(ConfigError::InvalidRate(-5.0)));
        assert!(matches!(
            Rate::new(f64::NAN),
            Err(ConfigError::InvalidRate(_))
        ));
        assert!(matches!(
            Rate::new(f64::INFINITY),
            Err(ConfigError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_rate_rejects_degenerate_intervals() {
        assert!(matches!(
            Rate::new(1e-300),
            Err(ConfigError::UnusableInterval(_))
        ));
        assert!(matches!(
            Rate::new(1e12),
            Err(ConfigError::UnusableInterval(_))
        ));
    }

    #[test]
    fn test_message_cap() {
        let unlimited = MessageCap::unlimited();
        assert!(unlimited.is_unlimited());
        assert!(!unlimited.reached(u64::MAX));
        assert_eq!(unlimited.limit(), None);

        let cap = MessageCap::new(5);
        assert!(!cap.reached(4));
        assert!(cap.reached(5));
        assert!(cap.reached(6));
        assert_eq!(cap.limit(), Some(5));
    }

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::new(10.0, 0).unwrap();
        assert_eq!(config.drain_timeout, Duration::from_secs(15));
        assert_eq!(config.progress_every, 100);
        assert!(config.max_messages.is_unlimited());
        assert!(config.topic.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_run_config_rejects_bad_rate_and_progress() {
        assert!(RunConfig::new(0.0, 10).is_err());
        let config = RunConfig::new(1.0, 10).unwrap();
        assert_eq!(
            config.with_progress_every(0),
            Err(ConfigError::InvalidProgressInterval)
        );
    }
}

//! Rate-paced generation core for the stream generators.
//!
//! Every generator binary runs the same loop: a [`Pacer`] fires at the
//! configured rate, a [`StreamRecord`] is synthesized, the [`Publisher`]
//! encodes it and hands it to a [`RecordSink`] without waiting for the broker,
//! and a [`DeliveryObserver`] task concurrently resolves the delivery handles
//! and logs failures. When the loop stops (cap reached or shutdown requested)
//! the run is drained with a bounded timeout.
//!
//! # Architecture
//!
//! ```text
//!   Pacer tick
//!       │
//!       ▼
//! ┌──────────────┐    ┌─────────────┐    ┌──────────────┐
//! │ StreamRecord │───▶│  Publisher  │───▶│  RecordSink  │
//! │  synthesize  │    │ encode+send │    │ (broker)     │
//! └──────────────┘    └──────┬──────┘    └──────────────┘
//!                            │ DeliveryHandle
//!                            ▼
//!                   ┌──────────────────┐
//!                   │ DeliveryObserver │  logs failures
//!                   └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use generator_core::testing::{MemorySink, SequenceRecord};
//! use generator_core::{run, RunConfig};
//!
//! # async fn example() -> Result<(), generator_core::ConfigError> {
//! let sink = MemorySink::new();
//! let config = RunConfig::new(20.0, 5)?;
//! let report = run::<SequenceRecord, _>(&sink, &config).await;
//! assert_eq!(report.submitted, 5);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod delivery;
pub mod error;
pub mod pacer;
pub mod publisher;
pub mod record;
pub mod runner;
pub mod sink;
pub mod testing;

// Re-exports for convenience
pub use config::{MessageCap, Rate, RunConfig, DEFAULT_DRAIN_TIMEOUT, DEFAULT_PROGRESS_EVERY};
pub use delivery::{DeliveryObserver, DeliveryStats, DeliveryTracker};
pub use error::{ConfigError, DeliveryError, DrainError, EncodeError, PublishError, SubmitError};
pub use pacer::{Pacer, PacerExit, StopReason, TickOutcome};
pub use publisher::Publisher;
pub use record::{wall_clock_timestamp, StreamRecord, SynthesisContext, TIMESTAMP_FORMAT};
pub use runner::{drain, run, run_until, DrainOutcome, RunReport};
pub use sink::{DeliveryHandle, RecordSink};

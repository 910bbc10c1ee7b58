//! Tick sampling
//!
//! This module owns the only moving part of the clock:
//!
//! - **snapshot**: Formatting one clock read into display strings
//! - **source**: Host clock and time zone ports, plus fixed test doubles
//! - **sampler**: The repeating schedule and its cancel handle
//!
//! # Example
//!
//! ```rust,no_run
//! use kinetic_clock::clock::{SnapshotFormatter, TimeSampler};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sampler = TimeSampler::with_default_period(SnapshotFormatter::system());
//!
//!     let mut handle = sampler.start(|snapshot| println!("{}", snapshot));
//!     tokio::time::sleep(std::time::Duration::from_secs(3)).await;
//!     handle.cancel();
//! }
//! ```

pub mod sampler;
pub mod snapshot;
pub mod source;

pub use sampler::{CancelHandle, TimeSampler, DEFAULT_TICK_PERIOD};
pub use snapshot::{pad2, TimeSnapshot, PLACEHOLDER_DATE, PLACEHOLDER_FIELD};
pub use source::{
    Clock, FixedClock, FixedTimeZone, SnapshotFormatter, SystemClock, SystemTimeZone,
    TimeZoneResolver,
};

//! # Kinetic Clock
//!
//! A realtime clock with a crisp, kinetic UI, drawn in the terminal.
//!
//! ## Features
//!
//! - **Drift-free snapshots**: every field of a tick comes from one clock read
//! - **Immediate first tick**: the display mounts as soon as the clock starts
//! - **Leak-free teardown**: cancelling the sampler is synchronous and idempotent
//! - **Skins**: a full card, a single line, or JSON lines for other programs
//!
//! ## Modules
//!
//! - [`clock`]: Snapshot formatting, host clock ports and the tick sampler
//! - [`display`]: Display state shared between the sampler and surfaces
//! - [`render`]: Skins and the terminal surface
//! - [`app`]: Activation and deactivation of a clock component
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kinetic_clock::{ClockApp, Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let app = ClockApp::from_config(&config);
//!
//!     // Run until Ctrl-C
//!     let shutdown = async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     };
//!     let summary = app.run(std::io::stdout(), shutdown).await?;
//!
//!     println!("Drew {} frames", summary.frames);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod display;
pub mod logging;
pub mod render;

// Re-export top-level types for convenience
pub use app::{ClockApp, RunSummary};

pub use clock::{
    CancelHandle, Clock, FixedClock, FixedTimeZone, SnapshotFormatter, SystemClock,
    SystemTimeZone, TimeSampler, TimeSnapshot, TimeZoneResolver, DEFAULT_TICK_PERIOD,
};

pub use display::{DisplayState, Greeting, SharedDisplay};

pub use render::{
    Frame, ParseSkinError, RenderError, RenderOptions, RenderResult, Skin, TerminalSurface,
    TickRecord,
};

pub use config::{
    generate_default_config, ClockConfig, Config, ConfigError, DisplayConfig, LoggingConfig,
};

pub use logging::{bootstrap_subscriber, init_logging, LoggingError};

//! Logging setup
//!
//! Logs never go to stdout, which belongs to the clock surface. They go to
//! stderr, or to a file when one is configured.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path:?}: {error}")]
    File { path: PathBuf, error: String },

    #[error("Failed to install logger: {0}")]
    Init(String),
}

/// Filter directive for a configured level, unless `RUST_LOG` is set
pub fn filter_directive(level: &str) -> String {
    format!("kinetic_clock={}", level.to_ascii_lowercase())
}

/// Subscriber for the window before [`init_logging`] runs.
///
/// Config loading reports rejected files and ignored overrides as warnings;
/// install this with [`tracing::subscriber::with_default`] around it so they
/// reach stderr.
pub fn bootstrap_subscriber() -> impl Subscriber + Send + Sync {
    bootstrap_subscriber_with(std::io::stderr)
}

/// [`bootstrap_subscriber`] writing somewhere other than stderr
pub fn bootstrap_subscriber_with<W>(writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)));

    let (writer, ansi) = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LoggingError::File {
                    path: PathBuf::from(path),
                    error: e.to_string(),
                })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if config.format == "json" {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer().with_ansi(ansi).with_writer(writer).boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

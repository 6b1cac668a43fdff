//! Logging setup for native Fanfare builds
//!
//! Human-readable console output by default, with optional JSONL files for looking back at
//! an unattended kiosk run.
//!
//! ```ignore
//! use fanfare_logging::{FanfareSubscriberBuilder, LogConfig};
//!
//! let _guard = FanfareSubscriberBuilder::new()
//!     .with_config(LogConfig::kiosk("/var/log/fanfare"))
//!     .init();
//!
//! tracing::info!("Starting Fanfare");
//! ```
//!
//! Web builds log through `dioxus::logger` instead.

pub mod config;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};

use std::fs::{self, File};
use std::io;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Installs the global tracing subscriber from a [`LogConfig`]
#[derive(Debug, Default)]
pub struct FanfareSubscriberBuilder {
    config: LogConfig,
}

impl FanfareSubscriberBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned guard alive until exit or buffered file output is lost. A log
    /// directory that cannot be written only disables file output.
    pub fn try_init(self) -> Result<Option<WorkerGuard>, TryInitError> {
        let LogConfig {
            default_level,
            console,
            file,
            jsonl,
        } = self.config;

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

        let (file_writer, guard) = match file.as_ref().map(create_file_writer) {
            Some(Ok((writer, guard))) => (Some(writer), Some(guard)),
            Some(Err(e)) => {
                eprintln!("Warning: log files disabled: {e}");
                (None, None)
            }
            None => (None, None),
        };

        let pretty_console = (console.enabled && console.pretty)
            .then(|| tracing_subscriber::fmt::layer().with_ansi(console.ansi));

        let jsonl_console = (console.enabled && !console.pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_span_list(jsonl.include_spans)
                .flatten_event(jsonl.flatten_events)
                .with_file(jsonl.include_location)
                .with_line_number(jsonl.include_location)
        });

        let file_layer = file_writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_span_list(jsonl.include_spans)
                .flatten_event(jsonl.flatten_events)
                .with_file(jsonl.include_location)
                .with_line_number(jsonl.include_location)
                .with_writer(writer)
        });

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(jsonl_console)
            .with(file_layer)
            .try_init()?;

        Ok(guard)
    }

    /// Like [`try_init`](Self::try_init), but only warns when a subscriber is already set
    pub fn init(self) -> Option<WorkerGuard> {
        self.try_init().unwrap_or_else(|e| {
            eprintln!("Warning: logging not initialized: {e}");
            None
        })
    }
}

fn create_file_writer(file: &FileConfig) -> io::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&file.directory)?;

    let rotation = match file.rotation {
        RotationStrategy::Never => {
            let handle = File::create(file.directory.join(format!("{}.log", file.prefix)))?;
            return Ok(tracing_appender::non_blocking(handle));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&file.prefix)
        .filename_suffix("log")
        .build(&file.directory)
        .map_err(io::Error::other)?;
    Ok(tracing_appender::non_blocking(appender))
}

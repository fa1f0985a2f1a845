//! Subscriber setup for the `fieldguard` tracing events.
//!
//! Registries log key allocation at `debug`; validated fields log rejected
//! writes at `debug` and accepted ones at `trace`.

use clap::{Args, ValueEnum};
use tracing::level_filters::LevelFilter;

/// Output format for log lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// Most verbose level that gets written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Logging flags, flattened into a binary's own parser.
#[derive(Args, Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogArgs {
    /// Log line format.
    #[arg(
        long = "log-format",
        env = "FIELDGUARD_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub format: LogFormat,

    /// Log level.
    #[arg(
        long = "log-level",
        env = "FIELDGUARD_LOG_LEVEL",
        value_enum,
        default_value_t = LogLevel::Info
    )]
    pub level: LogLevel,
}

impl LogArgs {
    /// Install a stderr subscriber for these settings.
    ///
    /// Returns false when a global subscriber was already set.
    pub fn init(self) -> bool {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(LevelFilter::from(self.level))
            .with_ansi(false)
            .with_target(false);

        match self.format {
            LogFormat::Text => subscriber.try_init().is_ok(),
            LogFormat::Json => subscriber.json().try_init().is_ok(),
        }
    }
}

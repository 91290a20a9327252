//! Logging setup for greatcircle binaries, tests and benches
//!
//! The geo crate only emits `tracing` events. This crate installs the
//! subscriber that turns them into output:
//! - `RUST_LOG` wins when set
//! - otherwise the configured level (`GREATCIRCLE_LOG`, default `info`)

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the fallback log level
pub const LOG_LEVEL_ENV: &str = "GREATCIRCLE_LOG";

/// Initialize logging from the environment
pub fn init() -> anyhow::Result<()> {
    init_with_config(TelemetryConfig::from_env())
}

/// Initialize with custom configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer()
            .with_target(config.show_target)
            .with_thread_ids(config.show_thread_ids)
            .with_file(config.show_file)
            .with_line_number(config.show_line_number)
            .compact());

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.log_level,
        "Telemetry initialized"
    );

    Ok(())
}

/// Initialize logging unless a subscriber is already installed
///
/// Meant for test suites where many tests race to set up logging. Only the
/// "already installed" failure is ignored; any other error is returned.
pub fn try_init() -> anyhow::Result<()> {
    match init() {
        Err(err) if err.downcast_ref::<SetGlobalDefaultError>().is_some() => Ok(()),
        other => other,
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub show_target: bool,
    pub show_thread_ids: bool,
    pub show_file: bool,
    pub show_line_number: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_target: false,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl TelemetryConfig {
    /// Defaults, with the level taken from `GREATCIRCLE_LOG` when set
    pub fn from_env() -> Self {
        match std::env::var(LOG_LEVEL_ENV) {
            Ok(level) if !level.trim().is_empty() => Self::default().with_log_level(level.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

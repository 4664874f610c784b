// src/logging.rs

//! `tracing` subscriber for flowdeploy.
//!
//! The level comes from `--log-level`, then `FLOWDEPLOY_LOG`, then `warn`.
//! Diagnostics go to stderr; stdout belongs to the banners and to the output
//! of the commands being run.

use anyhow::{Result, anyhow};
use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "FLOWDEPLOY_LOG";

const DEFAULT_LEVEL: LogLevel = LogLevel::Warn;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = cli_level.or_else(level_from_env).unwrap_or(DEFAULT_LEVEL);

    fmt()
        .with_max_level(Level::from(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

fn level_from_env() -> Option<LogLevel> {
    std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| parse_log_level(&value))
}

/// Same names the CLI accepts, case-insensitive.
pub fn parse_log_level(value: &str) -> Option<LogLevel> {
    LogLevel::from_str(value.trim(), true).ok()
}

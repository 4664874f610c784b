// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `flowdeploy`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flowdeploy",
    version,
    about = "Sync a checkout with origin/main and recreate its container stack.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a deploy config file (TOML).
    ///
    /// If omitted, `Deploy.toml` in the current directory is used when it
    /// exists; otherwise the built-in SystemFlow sequence runs.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run every step in this directory instead of the configured one.
    #[arg(long, value_name = "PATH")]
    pub workdir: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FLOWDEPLOY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved steps, but don't execute any commands.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

// src/lib.rs

pub mod cli;
pub mod config;
pub mod deploy;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{DeployConfig, default_config_path, resolve_config};
use crate::deploy::{CommandRunner, Reporter, ctrl_c, run_until_interrupted};
use crate::exec::ProcessExecutor;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (file or built-in sequence, `--workdir` override)
/// - the command runner with the real process executor
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_for_args(&args)?;

    if args.dry_run {
        write_plan(&cfg, &mut io::stdout().lock())?;
        debug!("dry-run complete (no execution)");
        return Ok(());
    }

    let mut runner = CommandRunner::new(
        ProcessExecutor::new(),
        cfg.workdir.clone(),
        Reporter::stdout(),
    );

    let summary = run_until_interrupted(&cfg.sequence, &mut runner, ctrl_c()).await?;
    info!(
        steps = summary.steps_run,
        ignored_failures = summary.ignored_failures.len(),
        "done"
    );

    Ok(())
}

/// Resolve the config the CLI arguments ask for.
///
/// A relative `--workdir` is made absolute against the current directory.
pub fn resolve_for_args(args: &CliArgs) -> Result<DeployConfig> {
    let workdir = match args.workdir {
        Some(ref dir) => {
            let abs = std::path::absolute(dir)
                .with_context(|| format!("resolving working directory {:?}", dir))?;
            debug!(workdir = %abs.display(), "working directory overridden");
            Some(abs)
        }
        None => None,
    };

    let cfg = resolve_config(
        args.config.as_deref(),
        &default_config_path(),
        workdir.as_deref(),
    )?;
    Ok(cfg)
}

/// Dry-run output: working directory and the steps in order.
pub fn write_plan(cfg: &DeployConfig, out: &mut impl Write) -> io::Result<()> {
    let seq = &cfg.sequence;

    writeln!(out, "flowdeploy dry-run: {}", seq.name())?;
    writeln!(out, "  workdir = {}", cfg.workdir.display())?;
    writeln!(out)?;
    writeln!(out, "steps ({}):", seq.len())?;

    for (idx, step) in seq.steps().iter().enumerate() {
        let command = step.command.to_string();
        writeln!(out, "  {}. {}", idx + 1, step.name)?;
        if step.name != command {
            writeln!(out, "      cmd: {command}")?;
        }
        if step.allow_failure {
            writeln!(out, "      allow_failure: true")?;
        }
    }

    out.flush()
}

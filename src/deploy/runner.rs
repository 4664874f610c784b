// src/deploy/runner.rs

//! The command runner: one step at a time, fail-fast.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::deploy::report::Reporter;
use crate::errors::{DeployError, Result};
use crate::exec::ExecutorBackend;
use crate::types::{Step, StepOutcome};

/// Runs steps through an [`ExecutorBackend`], always in the same working
/// directory, and prints a marker line for each one.
///
/// The runner never terminates the process. A failing gating step comes back
/// as an `Err` and the caller decides what to do with it.
#[derive(Debug)]
pub struct CommandRunner<E, W> {
    executor: E,
    workdir: PathBuf,
    reporter: Reporter<W>,
}

impl<E, W> CommandRunner<E, W>
where
    E: ExecutorBackend,
    W: Write,
{
    pub fn new(executor: E, workdir: impl Into<PathBuf>, reporter: Reporter<W>) -> Self {
        Self {
            executor,
            workdir: workdir.into(),
            reporter,
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn reporter(&self) -> &Reporter<W> {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut Reporter<W> {
        &mut self.reporter
    }

    /// Run a single step.
    ///
    /// - success: `Ok(StepOutcome::Success)`
    /// - failure of a gating step: failure marker, then
    ///   `Err(DeployError::CommandFailed)` (or the executor's own error when
    ///   the process never started)
    /// - failure of an `allow_failure` step: warning marker, then
    ///   `Ok(StepOutcome::Failed(code))`
    pub async fn run_step(&mut self, step: &Step) -> Result<StepOutcome> {
        let command = step.command.to_string();
        self.reporter.running(&command)?;
        info!(step = %step.name, cmd = %command, "running step");

        let result = self.executor.execute(&step.command, &self.workdir).await;

        match result {
            Ok(StepOutcome::Success) => {
                info!(step = %step.name, "step succeeded");
                Ok(StepOutcome::Success)
            }
            Ok(StepOutcome::Failed(code)) if step.allow_failure => {
                warn!(step = %step.name, exit_code = code, "step failed; continuing");
                self.reporter.ignored_failure(&command)?;
                Ok(StepOutcome::Failed(code))
            }
            Ok(StepOutcome::Failed(code)) => {
                error!(step = %step.name, exit_code = code, "step failed");
                self.reporter.failed(&command)?;
                Err(DeployError::CommandFailed {
                    step: step.name.clone(),
                    command,
                    code,
                })
            }
            Err(err) if step.allow_failure => {
                warn!(step = %step.name, error = %err, "step could not run; continuing");
                self.reporter.ignored_failure(&command)?;
                Ok(StepOutcome::Failed(-1))
            }
            Err(err) => {
                error!(step = %step.name, error = %err, "step could not run");
                self.reporter.failed(&command)?;
                Err(err)
            }
        }
    }
}

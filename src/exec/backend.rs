// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The command runner talks to an `ExecutorBackend` instead of spawning
//! processes itself. Production code uses [`ProcessExecutor`]; tests provide
//! an implementation that records each invocation and answers with scripted
//! exit codes.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::{StepCommand, StepOutcome};

use super::process::run_process;

/// Trait abstracting how a single step command is executed.
pub trait ExecutorBackend: Send {
    /// Run `command` in `workdir` and wait for it to finish.
    ///
    /// `Ok` carries the exit status of a process that ran; `Err` means the
    /// command could not be run at all.
    fn execute<'a>(
        &'a mut self,
        command: &'a StepCommand,
        workdir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<StepOutcome>> + Send + 'a>>;
}

/// Real executor backend used in production.
///
/// Children inherit stdin, stdout and stderr, so command output shows up live
/// in the terminal.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for ProcessExecutor {
    fn execute<'a>(
        &'a mut self,
        command: &'a StepCommand,
        workdir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<StepOutcome>> + Send + 'a>> {
        Box::pin(run_process(command, workdir))
    }
}

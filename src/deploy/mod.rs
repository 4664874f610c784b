// src/deploy/mod.rs

//! Deployment orchestration.
//!
//! - [`runner`] runs one step through an executor backend and reports it.
//! - [`sequence`] owns the ordered step list and drives the runner.
//! - [`report`] prints the banners and per-step markers.

pub mod report;
pub mod runner;
pub mod sequence;

use std::future::Future;
use std::io::Write;

use tracing::warn;

use crate::errors::{DeployError, Result};
use crate::exec::ExecutorBackend;

pub use report::Reporter;
pub use runner::CommandRunner;
pub use sequence::{DeploySequence, DeploySummary};

/// Run `sequence`, aborting as soon as `interrupt` resolves.
///
/// The in-flight step future is dropped on interruption, which kills its
/// child process. The interruption marker is printed and
/// `DeployError::Interrupted` is returned.
///
/// The interrupt is always polled first. A child that dies from the same
/// Ctrl-C must not turn the result into `CommandFailed`.
pub async fn run_until_interrupted<E, W, F>(
    sequence: &DeploySequence,
    runner: &mut CommandRunner<E, W>,
    interrupt: F,
) -> Result<DeploySummary>
where
    E: ExecutorBackend,
    W: Write,
    F: Future<Output = ()>,
{
    let outcome = tokio::select! {
        biased;
        () = interrupt => Err(DeployError::Interrupted),
        res = sequence.run(runner) => res,
    };

    if let Err(DeployError::Interrupted) = outcome {
        warn!(project = %sequence.name(), "deploy interrupted");
        runner.reporter_mut().interrupted()?;
    }

    outcome
}

/// Resolves on Ctrl-C. Never resolves if the signal handler can't be
/// installed.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

// src/deploy/sequence.rs

//! The ordered list of steps that makes up one deployment.

use std::io::Write;

use tracing::{debug, info};

use crate::deploy::runner::CommandRunner;
use crate::errors::Result;
use crate::exec::ExecutorBackend;
use crate::types::Step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploySequence {
    name: String,
    steps: Vec<Step>,
}

/// What a completed deployment did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploySummary {
    pub steps_run: usize,
    /// Names of `allow_failure` steps that failed.
    pub ignored_failures: Vec<String>,
}

impl DeploySequence {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Project name used in the start and success banners.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, stopping at the first gating failure.
    ///
    /// Prints the start banner first and the success banner only when every
    /// step got through. Nothing is undone on failure. The sequence is not
    /// consumed, so the same runner can deploy it again.
    pub async fn run<E, W>(&self, runner: &mut CommandRunner<E, W>) -> Result<DeploySummary>
    where
        E: ExecutorBackend,
        W: Write,
    {
        runner.reporter_mut().start(&self.name)?;
        info!(
            project = %self.name,
            workdir = %runner.workdir().display(),
            steps = self.steps.len(),
            "deploy starting"
        );

        let mut summary = DeploySummary::default();

        for (idx, step) in self.steps.iter().enumerate() {
            debug!(index = idx + 1, total = self.steps.len(), step = %step.name, "next step");
            let outcome = runner.run_step(step).await?;
            summary.steps_run += 1;

            if !outcome.is_success() {
                summary.ignored_failures.push(step.name.clone());
            }
        }

        runner.reporter_mut().success(&self.name)?;
        info!(project = %self.name, steps = summary.steps_run, "deploy finished");

        Ok(summary)
    }
}

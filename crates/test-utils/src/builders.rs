#![allow(dead_code)]

use std::path::Path;

use flowdeploy::config::{DeployConfig, DeploySection, RawDeployConfig, StepConfig};
use flowdeploy::deploy::DeploySequence;
use flowdeploy::types::{Step, StepCommand};

/// Builder for `DeployConfig` that goes through the same validation as a
/// config file.
pub struct DeployConfigBuilder {
    config: RawDeployConfig,
}

impl DeployConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawDeployConfig {
                deploy: DeploySection::default(),
                steps: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.config.deploy.name = name.to_string();
        self
    }

    pub fn workdir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.deploy.workdir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_step(mut self, step: StepConfig) -> Self {
        self.config.steps.push(step);
        self
    }

    /// Add an exec step from a whitespace-separated command line.
    pub fn with_cmd(self, line: &str) -> Self {
        self.with_step(StepConfigBuilder::cmd(line).build())
    }

    pub fn build(self) -> DeployConfig {
        DeployConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for DeployConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `StepConfig`.
pub struct StepConfigBuilder {
    step: StepConfig,
}

impl StepConfigBuilder {
    pub fn cmd(line: &str) -> Self {
        Self {
            step: StepConfig {
                cmd: Some(line.split_whitespace().map(str::to_string).collect()),
                ..StepConfig::default()
            },
        }
    }

    pub fn shell(script: &str) -> Self {
        Self {
            step: StepConfig {
                shell: Some(script.to_string()),
                ..StepConfig::default()
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.step.name = Some(name.to_string());
        self
    }

    pub fn allow_failure(mut self, val: bool) -> Self {
        self.step.allow_failure = val;
        self
    }

    pub fn build(self) -> StepConfig {
        self.step
    }
}

/// A sequence named "Test" with one gating exec step per command line.
pub fn sequence_of(lines: &[&str]) -> DeploySequence {
    let steps = lines
        .iter()
        .map(|line| Step::new(StepCommand::from_words(line).expect("blank command line")))
        .collect();
    DeploySequence::new("Test", steps)
}

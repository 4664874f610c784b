// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::deploy::DeploySequence;
use crate::types::{Step, StepCommand};

/// Project name shown in the banners of the built-in sequence.
pub const DEFAULT_PROJECT_NAME: &str = "SystemFlow";

/// Checkout the built-in sequence deploys from.
pub const DEFAULT_WORKDIR: &str = "/opt/systemflow26";

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [deploy]
/// name = "SystemFlow"
/// workdir = "/opt/systemflow26"
///
/// [[step]]
/// cmd = ["git", "fetch", "origin"]
///
/// [[step]]
/// name = "recent logs"
/// shell = "docker compose logs --tail 20 | cat"
/// allow_failure = true
/// ```
///
/// This is the unvalidated form; turn it into a [`DeployConfig`] with
/// `DeployConfig::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDeployConfig {
    #[serde(default)]
    pub deploy: DeploySection,

    /// All `[[step]]` entries, in file order.
    #[serde(default, rename = "step")]
    pub steps: Vec<StepConfig>,
}

/// `[deploy]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploySection {
    #[serde(default = "default_name")]
    pub name: String,

    /// Directory every step runs in. Must be absolute.
    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,
}

fn default_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_workdir() -> PathBuf {
    PathBuf::from(DEFAULT_WORKDIR)
}

impl Default for DeploySection {
    fn default() -> Self {
        Self {
            name: default_name(),
            workdir: default_workdir(),
        }
    }
}

/// `[[step]]` entry. Exactly one of `cmd` and `shell` must be set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepConfig {
    /// Optional label; defaults to the command text.
    #[serde(default)]
    pub name: Option<String>,

    /// Program followed by its arguments, run without a shell.
    #[serde(default)]
    pub cmd: Option<Vec<String>>,

    /// Script run through the platform shell.
    #[serde(default)]
    pub shell: Option<String>,

    /// Keep going when this step fails.
    #[serde(default)]
    pub allow_failure: bool,
}

/// Validated deploy configuration: where to run and what to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub workdir: PathBuf,
    pub sequence: DeploySequence,
}

impl DeployConfig {
    /// Only for callers that have already validated the parts.
    pub(crate) fn new_unchecked(workdir: PathBuf, sequence: DeploySequence) -> Self {
        Self { workdir, sequence }
    }

    /// The SystemFlow deployment used when no config file is present.
    pub fn builtin() -> Self {
        let steps = [
            StepCommand::exec("git", ["fetch", "origin"]),
            StepCommand::exec("git", ["reset", "--hard", "origin/main"]),
            StepCommand::exec("docker", ["compose", "down"]),
            StepCommand::exec("docker", ["compose", "pull"]),
            StepCommand::exec("docker", ["compose", "build"]),
            StepCommand::exec("docker", ["compose", "up", "-d"]),
            StepCommand::exec("docker", ["ps"]),
        ]
        .into_iter()
        .map(Step::new)
        .collect();

        Self::new_unchecked(
            default_workdir(),
            DeploySequence::new(DEFAULT_PROJECT_NAME, steps),
        )
    }

    /// Replace the working directory. The path must already be absolute.
    pub fn with_workdir(mut self, workdir: impl AsRef<Path>) -> Self {
        self.workdir = workdir.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_systemflow_deploy() {
        let cfg = DeployConfig::builtin();
        assert_eq!(cfg.workdir, PathBuf::from("/opt/systemflow26"));
        assert_eq!(cfg.sequence.name(), "SystemFlow");

        let commands: Vec<String> = cfg
            .sequence
            .steps()
            .iter()
            .map(|s| s.command.to_string())
            .collect();
        assert_eq!(
            commands,
            vec![
                "git fetch origin",
                "git reset --hard origin/main",
                "docker compose down",
                "docker compose pull",
                "docker compose build",
                "docker compose up -d",
                "docker ps",
            ]
        );
        assert!(cfg.sequence.steps().iter().all(|s| !s.allow_failure));
    }

    #[test]
    fn empty_toml_uses_section_defaults() {
        let raw: RawDeployConfig = toml::from_str("").unwrap();
        assert_eq!(raw.deploy.name, "SystemFlow");
        assert_eq!(raw.deploy.workdir, PathBuf::from("/opt/systemflow26"));
        assert!(raw.steps.is_empty());
    }
}

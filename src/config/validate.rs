// src/config/validate.rs

use crate::config::model::{DeployConfig, RawDeployConfig, StepConfig};
use crate::deploy::DeploySequence;
use crate::errors::{DeployError, Result};
use crate::types::{Step, StepCommand};

impl TryFrom<RawDeployConfig> for DeployConfig {
    type Error = DeployError;

    fn try_from(raw: RawDeployConfig) -> std::result::Result<Self, Self::Error> {
        ensure_has_steps(&raw)?;
        validate_workdir(&raw)?;

        let steps = raw
            .steps
            .into_iter()
            .enumerate()
            .map(|(idx, step)| step_from_config(idx, step))
            .collect::<Result<Vec<_>>>()?;

        Ok(DeployConfig::new_unchecked(
            raw.deploy.workdir,
            DeploySequence::new(raw.deploy.name, steps),
        ))
    }
}

fn ensure_has_steps(cfg: &RawDeployConfig) -> Result<()> {
    if cfg.steps.is_empty() {
        return Err(DeployError::ConfigError(
            "config must contain at least one [[step]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_workdir(cfg: &RawDeployConfig) -> Result<()> {
    if !cfg.deploy.workdir.is_absolute() {
        return Err(DeployError::ConfigError(format!(
            "[deploy].workdir must be an absolute path (got {:?})",
            cfg.deploy.workdir
        )));
    }
    Ok(())
}

/// `idx` is zero-based; messages use the 1-based position.
fn step_from_config(idx: usize, step: StepConfig) -> Result<Step> {
    let position = idx + 1;

    let command = match (step.cmd, step.shell) {
        (Some(_), Some(_)) => {
            return Err(DeployError::ConfigError(format!(
                "step {position}: set either `cmd` or `shell`, not both"
            )));
        }
        (None, None) => {
            return Err(DeployError::ConfigError(format!(
                "step {position}: missing `cmd` or `shell`"
            )));
        }
        (Some(argv), None) => {
            let mut words = argv.into_iter();
            match words.next() {
                Some(program) if !program.trim().is_empty() => {
                    StepCommand::exec(program, words)
                }
                _ => {
                    return Err(DeployError::ConfigError(format!(
                        "step {position}: `cmd` must start with a program name"
                    )));
                }
            }
        }
        (None, Some(script)) => {
            if script.trim().is_empty() {
                return Err(DeployError::ConfigError(format!(
                    "step {position}: `shell` must not be blank"
                )));
            }
            StepCommand::Shell(script)
        }
    };

    let name = match step.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => command.to_string(),
    };

    Ok(Step {
        name,
        command,
        allow_failure: step.allow_failure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(toml_src: &str) -> RawDeployConfig {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn valid_config_keeps_step_order() {
        let cfg = DeployConfig::try_from(raw(
            r#"
[deploy]
name = "Shop"
workdir = "/srv/shop"

[[step]]
cmd = ["git", "fetch", "origin"]

[[step]]
name = "logs"
shell = "docker compose logs | tail"
allow_failure = true
"#,
        ))
        .unwrap();

        assert_eq!(cfg.sequence.name(), "Shop");
        let steps = cfg.sequence.steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "git fetch origin");
        assert!(!steps[0].allow_failure);
        assert_eq!(steps[1].name, "logs");
        assert_eq!(
            steps[1].command,
            StepCommand::shell("docker compose logs | tail")
        );
        assert!(steps[1].allow_failure);
    }

    #[test]
    fn rejects_step_with_cmd_and_shell() {
        let err = DeployConfig::try_from(raw(
            r#"
[[step]]
cmd = ["true"]
shell = "true"
"#,
        ))
        .unwrap_err();

        match err {
            DeployError::ConfigError(msg) => assert!(msg.contains("not both")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_cmd() {
        let err = DeployConfig::try_from(raw("[[step]]\ncmd = []\n")).unwrap_err();
        assert!(matches!(err, DeployError::ConfigError(msg) if msg.contains("program name")));
    }

    #[test]
    fn rejects_blank_shell() {
        let err = DeployConfig::try_from(raw("[[step]]\nshell = \"  \"\n")).unwrap_err();
        assert!(matches!(err, DeployError::ConfigError(msg) if msg.contains("blank")));
    }

    #[test]
    fn rejects_relative_workdir() {
        let err = DeployConfig::try_from(raw(
            r#"
[deploy]
workdir = "relative/dir"

[[step]]
cmd = ["true"]
"#,
        ))
        .unwrap_err();
        assert!(matches!(err, DeployError::ConfigError(msg) if msg.contains("absolute")));
    }

    #[test]
    fn rejects_config_without_steps() {
        let err = DeployConfig::try_from(raw("[deploy]\nname = \"x\"\n")).unwrap_err();
        assert!(matches!(err, DeployError::ConfigError(msg) if msg.contains("[[step]]")));
    }
}

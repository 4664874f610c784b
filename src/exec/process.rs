// src/exec/process.rs

//! Child process handling for one step.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{DeployError, Result};
use crate::types::{StepCommand, StepOutcome};

/// Build the process for a step command, rooted at `workdir`.
///
/// `Exec` commands are spawned directly. `Shell` commands go through the
/// platform shell.
pub fn build_command(command: &StepCommand, workdir: &Path) -> Command {
    let mut cmd = match command {
        StepCommand::Exec { program, args } => {
            let mut c = Command::new(program);
            c.args(args);
            c
        }
        StepCommand::Shell(script) => {
            if cfg!(windows) {
                let mut c = Command::new("cmd");
                c.arg("/C").arg(script);
                c
            } else {
                let mut c = Command::new("sh");
                c.arg("-c").arg(script);
                c
            }
        }
    };

    cmd.current_dir(workdir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    cmd
}

/// Spawn the step's process and wait for it to exit.
///
/// Dropping the returned future kills the child.
pub async fn run_process(command: &StepCommand, workdir: &Path) -> Result<StepOutcome> {
    debug!(cmd = %command, workdir = %workdir.display(), "spawning process");

    let mut child = build_command(command, workdir)
        .spawn()
        .map_err(|source| DeployError::Spawn {
            command: command.to_string(),
            source,
        })?;

    let status = child.wait().await?;

    let code = status.code().unwrap_or(-1);
    info!(
        cmd = %command,
        exit_code = code,
        success = status.success(),
        "process exited"
    );

    Ok(if status.success() {
        StepOutcome::Success
    } else {
        StepOutcome::Failed(code)
    })
}

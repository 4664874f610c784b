use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use flowdeploy::errors::{DeployError, Result};
use flowdeploy::exec::ExecutorBackend;
use flowdeploy::types::{StepCommand, StepOutcome};

/// One call into the fake executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub workdir: PathBuf,
}

/// A fake executor that:
/// - records every command it is asked to run, with its working directory
/// - never spawns a process
/// - answers with a scripted exit code (program `false` exits 1, everything
///   else exits 0 unless configured otherwise)
#[derive(Debug, Clone, Default)]
pub struct FakeExecutor {
    calls: Arc<Mutex<Vec<Invocation>>>,
    exit_codes: HashMap<String, i32>,
    unspawnable: HashSet<String>,
    hanging: HashSet<String>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` (its display text) exit with `code`.
    pub fn with_exit_code(mut self, command: &str, code: i32) -> Self {
        self.exit_codes.insert(command.to_string(), code);
        self
    }

    /// Make `command` fail as if its program did not exist.
    pub fn unspawnable(mut self, command: &str) -> Self {
        self.unspawnable.insert(command.to_string());
        self
    }

    /// Make `command` never finish, like a process that hangs.
    pub fn hanging(mut self, command: &str) -> Self {
        self.hanging.insert(command.to_string());
        self
    }

    /// Snapshot of every invocation so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Display text of every command run so far.
    pub fn commands(&self) -> Vec<String> {
        self.invocations().into_iter().map(|i| i.command).collect()
    }

    fn exit_code_for(&self, command: &StepCommand, text: &str) -> i32 {
        if let Some(code) = self.exit_codes.get(text) {
            return *code;
        }
        match command {
            StepCommand::Exec { program, .. } if program == "false" => 1,
            _ => 0,
        }
    }
}

impl ExecutorBackend for FakeExecutor {
    fn execute<'a>(
        &'a mut self,
        command: &'a StepCommand,
        workdir: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<StepOutcome>> + Send + 'a>> {
        let text = command.to_string();

        self.calls.lock().unwrap().push(Invocation {
            command: text.clone(),
            workdir: workdir.to_path_buf(),
        });

        if self.hanging.contains(&text) {
            return Box::pin(std::future::pending::<Result<StepOutcome>>());
        }

        let result = if self.unspawnable.contains(&text) {
            Err(DeployError::Spawn {
                command: text,
                source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
            })
        } else {
            Ok(StepOutcome::from_code(self.exit_code_for(command, &text)))
        };

        Box::pin(async move { result })
    }
}

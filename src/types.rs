// src/types.rs

//! Step types shared by config, executor and runner.

use std::fmt;

/// What a single deploy step runs.
///
/// `Exec` spawns the program directly with an argument vector, so nothing is
/// interpreted by a shell. `Shell` hands the string to `sh -c` (`cmd /C` on
/// Windows) and is only meant for steps that need pipes, globbing and the
/// like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepCommand {
    Exec { program: String, args: Vec<String> },
    Shell(String),
}

impl StepCommand {
    /// Build an `Exec` command from a program and its arguments.
    pub fn exec<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StepCommand::Exec {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn shell(script: impl Into<String>) -> Self {
        StepCommand::Shell(script.into())
    }

    /// Split a whitespace-separated command line into an `Exec` command.
    ///
    /// No quoting rules apply; use [`StepCommand::exec`] for arguments that
    /// contain spaces. Returns `None` for a blank line.
    pub fn from_words(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let program = words.next()?;
        Some(StepCommand::exec(program, words))
    }
}

impl fmt::Display for StepCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepCommand::Exec { program, args } => {
                write_word(f, program)?;
                for arg in args {
                    f.write_str(" ")?;
                    write_word(f, arg)?;
                }
                Ok(())
            }
            StepCommand::Shell(script) => f.write_str(script),
        }
    }
}

fn write_word(f: &mut fmt::Formatter<'_>, word: &str) -> fmt::Result {
    let needs_quotes = word.is_empty()
        || word
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '"');

    if needs_quotes {
        write!(f, "'{}'", word.replace('\'', r"'\''"))
    } else {
        f.write_str(word)
    }
}

/// One entry of a deploy sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Label used in logs and errors. Defaults to the command text.
    pub name: String,
    pub command: StepCommand,
    /// When set, a failure is reported but does not abort the sequence.
    pub allow_failure: bool,
}

impl Step {
    /// A gating step labelled with its own command text.
    pub fn new(command: StepCommand) -> Self {
        Self {
            name: command.to_string(),
            command,
            allow_failure: false,
        }
    }

    pub fn named(name: impl Into<String>, command: StepCommand) -> Self {
        Self {
            name: name.into(),
            command,
            allow_failure: false,
        }
    }

    pub fn allow_failure(mut self, allow: bool) -> Self {
        self.allow_failure = allow;
        self
    }
}

/// Result of running one step to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Success,
    /// Non-zero exit code; `-1` when the process was killed by a signal.
    Failed(i32),
}

impl StepOutcome {
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            StepOutcome::Success
        } else {
            StepOutcome::Failed(code)
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, StepOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exec_display_joins_words() {
        let cmd = StepCommand::exec("git", ["reset", "--hard", "origin/main"]);
        assert_eq!(cmd.to_string(), "git reset --hard origin/main");
    }

    #[test]
    fn exec_display_quotes_awkward_arguments() {
        let cmd = StepCommand::exec("echo", ["hello world", "", "it's"]);
        assert_eq!(cmd.to_string(), r#"echo 'hello world' '' 'it'\''s'"#);
    }

    #[test]
    fn shell_display_is_verbatim() {
        let cmd = StepCommand::shell("docker ps | grep web");
        assert_eq!(cmd.to_string(), "docker ps | grep web");
    }

    #[test]
    fn from_words_splits_on_whitespace() {
        assert_eq!(
            StepCommand::from_words("docker  compose up -d"),
            Some(StepCommand::exec("docker", ["compose", "up", "-d"]))
        );
        assert_eq!(StepCommand::from_words("   "), None);
    }

    #[test]
    fn outcome_from_code() {
        assert_eq!(StepOutcome::from_code(0), StepOutcome::Success);
        assert_eq!(StepOutcome::from_code(2), StepOutcome::Failed(2));
        assert!(!StepOutcome::from_code(-1).is_success());
    }
}

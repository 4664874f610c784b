// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A step ran to completion with a non-zero exit code.
    #[error("step '{step}' failed with exit code {code}: {command}")]
    CommandFailed {
        step: String,
        command: String,
        code: i32,
    },

    /// The process for a step could not be started at all.
    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("deploy interrupted")]
    Interrupted,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeployError {
    /// Exit code of the failed command, if this error came from one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            DeployError::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;

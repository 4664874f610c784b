// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::model::{DeployConfig, RawDeployConfig};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// `RawDeployConfig`.
///
/// This only performs TOML deserialization; it does **not** validate the
/// steps. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawDeployConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawDeployConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<DeployConfig> {
    let raw_config = load_from_path(&path)?;
    let config = DeployConfig::try_from(raw_config)?;
    Ok(config)
}

/// `Deploy.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Deploy.toml")
}

/// Pick the configuration for this invocation.
///
/// - An explicit path must exist and is loaded as-is.
/// - Otherwise `fallback` is loaded if it exists.
/// - Otherwise the built-in SystemFlow sequence is used.
///
/// `workdir` replaces `[deploy].workdir` before validation, so a file whose
/// own workdir is unusable still loads when an override is given.
pub fn resolve_config(
    explicit: Option<&Path>,
    fallback: &Path,
    workdir: Option<&Path>,
) -> Result<DeployConfig> {
    let path = match explicit {
        Some(path) => path,
        None if fallback.is_file() => fallback,
        None => {
            debug!(
                fallback = %fallback.display(),
                "no deploy config found; using built-in sequence"
            );
            let builtin = DeployConfig::builtin();
            return Ok(match workdir {
                Some(dir) => builtin.with_workdir(dir),
                None => builtin,
            });
        }
    };

    info!(config = %path.display(), "loading deploy config");
    let mut raw = load_from_path(path)?;
    if let Some(dir) = workdir {
        raw.deploy.workdir = dir.to_path_buf();
    }
    DeployConfig::try_from(raw)
}

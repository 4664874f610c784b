// src/config/mod.rs

//! Configuration loading and validation for flowdeploy.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the built-in sequence (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate steps and the working directory (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, resolve_config};
pub use model::{DeployConfig, DeploySection, RawDeployConfig, StepConfig};

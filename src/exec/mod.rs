// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running step commands, using
//! `tokio::process::Command`, and reporting how they exited.
//!
//! - [`backend`] provides the `ExecutorBackend` trait and the production
//!   `ProcessExecutor`. Tests replace it with a fake that never spawns
//!   processes.
//! - [`process`] builds and waits on the child process for one step.

pub mod backend;
pub mod process;

pub use backend::{ExecutorBackend, ProcessExecutor};
pub use process::{build_command, run_process};

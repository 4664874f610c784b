// src/deploy/report.rs

//! Human-readable banners and markers printed around each step.
//!
//! Everything is written to the wrapped writer and flushed right away, so the
//! lines stay in order with the output of child processes that share the
//! terminal.

use std::io::{self, Write};

pub const START_GLYPH: &str = "🚀";
pub const RUNNING_GLYPH: &str = "▶";
pub const FAILED_GLYPH: &str = "❌";
pub const IGNORED_GLYPH: &str = "⚠";
pub const SUCCESS_GLYPH: &str = "✅";

#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn start(&mut self, project: &str) -> io::Result<()> {
        self.line(format_args!("\n{START_GLYPH} {project} Deploy Starting...\n"))
    }

    pub fn running(&mut self, command: &str) -> io::Result<()> {
        self.line(format_args!("\n{RUNNING_GLYPH} {command}"))
    }

    pub fn failed(&mut self, command: &str) -> io::Result<()> {
        self.line(format_args!("\n{FAILED_GLYPH} Command failed: {command}"))
    }

    pub fn ignored_failure(&mut self, command: &str) -> io::Result<()> {
        self.line(format_args!(
            "\n{IGNORED_GLYPH} Command failed (ignored): {command}"
        ))
    }

    pub fn interrupted(&mut self) -> io::Result<()> {
        self.line(format_args!("\n{FAILED_GLYPH} Deploy interrupted"))
    }

    pub fn success(&mut self, project: &str) -> io::Result<()> {
        self.line(format_args!(
            "\n{SUCCESS_GLYPH} {project} deployed successfully!"
        ))
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

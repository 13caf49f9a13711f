//! Fakes for driving flows without spawning package managers.

use std::cell::RefCell;
use std::path::PathBuf;

use cnh_core::{CommandRunner, ExecuteOptions, Result};

use crate::reports::Output;

/// Records every command and succeeds, unless the command starts with one
/// of the configured failing prefixes.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<(String, Option<PathBuf>)>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail commands starting with `prefix` with exit code 1.
    pub fn failing_on(mut self, prefix: &str) -> Self {
        self.failing.push(prefix.to_string());
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn calls(&self) -> Vec<(String, Option<PathBuf>)> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str, options: &ExecuteOptions) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((command.to_string(), options.cwd.clone()));

        if self.failing.iter().any(|p| command.starts_with(p.as_str())) {
            return Err(cnh_core::Error::Execution {
                command: command.to_string(),
                code: Some(1),
                stderr: Some("simulated failure".to_string()),
            });
        }
        Ok(())
    }
}

/// Collects rendered lines as `kind: text`.
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    fn push(&mut self, kind: &str, text: &str) {
        self.lines.push(format!("{}: {}", kind, text));
    }
}

impl Output for RecordingOutput {
    fn step(&mut self, message: &str) {
        self.push("step", message);
    }

    fn step_succeeded(&mut self, message: &str) {
        self.push("done", message);
    }

    fn step_failed(&mut self, message: &str) {
        self.push("failed", message);
    }

    fn success(&mut self, msg: &str) {
        self.push("success", msg);
    }

    fn info(&mut self, msg: &str) {
        self.push("info", msg);
    }

    fn warning(&mut self, msg: &str) {
        self.push("warning", msg);
    }

    fn section(&mut self, name: &str) {
        self.push("section", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.push("kv", &format!("{}={}", key, value));
    }

    fn command(&mut self, cmd: &str) {
        self.push("command", cmd);
    }

    fn preformatted(&mut self, text: &str) {
        self.push("text", text);
    }

    fn newline(&mut self) {}
}

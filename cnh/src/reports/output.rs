//! Output trait for rendering progress and reports.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Target output for setup flows and reports.
///
/// Flows describe *what* happened using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Start a long-running step (e.g. a package install).
    fn step(&mut self, message: &str);

    /// Finish the current step successfully.
    fn step_succeeded(&mut self, message: &str);

    /// Finish the current step with a failure.
    fn step_failed(&mut self, message: &str);

    /// Render a success message.
    fn success(&mut self, msg: &str);

    /// Render an informational note.
    fn info(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render an indented key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a shell command the user should run.
    fn command(&mut self, cmd: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output with coloured status lines and a spinner for steps.
#[derive(Default)]
pub struct TerminalOutput {
    spinner: Option<ProgressBar>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Output for TerminalOutput {
    fn step(&mut self, message: &str) {
        self.clear_spinner();

        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn step_succeeded(&mut self, message: &str) {
        self.success(message);
    }

    fn step_failed(&mut self, message: &str) {
        self.clear_spinner();
        eprintln!("{} {}", style("✖").red().bold(), message);
    }

    fn success(&mut self, msg: &str) {
        self.clear_spinner();
        println!("{} {}", style("✔").green().bold(), msg);
    }

    fn info(&mut self, msg: &str) {
        self.clear_spinner();
        println!("{} {}", style("ℹ").blue(), msg);
    }

    fn warning(&mut self, msg: &str) {
        self.clear_spinner();
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }

    fn section(&mut self, name: &str) {
        self.clear_spinner();
        println!("{}", style(name).bold());
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn command(&mut self, cmd: &str) {
        println!("  {}", style(cmd).cyan());
    }

    fn preformatted(&mut self, text: &str) {
        self.clear_spinner();
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

impl Drop for TerminalOutput {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}

//! Subprocess execution.
//!
//! Commands are handed to the platform shell as a single string, so the
//! caller is responsible for quoting. Every invocation is attempted exactly
//! once and awaited to completion.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::{Error, Result};

/// Exit status a POSIX shell reports when the program does not exist.
const SHELL_COMMAND_NOT_FOUND: i32 = 127;

/// How the child's standard streams are wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StdioMode {
    /// Share the terminal with the child (interactive tools keep working).
    #[default]
    Inherit,
    /// Discard all output.
    Ignore,
    /// Buffer output; stderr is attached to the error on failure.
    Capture,
}

/// Options for a single [`CommandRunner::run`] call.
#[derive(Debug, Clone, Default)]
pub struct ExecuteOptions {
    /// Working directory (defaults to the current directory).
    pub cwd: Option<PathBuf>,
    pub stdio: StdioMode,
}

impl ExecuteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run inside `dir`.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Buffer the child's output instead of inheriting it.
    pub fn captured(mut self) -> Self {
        self.stdio = StdioMode::Capture;
        self
    }

    /// Discard the child's output.
    pub fn ignored(mut self) -> Self {
        self.stdio = StdioMode::Ignore;
        self
    }
}

/// Something that can execute shell command lines.
///
/// Orchestrators depend on this trait rather than on [`ShellRunner`]
/// directly so that flows can be driven without spawning real tools.
pub trait CommandRunner {
    fn run(&self, command: &str, options: &ExecuteOptions) -> Result<()>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, options: &ExecuteOptions) -> Result<()> {
        run(command, options)
    }
}

/// Execute `command` and wait for it to exit.
pub fn run(command: &str, options: &ExecuteOptions) -> Result<()> {
    let mut cmd = shell_command(command);
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    debug!(
        command,
        cwd = ?options.cwd.as_deref().map(Path::display),
        stdio = ?options.stdio,
        "spawning"
    );

    let spawn_error = |source| Error::Spawn {
        command: command.to_string(),
        source,
    };

    let (status, stderr) = match options.stdio {
        StdioMode::Inherit => {
            let status = cmd.status().map_err(spawn_error)?;
            (status, None)
        }
        StdioMode::Ignore => {
            let status = cmd
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map_err(spawn_error)?;
            (status, None)
        }
        StdioMode::Capture => {
            let output = cmd
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .map_err(spawn_error)?;
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            (output.status, Some(stderr))
        }
    };

    check_status(command, status, stderr)
}

fn check_status(command: &str, status: ExitStatus, stderr: Option<String>) -> Result<()> {
    debug!(command, code = ?status.code(), "exited");

    if status.success() {
        return Ok(());
    }

    if cfg!(unix) && status.code() == Some(SHELL_COMMAND_NOT_FOUND) {
        let program = program_name(command);
        // Wrappers like `npx` also exit with 127 when their own child is missing.
        if stderr.as_deref().is_none_or(|text| reports_missing(text, program)) {
            return Err(Error::NotFound {
                program: program.to_string(),
                command: command.to_string(),
                stderr,
            });
        }
    }

    Err(Error::Execution {
        command: command.to_string(),
        code: status.code(),
        stderr,
    })
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

/// Whether the shell's diagnostic says `program` itself could not be found.
fn reports_missing(stderr: &str, program: &str) -> bool {
    !program.is_empty()
        && (stderr.contains(&format!("{}: not found", program))
            || stderr.contains(&format!("{}: command not found", program)))
}

/// First word of a command line.
fn program_name(command: &str) -> &str {
    command.split_whitespace().next().unwrap_or(command)
}

#[cfg(all(test, unix))]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_success_resolves() {
        assert!(run("exit 0", &ExecuteOptions::new().captured()).is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_execution_error() {
        let err = run("exit 2", &ExecuteOptions::new().captured()).unwrap_err();
        assert!(matches!(err, Error::Execution { code: Some(2), .. }));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_captured_stderr_is_in_message() {
        let err = run(
            "echo 'boom: registry unreachable' >&2; exit 1",
            &ExecuteOptions::new().captured(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("boom: registry unreachable"));
    }

    #[test]
    fn test_missing_program_is_not_found() {
        let err = run(
            "cnh-definitely-not-a-real-program --version",
            &ExecuteOptions::new().ignored(),
        )
        .unwrap_err();
        match &err {
            Error::NotFound { program, .. } => {
                assert_eq!(program, "cnh-definitely-not-a-real-program")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(err.is_spawn_failure());
    }

    #[test]
    fn test_captured_missing_program_keeps_shell_message() {
        let err = run(
            "cnh-definitely-not-a-real-program --version",
            &ExecuteOptions::new().captured(),
        )
        .unwrap_err();
        match &err {
            Error::NotFound {
                program, stderr, ..
            } => {
                assert_eq!(program, "cnh-definitely-not-a-real-program");
                assert!(stderr.as_deref().unwrap().contains("not found"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_wrapper_exiting_127_is_execution_error() {
        let err = run(
            "sh -c 'echo \"sh: 1: graphql-codegen: not found\" >&2; exit 127'",
            &ExecuteOptions::new().captured(),
        )
        .unwrap_err();
        match &err {
            Error::Execution { code, stderr, .. } => {
                assert_eq!(*code, Some(127));
                assert!(stderr.as_deref().unwrap().contains("graphql-codegen: not found"));
            }
            other => panic!("expected Execution, got {other:?}"),
        }
        assert!(err.to_string().contains("graphql-codegen: not found"));
        assert!(!err.is_spawn_failure());
    }

    #[test]
    fn test_reports_missing() {
        assert!(reports_missing("sh: 1: pnpm: not found\n", "pnpm"));
        assert!(reports_missing("bash: line 1: pnpm: command not found\n", "pnpm"));
        assert!(!reports_missing("sh: 1: graphql-codegen: not found\n", "sh"));
        assert!(!reports_missing("sh: 1: graphql-codegen: not found\n", "npx"));
    }

    #[test]
    fn test_missing_working_directory_is_spawn_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = run("exit 0", &ExecuteOptions::new().cwd(&missing)).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
        assert!(err.is_spawn_failure());
    }

    #[test]
    fn test_runs_in_working_directory() {
        let temp = TempDir::new().unwrap();

        run(
            "echo hi > marker.txt",
            &ExecuteOptions::new().cwd(temp.path()).captured(),
        )
        .unwrap();

        assert!(temp.path().join("marker.txt").exists());
    }

    #[test]
    fn test_shell_runner_delegates() {
        let runner = ShellRunner;
        assert!(runner.run("true", &ExecuteOptions::new().ignored()).is_ok());
        assert!(runner.run("false", &ExecuteOptions::new().ignored()).is_err());
    }

    #[test]
    fn test_program_name() {
        assert_eq!(program_name("pnpm add -D foo"), "pnpm");
        assert_eq!(program_name("  git   init"), "git");
        assert_eq!(program_name(""), "");
    }
}

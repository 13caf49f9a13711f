use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for cnh-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The process could not be started at all.
    #[error("failed to start `{command}`")]
    #[diagnostic(code(cnh::spawn))]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The shell started but could not find the program.
    #[error("`{program}` was not found while running `{command}`{}", stderr_suffix(.stderr))]
    #[diagnostic(
        code(cnh::not_found),
        help("make sure `{program}` is installed and available on your PATH")
    )]
    NotFound {
        program: String,
        command: String,
        stderr: Option<String>,
    },

    /// The process ran and exited unsuccessfully.
    #[error("`{command}` failed with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    #[diagnostic(code(cnh::execution))]
    Execution {
        command: String,
        code: Option<i32>,
        stderr: Option<String>,
    },

    #[error("I/O error on '{path}'")]
    #[diagnostic(code(cnh::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' does not exist")]
    #[diagnostic(code(cnh::missing_file))]
    MissingFile { path: PathBuf },

    #[error("failed to parse '{path}'")]
    #[diagnostic(code(cnh::json))]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {what} '{value}': {reason}")]
    #[diagnostic(code(cnh::validation))]
    Validation {
        what: String,
        value: String,
        reason: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn validation(
        what: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            what: what.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error means the external program never ran.
    pub fn is_spawn_failure(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::NotFound { .. })
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by a signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &Option<String>) -> String {
    match stderr.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!(": {}", text),
        _ => String::new(),
    }
}

//! Dotenv file creation and non-destructive appends.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result, file::write_file};

/// A single `KEY=value` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVariable {
    pub key: String,
    pub value: String,
    /// Written as a `# comment` line directly above the entry.
    pub comment: Option<String>,
}

impl EnvVariable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnvFileOptions {
    /// Comment line written before the block of variables.
    pub header: Option<String>,
    /// Replace the whole file instead of appending missing keys.
    pub overwrite: bool,
}

impl EnvFileOptions {
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: Some(header.into()),
            overwrite: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileAction {
    Created,
    Appended,
    /// Every key was already present; the file was not touched.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFileResult {
    pub action: EnvFileAction,
    pub path: PathBuf,
}

/// Create `path` with `vars`, or append the ones whose keys it lacks.
///
/// Existing keys are never duplicated or rewritten in append mode.
pub fn create_or_append(
    path: &Path,
    vars: &[EnvVariable],
    options: &EnvFileOptions,
) -> Result<EnvFileResult> {
    let existing = match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(path, e)),
    };

    let result = |action| EnvFileResult {
        action,
        path: path.to_path_buf(),
    };

    let existing = match existing {
        Some(content) if !options.overwrite => content,
        _ => {
            write_file(path, &render_block(options.header.as_deref(), vars.iter()))?;
            debug!(path = %path.display(), count = vars.len(), "created env file");
            return Ok(result(EnvFileAction::Created));
        }
    };

    let present = existing_keys(&existing);
    let mut seen = HashSet::new();
    let missing: Vec<&EnvVariable> = vars
        .iter()
        .filter(|var| !present.contains(var.key.as_str()) && seen.insert(var.key.as_str()))
        .collect();

    if missing.is_empty() {
        debug!(path = %path.display(), "all env keys already present");
        return Ok(result(EnvFileAction::Skipped));
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    if !content.is_empty() {
        content.push('\n');
    }
    content.push_str(&render_block(options.header.as_deref(), missing.iter().copied()));

    write_file(path, &content)?;
    debug!(path = %path.display(), count = missing.len(), "appended env variables");
    Ok(result(EnvFileAction::Appended))
}

fn render_block<'a>(header: Option<&str>, vars: impl Iterator<Item = &'a EnvVariable>) -> String {
    let mut out = String::new();
    if let Some(header) = header {
        out.push_str(&format!("# {}\n", header));
    }
    for var in vars {
        if let Some(comment) = &var.comment {
            out.push_str(&format!("# {}\n", comment));
        }
        out.push_str(&format!("{}={}\n", var.key, format_value(&var.value)));
    }
    out
}

/// Keys defined in a dotenv document. Comment lines and an `export ` prefix
/// are understood.
fn existing_keys(content: &str) -> HashSet<&str> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim_start();
            if line.starts_with('#') {
                return None;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, _) = line.split_once('=')?;
            let key = key.trim();
            (!key.is_empty()).then_some(key)
        })
        .collect()
}

/// Quote values that a dotenv parser would otherwise truncate or split.
fn format_value(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'' | '\\'));
    if !needs_quotes {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

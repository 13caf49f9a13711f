//! Writing generated files to disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// A file whose content is produced by this tool.
///
/// Implementors only describe the file; [`GeneratedFile::write`] applies
/// the [`FileRules`].
pub trait GeneratedFile {
    /// Destination inside the project rooted at `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    fn render(&self) -> String;

    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        apply_rules(&path, &self.rules(), || self.render())
    }
}

/// Write `content` to `path`, replacing any existing file.
///
/// Parent directories are not created; see [`ensure_dir_exists`].
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing file");
    std::fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Create `dir` and every missing parent.
pub fn ensure_dir_exists(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

fn apply_rules(
    path: &Path,
    rules: &FileRules,
    render: impl FnOnce() -> String,
) -> Result<WriteResult> {
    if rules.overwrite == Overwrite::IfMissing && path.exists() {
        debug!(path = %path.display(), "keeping existing file");
        return Ok(WriteResult::Skipped);
    }

    if rules.create_parents {
        if let Some(parent) = path.parent() {
            ensure_dir_exists(parent)?;
        }
    }

    write_file(path, &render())?;
    Ok(WriteResult::Written)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// An [`Overwrite::IfMissing`] file was already there.
    Skipped,
}

/// Content known up front, written to an absolute path.
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Replaces any existing file and expects the parent to exist.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn write(&self) -> Result<WriteResult> {
        apply_rules(&self.path, &self.rules, || self.content.clone())
    }
}

#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Create missing parent directories before writing.
    pub create_parents: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Always,
    /// Leave an existing file untouched.
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            create_parents: false,
        }
    }
}

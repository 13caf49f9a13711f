//! Package manager command mapping and lockfile detection.

use std::{fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Lockfiles in detection priority order.
///
/// pnpm comes first so that a repository with several lockfiles resolves to
/// the preferred default.
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    /// All variants, in the order they are offered to the user.
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];

    /// Used when no lockfile is found.
    pub const DEFAULT: PackageManager = Self::Pnpm;

    /// Returns the package manager's binary name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Detect the package manager in use from the lockfiles in `dir`.
    pub fn detect(dir: &Path) -> Self {
        for (lockfile, manager) in LOCKFILES {
            if dir.join(lockfile).is_file() {
                debug!(lockfile, manager = manager.as_str(), "detected package manager");
                return *manager;
            }
        }
        debug!(dir = %dir.display(), "no lockfile found, using default package manager");
        Self::DEFAULT
    }

    /// Command prefix that adds packages, e.g. `pnpm add -D`.
    pub fn add_command(&self, dev: bool) -> &'static str {
        match (self, dev) {
            (Self::Npm, false) => "npm install",
            (Self::Npm, true) => "npm install -D",
            (Self::Yarn, false) => "yarn add",
            (Self::Yarn, true) => "yarn add -D",
            (Self::Pnpm, false) => "pnpm add",
            (Self::Pnpm, true) => "pnpm add -D",
            (Self::Bun, false) => "bun add",
            (Self::Bun, true) => "bun add -d",
        }
    }

    /// Command prefix that downloads and runs a package, e.g. `pnpm dlx`.
    pub fn executor_command(&self) -> &'static str {
        match self {
            Self::Npm => "npx",
            Self::Yarn => "yarn dlx",
            Self::Pnpm => "pnpm dlx",
            Self::Bun => "bunx",
        }
    }

    /// Command prefix that runs a binary installed in the project.
    pub fn exec_command(&self) -> &'static str {
        match self {
            Self::Npm => "npx",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm exec",
            Self::Bun => "bunx",
        }
    }

    /// Command that installs all dependencies.
    pub fn install_command(&self) -> String {
        format!("{} install", self.as_str())
    }

    /// Command that runs a `package.json` script.
    pub fn run_script_command(&self, script: &str) -> String {
        match self {
            Self::Npm => format!("npm run {}", script),
            _ => format!("{} {}", self.as_str(), script),
        }
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            _ => Err(format!(
                "unknown package manager '{}', expected one of: npm, yarn, pnpm, bun",
                s
            )),
        }
    }
}

//! Nuxt project detection.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Config file names tried in order when locating the Nuxt config.
pub const NUXT_CONFIG_CANDIDATES: [&str; 3] = ["nuxt.config.ts", "nuxt.config.js", "nuxt.config.mjs"];

/// Where feature directories (`plugins`, `apollo`, ...) live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLayout {
    /// Nuxt 4 style, sources under `app/`.
    App,
    /// Sources at the project root.
    Root,
}

impl ProjectLayout {
    pub fn detect(dir: &Path) -> Self {
        let layout = if dir.join("app").is_dir() {
            Self::App
        } else {
            Self::Root
        };
        debug!(dir = %dir.display(), ?layout, "detected project layout");
        layout
    }

    /// Directory of `feature`, relative to the project root.
    pub fn feature_dir(&self, feature: &str) -> PathBuf {
        match self {
            Self::App => Path::new("app").join(feature),
            Self::Root => PathBuf::from(feature),
        }
    }

    /// `feature_dir` rendered with forward slashes and a `./` prefix, for
    /// use inside generated source.
    pub fn feature_import_path(&self, feature: &str, file: &str) -> String {
        match self {
            Self::App => format!("./app/{}/{}", feature, file),
            Self::Root => format!("./{}/{}", feature, file),
        }
    }
}

/// The first existing Nuxt config file in `dir`.
pub fn find_nuxt_config(dir: &Path) -> Option<PathBuf> {
    NUXT_CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Fail unless `dir` looks like a Nuxt project.
pub fn ensure_initialized(dir: &Path) -> Result<()> {
    if dir.join(".nuxt").is_dir() || find_nuxt_config(dir).is_some() {
        return Ok(());
    }
    Err(Error::validation(
        "project directory",
        dir.display().to_string(),
        "no Nuxt project found here; run `create-nuxt-hasura-cli init <project-name>` first",
    ))
}

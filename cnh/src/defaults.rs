//! CLI defaults persisted by the `config` command.

use std::path::{Path, PathBuf};

use cnh_core::File;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULTS_FILE: &str = ".create-nuxt-hasura-cli.json";

pub const DEFAULT_HASURA_ENDPOINT: &str = "http://localhost:8080/v1/graphql";
pub const DEFAULT_SCHEMA_PATH: &str = "./schema.graphql";
pub const DEFAULT_CODEGEN_OUTPUT_DIR: &str = "./types/graphql";

/// Prompt defaults, stored as JSON in [`DEFAULTS_FILE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliDefaults {
    pub default_hasura_endpoint: String,
    pub default_schema_path: String,
    pub default_codegen_output_dir: String,
}

impl Default for CliDefaults {
    fn default() -> Self {
        Self {
            default_hasura_endpoint: DEFAULT_HASURA_ENDPOINT.to_string(),
            default_schema_path: DEFAULT_SCHEMA_PATH.to_string(),
            default_codegen_output_dir: DEFAULT_CODEGEN_OUTPUT_DIR.to_string(),
        }
    }
}

impl CliDefaults {
    /// Load the defaults file in `dir`.
    ///
    /// A missing file yields the built-in defaults; a malformed one is
    /// logged and ignored.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(DEFAULTS_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read CLI defaults");
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(defaults) => {
                debug!(path = %path.display(), "loaded CLI defaults");
                defaults
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed CLI defaults");
                Self::default()
            }
        }
    }

    /// Write the defaults file in `dir`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(DEFAULTS_FILE);
        let mut content =
            serde_json::to_string_pretty(self).wrap_err("Failed to serialize CLI defaults")?;
        content.push('\n');
        File::new(&path, content).write()?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_uses_builtin_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(CliDefaults::load(temp.path()), CliDefaults::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let defaults = CliDefaults {
            default_hasura_endpoint: "https://example.hasura.app/v1/graphql".to_string(),
            ..Default::default()
        };

        defaults.save(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(DEFAULTS_FILE)).unwrap();
        assert!(content.contains("\"defaultHasuraEndpoint\": \"https://example.hasura.app/v1/graphql\""));
        assert!(content.contains("\"defaultCodegenOutputDir\": \"./types/graphql\""));
        assert_eq!(CliDefaults::load(temp.path()), defaults);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULTS_FILE),
            r#"{ "defaultSchemaPath": "./gql/schema.graphql" }"#,
        )
        .unwrap();

        let defaults = CliDefaults::load(temp.path());
        assert_eq!(defaults.default_schema_path, "./gql/schema.graphql");
        assert_eq!(defaults.default_hasura_endpoint, DEFAULT_HASURA_ENDPOINT);
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULTS_FILE), "{ not json").unwrap();
        assert_eq!(CliDefaults::load(temp.path()), CliDefaults::default());
    }
}

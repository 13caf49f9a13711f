use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Error, Result, file::write_file};

pub const PACKAGE_JSON: &str = "package.json";

/// Merge `scripts` into the `scripts` table of `<project_dir>/package.json`.
///
/// Existing scripts with the same name are replaced; everything else keeps
/// its position in the file.
pub fn add_scripts(project_dir: &Path, scripts: &IndexMap<String, String>) -> Result<()> {
    let path = project_dir.join(PACKAGE_JSON);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingFile { path });
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let mut root: Value = serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.clone(),
        source,
    })?;

    let Some(object) = root.as_object_mut() else {
        return Err(Error::validation(
            "package.json",
            path.display().to_string(),
            "the top level is not an object",
        ));
    };

    let table = object
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(table) = table.as_object_mut() else {
        return Err(Error::validation(
            "package.json",
            path.display().to_string(),
            "`scripts` is not an object",
        ));
    };

    for (name, command) in scripts {
        debug!(name = %name, command = %command, "adding package.json script");
        table.insert(name.clone(), Value::String(command.clone()));
    }

    let mut rendered = serde_json::to_string_pretty(&root).map_err(|source| Error::Json {
        path: path.clone(),
        source,
    })?;
    rendered.push('\n');
    write_file(&path, &rendered)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn scripts(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_adds_script_and_keeps_key_order() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PACKAGE_JSON),
            r#"{"name":"demo","private":true,"scripts":{"dev":"nuxt dev","build":"nuxt build"},"dependencies":{"nuxt":"^3.0.0"}}"#,
        )
        .unwrap();

        add_scripts(temp.path(), &scripts(&[("fetch:schema", "get-graphql-schema")])).unwrap();

        let written = fs::read_to_string(temp.path().join(PACKAGE_JSON)).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["name", "private", "scripts", "dependencies"]);

        let script_names: Vec<&String> = value["scripts"].as_object().unwrap().keys().collect();
        assert_eq!(script_names, ["dev", "build", "fetch:schema"]);
        assert!(written.ends_with("}\n"));
    }

    #[test]
    fn test_creates_scripts_table() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PACKAGE_JSON), r#"{"name":"demo"}"#).unwrap();

        add_scripts(temp.path(), &scripts(&[("codegen", "graphql-codegen")])).unwrap();

        let value: Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join(PACKAGE_JSON)).unwrap())
                .unwrap();
        assert_eq!(value["scripts"]["codegen"], "graphql-codegen");
    }

    #[test]
    fn test_missing_package_json() {
        let temp = TempDir::new().unwrap();
        let err = add_scripts(temp.path(), &scripts(&[("a", "b")])).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PACKAGE_JSON), "{ not json").unwrap();
        let err = add_scripts(temp.path(), &scripts(&[("a", "b")])).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_scripts_not_an_object() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PACKAGE_JSON), r#"{"scripts":[]}"#).unwrap();
        let err = add_scripts(temp.path(), &scripts(&[("a", "b")])).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }
}

use std::path::{Path, PathBuf};

use cnh_core::{NUXT_CONFIG_CANDIDATES, find_nuxt_config};
use tracing::{debug, warn};

use crate::{ConfigValue, NuxtConfig, Result};

/// Module that provides `apollo.clients`.
pub const APOLLO_MODULE: &str = "@nuxtjs/apollo";

/// What [`update_nuxt_config`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutateOutcome {
    Updated { path: PathBuf },
    /// The edit was already in place.
    Unchanged { path: PathBuf },
    /// No config file exists; the caller should tell the user what to add.
    NotFound { searched: Vec<PathBuf> },
}

/// Path of the Nuxt config in `dir`, if any.
pub fn locate(dir: &Path) -> Option<PathBuf> {
    find_nuxt_config(dir)
}

/// Open the Nuxt config in `dir`, apply `edit`, and save it if it changed.
pub fn update_nuxt_config<F>(dir: &Path, edit: F) -> Result<MutateOutcome>
where
    F: FnOnce(&mut NuxtConfig) -> Result<()>,
{
    let Some(path) = locate(dir) else {
        let searched: Vec<PathBuf> = NUXT_CONFIG_CANDIDATES.iter().map(|n| dir.join(n)).collect();
        warn!(dir = %dir.display(), "no nuxt config found");
        return Ok(MutateOutcome::NotFound { searched });
    };

    let mut config = NuxtConfig::open(&path)?;
    edit(&mut config)?;

    if !config.is_modified() {
        debug!(path = %path.display(), "nuxt config already up to date");
        return Ok(MutateOutcome::Unchanged { path });
    }

    config.save()?;
    debug!(path = %path.display(), "nuxt config updated");
    Ok(MutateOutcome::Updated { path })
}

/// Register `name` in `modules`.
pub fn add_module(dir: &Path, name: &str) -> Result<MutateOutcome> {
    update_nuxt_config(dir, |config| config.add_module(name).map(|_| ()))
}

/// Register the Apollo module and point its default client at `client_path`.
pub fn add_apollo_client(dir: &Path, client_path: &str) -> Result<MutateOutcome> {
    update_nuxt_config(dir, |config| {
        config.add_module(APOLLO_MODULE)?;
        config.set("apollo.clients.default", ConfigValue::string(client_path))
    })
}

/// Set `runtimeConfig.<key>` (or `runtimeConfig.public.<key>`).
pub fn add_runtime_config(
    dir: &Path,
    key: &str,
    value: ConfigValue,
    public: bool,
) -> Result<MutateOutcome> {
    let path = if public {
        format!("runtimeConfig.public.{}", key)
    } else {
        format!("runtimeConfig.{}", key)
    };
    update_nuxt_config(dir, |config| config.set(&path, value))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    const STARTER: &str = "// https://nuxt.com/docs/api/configuration/nuxt-config
export default defineNuxtConfig({
  compatibilityDate: '2025-07-15',
  devtools: { enabled: true }
})
";

    fn project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nuxt.config.ts"), config).unwrap();
        temp
    }

    fn read_config(dir: &TempDir) -> String {
        fs::read_to_string(dir.path().join("nuxt.config.ts")).unwrap()
    }

    #[test]
    fn test_add_module_twice_lists_it_once() {
        let dir = project(STARTER);

        let first = add_module(dir.path(), APOLLO_MODULE).unwrap();
        let second = add_module(dir.path(), APOLLO_MODULE).unwrap();

        assert!(matches!(first, MutateOutcome::Updated { .. }));
        assert!(matches!(second, MutateOutcome::Unchanged { .. }));
        assert_eq!(read_config(&dir).matches(APOLLO_MODULE).count(), 1);
        let config = NuxtConfig::open(dir.path().join("nuxt.config.ts")).unwrap();
        assert_eq!(config.modules(), [APOLLO_MODULE]);
    }

    #[test]
    fn test_add_apollo_client() {
        let dir = project(STARTER);

        add_apollo_client(dir.path(), "./app/apollo/apollo.ts").unwrap();

        let written = read_config(&dir);
        assert!(written.starts_with("// https://nuxt.com/docs/api/configuration/nuxt-config\n"));
        assert!(written.contains("modules: ['@nuxtjs/apollo'],"));
        assert!(written.contains("default: './app/apollo/apollo.ts'"));

        let again = add_apollo_client(dir.path(), "./app/apollo/apollo.ts").unwrap();
        assert!(matches!(again, MutateOutcome::Unchanged { .. }));
    }

    #[test]
    fn test_add_runtime_config_public() {
        let dir = project(STARTER);

        add_runtime_config(
            dir.path(),
            "hasuraGraphqlEndpoint",
            ConfigValue::raw("process.env.NUXT_HASURA_GRAPHQL_ENDPOINT"),
            true,
        )
        .unwrap();

        let config = NuxtConfig::open(dir.path().join("nuxt.config.ts")).unwrap();
        let value = config
            .get("runtimeConfig.public.hasuraGraphqlEndpoint")
            .unwrap();
        assert_eq!(
            value.span().text(config.source()),
            "process.env.NUXT_HASURA_GRAPHQL_ENDPOINT"
        );
    }

    #[test]
    fn test_missing_config_is_not_found() {
        let dir = TempDir::new().unwrap();

        let outcome = add_module(dir.path(), APOLLO_MODULE).unwrap();

        match outcome {
            MutateOutcome::NotFound { searched } => {
                assert_eq!(searched.len(), NUXT_CONFIG_CANDIDATES.len());
                assert_eq!(searched[0], dir.path().join("nuxt.config.ts"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_js_config_is_used_when_ts_is_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("nuxt.config.js"), "export default {}\n").unwrap();

        let outcome = add_module(dir.path(), APOLLO_MODULE).unwrap();

        assert_eq!(
            outcome,
            MutateOutcome::Updated {
                path: dir.path().join("nuxt.config.js")
            }
        );
    }

    #[test]
    fn test_unparseable_config_is_left_alone() {
        let original = "export default defineNuxtConfig(async () => ({}))\n";
        let dir = project(original);

        let err = add_module(dir.path(), APOLLO_MODULE).unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
        assert_eq!(read_config(&dir), original);
    }
}

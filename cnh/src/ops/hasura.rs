//! Hasura setup - connection details into dotenv files and runtime config.

use cnh_core::{EnvFileOptions, EnvVariable, create_or_append, ensure_initialized};
use cnh_nuxt_config::{ConfigValue, add_runtime_config};
use cnh_templates::{
    ast::JsObject,
    env_vars::{
        HASURA_GRAPHQL_ADMIN_SECRET, HASURA_GRAPHQL_ENDPOINT, HASURA_GRAPHQL_ENDPOINT_LOCAL,
        RUNTIME_ENDPOINT_KEY,
    },
};
use eyre::Result;

use super::SetupContext;
use crate::reports::{HasuraReport, Report};

pub const ENV_FILE: &str = ".env";
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Placeholder written to `.env.example` instead of the real secret.
pub const ADMIN_SECRET_PLACEHOLDER: &str = "your-admin-secret-here";

#[derive(Debug, Clone)]
pub struct HasuraOptions {
    pub endpoint: String,
    /// Empty when the instance has no admin secret.
    pub admin_secret: String,
}

/// Execute the Hasura setup.
pub fn hasura(ctx: &mut SetupContext, opts: &HasuraOptions) -> Result<HasuraReport> {
    ensure_initialized(ctx.project_dir)?;

    let mut vars = vec![
        EnvVariable::new(HASURA_GRAPHQL_ENDPOINT, &opts.endpoint),
        EnvVariable::new(HASURA_GRAPHQL_ENDPOINT_LOCAL, &opts.endpoint),
    ];
    if !opts.admin_secret.is_empty() {
        vars.push(EnvVariable::new(
            HASURA_GRAPHQL_ADMIN_SECRET,
            &opts.admin_secret,
        ));
    }
    let result = create_or_append(
        &ctx.project_dir.join(ENV_FILE),
        &vars,
        &EnvFileOptions::with_header("Hasura"),
    )?;
    ctx.report_env_file(&result);

    let example = [
        EnvVariable::new(HASURA_GRAPHQL_ENDPOINT, &opts.endpoint),
        EnvVariable::new(HASURA_GRAPHQL_ENDPOINT_LOCAL, &opts.endpoint),
        EnvVariable::new(HASURA_GRAPHQL_ADMIN_SECRET, ADMIN_SECRET_PLACEHOLDER),
    ];
    let result = create_or_append(
        &ctx.project_dir.join(ENV_EXAMPLE_FILE),
        &example,
        &EnvFileOptions::with_header("Hasura"),
    )?;
    ctx.report_env_file(&result);

    let endpoint_expr = format!("process.env.{}", HASURA_GRAPHQL_ENDPOINT);
    let edit = add_runtime_config(
        ctx.project_dir,
        RUNTIME_ENDPOINT_KEY,
        ConfigValue::raw(&endpoint_expr),
        true,
    );
    ctx.finish_config_edit(edit, runtime_config_settings(&endpoint_expr))?;

    let report = HasuraReport {
        endpoint: opts.endpoint.clone(),
        has_admin_secret: !opts.admin_secret.is_empty(),
    };
    report.render(ctx.out);
    Ok(report)
}

/// `runtimeConfig.public.hasuraGraphqlEndpoint`, for manual instructions.
pub(crate) fn runtime_config_settings(endpoint_expr: &str) -> JsObject {
    JsObject::new().object(
        "runtimeConfig",
        JsObject::new().object(
            "public",
            JsObject::new().raw(RUNTIME_ENDPOINT_KEY, endpoint_expr),
        ),
    )
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use cnh_core::PackageManager;
    use tempfile::TempDir;

    use super::*;
    use crate::ops::testing::{RecordingOutput, RecordingRunner};

    const CONFIG: &str = "export default defineNuxtConfig({\n  devtools: { enabled: true },\n})\n";

    fn options() -> HasuraOptions {
        HasuraOptions {
            endpoint: "http://localhost:8080/v1/graphql".to_string(),
            admin_secret: "s3cret".to_string(),
        }
    }

    fn run(dir: &Path, opts: &HasuraOptions) -> (Result<HasuraReport>, RecordingOutput) {
        let runner = RecordingRunner::new();
        let mut out = RecordingOutput::new();
        let result = {
            let mut ctx = SetupContext::new(&runner, &mut out, dir, PackageManager::Pnpm);
            hasura(&mut ctx, opts)
        };
        assert!(runner.commands().is_empty());
        (result, out)
    }

    #[test]
    fn test_writes_env_files_and_runtime_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nuxt.config.ts"), CONFIG).unwrap();

        let (result, out) = run(temp.path(), &options());
        let report = result.unwrap();

        assert!(report.has_admin_secret);
        let env = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert!(env.contains("NUXT_HASURA_GRAPHQL_ENDPOINT=http://localhost:8080/v1/graphql\n"));
        assert!(env.contains("NUXT_HASURA_GRAPHQL_ADMIN_SECRET=s3cret\n"));

        let example = fs::read_to_string(temp.path().join(".env.example")).unwrap();
        assert!(example.contains("NUXT_HASURA_GRAPHQL_ADMIN_SECRET=your-admin-secret-here\n"));
        assert!(!example.contains("s3cret"));

        let config = fs::read_to_string(temp.path().join("nuxt.config.ts")).unwrap();
        assert!(config.contains("hasuraGraphqlEndpoint: process.env.NUXT_HASURA_GRAPHQL_ENDPOINT"));
        assert!(out.contains("kv: Admin Secret=******"));
    }

    #[test]
    fn test_empty_secret_is_not_written() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nuxt.config.ts"), CONFIG).unwrap();
        let opts = HasuraOptions {
            admin_secret: String::new(),
            ..options()
        };

        let (result, out) = run(temp.path(), &opts);

        assert!(!result.unwrap().has_admin_secret);
        let env = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert!(!env.contains("ADMIN_SECRET"));
        assert!(out.contains("kv: Admin Secret=None"));
    }

    #[test]
    fn test_rerun_keeps_existing_values() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nuxt.config.ts"), CONFIG).unwrap();
        run(temp.path(), &options()).0.unwrap();
        let first = fs::read_to_string(temp.path().join(".env")).unwrap();

        let opts = HasuraOptions {
            endpoint: "https://example.hasura.app/v1/graphql".to_string(),
            ..options()
        };
        let (result, out) = run(temp.path(), &opts);
        result.unwrap();

        assert_eq!(fs::read_to_string(temp.path().join(".env")).unwrap(), first);
        assert!(out.contains("info: .env already has these variables, skipping"));
        assert!(out.contains("info: nuxt.config.ts is already configured"));
    }

    #[test]
    fn test_requires_nuxt_project() {
        let temp = TempDir::new().unwrap();
        let (result, _) = run(temp.path(), &options());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("init <project-name>"));
    }
}

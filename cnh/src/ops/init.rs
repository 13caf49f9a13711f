//! Init operation - create a Nuxt starter and run the selected setups in it.

use cnh_core::validate_project_name;
use eyre::{Context, Result};

use super::{
    SetupContext,
    codegen::{CodegenOptions, codegen},
    get_schema::{GetSchemaOptions, get_schema},
    graphql_client::{GraphqlClientOptions, graphql_client},
    hasura::{HasuraOptions, hasura},
};
use crate::reports::{InitReport, Report};

/// Starter template fetched with giget.
pub const NUXT_STARTER: &str = "gh:nuxt/starter#v3";

/// Options for the init operation.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub project_name: String,
    /// Run `git init` in the new project.
    pub git: bool,
    pub hasura: Option<HasuraOptions>,
    pub get_schema: Option<GetSchemaOptions>,
    pub codegen: Option<CodegenOptions>,
    pub graphql_client: Option<GraphqlClientOptions>,
}

/// Execute the init operation.
///
/// `ctx.project_dir` is the parent directory; the project is created in
/// `<project_dir>/<project_name>` and every follow-up setup runs there.
pub fn init(ctx: &mut SetupContext, opts: &InitOptions) -> Result<InitReport> {
    validate_project_name(&opts.project_name)?;
    let pm = ctx.package_manager;

    ctx.run_step(
        &format!("Creating Nuxt project: {}...", opts.project_name),
        &format!("Nuxt project '{}' created.", opts.project_name),
        &format!(
            "{} giget@latest {} {}",
            pm.executor_command(),
            NUXT_STARTER,
            opts.project_name
        ),
    )
    .wrap_err("Failed to create Nuxt project")?;

    let project_dir = ctx.project_dir.join(&opts.project_name);
    let mut ctx = ctx.at(&project_dir);

    ctx.run_step(
        "Installing dependencies...",
        "Dependencies installed.",
        &pm.install_command(),
    )
    .wrap_err("Failed to install dependencies")?;

    if opts.git {
        let git = ctx.run_step(
            "Initializing git repository...",
            "Git repository initialized.",
            "git init",
        );
        if let Err(e) = git {
            ctx.out
                .warning(&format!("Failed to initialize git: {}", e));
        }
    }

    let mut features = Vec::new();

    if let Some(hasura_opts) = &opts.hasura {
        ctx.out.newline();
        hasura(&mut ctx, hasura_opts).wrap_err("Failed to set up GraphQL with Hasura")?;
        features.push("hasura");
    }

    if let Some(schema_opts) = &opts.get_schema {
        ctx.out.newline();
        get_schema(&mut ctx, schema_opts).wrap_err("Failed to set up get-schema")?;
        features.push("get-schema");
    }

    if let Some(codegen_opts) = &opts.codegen {
        ctx.out.newline();
        codegen(&mut ctx, codegen_opts).wrap_err("Failed to set up GraphQL Codegen")?;
        features.push("codegen");
    }

    if let Some(client_opts) = &opts.graphql_client {
        ctx.out.newline();
        graphql_client(&mut ctx, client_opts).wrap_err("Failed to set up GraphQL client")?;
        features.push("graphql-client");
    }

    let report = InitReport {
        project_name: opts.project_name.clone(),
        package_manager: pm,
        features,
    };
    report.render(ctx.out);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use cnh_core::PackageManager;
    use tempfile::TempDir;

    use super::*;
    use crate::ops::{
        graphql_client::GraphqlClient,
        testing::{RecordingOutput, RecordingRunner},
    };

    fn options(name: &str) -> InitOptions {
        InitOptions {
            project_name: name.to_string(),
            git: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_creates_installs_and_inits_git() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let mut out = RecordingOutput::new();

        {
            let mut ctx = SetupContext::new(&runner, &mut out, temp.path(), PackageManager::Pnpm);
            init(&mut ctx, &options("my-app")).unwrap();
        }

        let project = temp.path().join("my-app");
        assert_eq!(
            runner.calls(),
            [
                (
                    "pnpm dlx giget@latest gh:nuxt/starter#v3 my-app".to_string(),
                    Some(temp.path().to_path_buf())
                ),
                ("pnpm install".to_string(), Some(project.clone())),
                ("git init".to_string(), Some(project)),
            ]
        );
        assert!(out.contains("command: cd my-app"));
        assert!(out.contains("command: pnpm dev"));
    }

    #[test]
    fn test_no_git() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let mut out = RecordingOutput::new();
        let opts = InitOptions {
            git: false,
            ..options("app")
        };

        {
            let mut ctx = SetupContext::new(&runner, &mut out, temp.path(), PackageManager::Npm);
            init(&mut ctx, &opts).unwrap();
        }

        assert_eq!(
            runner.commands(),
            ["npx giget@latest gh:nuxt/starter#v3 app", "npm install"]
        );
        assert!(out.contains("command: npm run dev"));
    }

    #[test]
    fn test_git_failure_is_a_warning() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().failing_on("git");
        let mut out = RecordingOutput::new();

        let result = {
            let mut ctx = SetupContext::new(&runner, &mut out, temp.path(), PackageManager::Bun);
            init(&mut ctx, &options("app"))
        };

        assert!(result.is_ok());
        assert!(out.contains("warning: Failed to initialize git"));
    }

    #[test]
    fn test_starter_failure_aborts() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().failing_on("yarn dlx giget");
        let mut out = RecordingOutput::new();

        let result = {
            let mut ctx = SetupContext::new(&runner, &mut out, temp.path(), PackageManager::Yarn);
            init(&mut ctx, &options("app"))
        };

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Failed to create Nuxt project");
        assert_eq!(runner.commands().len(), 1);
    }

    #[test]
    fn test_invalid_name_runs_nothing() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let mut out = RecordingOutput::new();

        let result = {
            let mut ctx = SetupContext::new(&runner, &mut out, temp.path(), PackageManager::Pnpm);
            init(&mut ctx, &options("my app; rm -rf /"))
        };

        assert!(result.is_err());
        assert!(runner.commands().is_empty());
    }

    #[test]
    fn test_follow_up_setups_run_in_new_project() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("app");
        // Stand-in for what giget would have created.
        fs::create_dir(&project).unwrap();
        fs::write(
            project.join("nuxt.config.ts"),
            "export default defineNuxtConfig({\n  devtools: { enabled: true },\n})\n",
        )
        .unwrap();
        let runner = RecordingRunner::new();
        let mut out = RecordingOutput::new();
        let opts = InitOptions {
            git: false,
            hasura: Some(HasuraOptions {
                endpoint: "http://localhost:8080/v1/graphql".to_string(),
                admin_secret: String::new(),
            }),
            graphql_client: Some(GraphqlClientOptions {
                client: GraphqlClient::Urql,
                token_name: "auth-token".to_string(),
            }),
            ..options("app")
        };

        let report = {
            let mut ctx = SetupContext::new(&runner, &mut out, temp.path(), PackageManager::Pnpm);
            init(&mut ctx, &opts).unwrap()
        };

        assert_eq!(report.features, ["hasura", "graphql-client"]);
        assert!(project.join(".env").exists());
        assert!(project.join("plugins/urql.ts").exists());
        assert!(!temp.path().join(".env").exists());
        assert_eq!(runner.commands().last().unwrap(), "pnpm add @urql/vue graphql");
    }
}

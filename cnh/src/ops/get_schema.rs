//! Schema fetching setup - a `fetch:schema` script backed by dotenv.

use cnh_core::{EnvFileOptions, EnvVariable, add_scripts, create_or_append, validate_shell_path};
use cnh_templates::env_vars::{HASURA_GRAPHQL_ADMIN_SECRET, HASURA_GRAPHQL_ENDPOINT_LOCAL};
use eyre::Result;
use indexmap::IndexMap;

use super::{
    SetupContext,
    hasura::{ADMIN_SECRET_PLACEHOLDER, ENV_EXAMPLE_FILE},
};

pub const GET_SCHEMA_PACKAGES: [&str; 2] = ["get-graphql-schema", "dotenv-cli"];

pub const FETCH_SCHEMA_SCRIPT: &str = "fetch:schema";

#[derive(Debug, Clone)]
pub struct GetSchemaOptions {
    /// Endpoint written to `.env.example` as the local endpoint.
    pub endpoint: String,
    /// Where the script writes the schema.
    pub output_path: String,
}

/// The `fetch:schema` command line.
///
/// `output_path` lands unquoted in a shell redirect, so it must already be
/// validated.
pub fn fetch_schema_script(output_path: &str) -> String {
    format!(
        "dotenv -- sh -c 'get-graphql-schema -h \"x-hasura-admin-secret=${}\" \"${}\" > {}'",
        HASURA_GRAPHQL_ADMIN_SECRET, HASURA_GRAPHQL_ENDPOINT_LOCAL, output_path
    )
}

/// Execute the get-schema setup.
pub fn get_schema(ctx: &mut SetupContext, opts: &GetSchemaOptions) -> Result<()> {
    validate_shell_path(&opts.output_path)?;

    for package in GET_SCHEMA_PACKAGES {
        ctx.add_packages(package, &[package], true)?;
    }

    let mut scripts = IndexMap::new();
    scripts.insert(
        FETCH_SCHEMA_SCRIPT.to_string(),
        fetch_schema_script(&opts.output_path),
    );
    add_scripts(ctx.project_dir, &scripts)?;
    ctx.out.success("Scripts added to package.json");

    let vars = [
        EnvVariable::new(HASURA_GRAPHQL_ENDPOINT_LOCAL, &opts.endpoint),
        EnvVariable::new(HASURA_GRAPHQL_ADMIN_SECRET, ADMIN_SECRET_PLACEHOLDER),
    ];
    let result = create_or_append(
        &ctx.project_dir.join(ENV_EXAMPLE_FILE),
        &vars,
        &EnvFileOptions::with_header("GraphQL Configuration"),
    )?;
    ctx.report_env_file(&result);

    ctx.out.info(&format!(
        "Fetch the schema with `{}`",
        ctx.package_manager.run_script_command(FETCH_SCHEMA_SCRIPT)
    ));
    Ok(())
}

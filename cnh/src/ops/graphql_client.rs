//! GraphQL client setup (Apollo or urql).

use std::fmt;

use clap::ValueEnum;
use cnh_core::{GeneratedFile, ProjectLayout};
use cnh_nuxt_config::{APOLLO_MODULE, ConfigValue, add_apollo_client, add_runtime_config};
use cnh_templates::{
    ApolloClientTs, UrqlPluginTs,
    ast::{JsArray, JsObject},
    env_vars::{HASURA_GRAPHQL_ENDPOINT, RUNTIME_ENDPOINT_KEY},
    files::{DEFAULT_APOLLO_TOKEN, DEFAULT_URQL_TOKEN},
};
use eyre::Result;

use super::{SetupContext, hasura::runtime_config_settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphqlClient {
    Apollo,
    Urql,
}

impl GraphqlClient {
    pub const ALL: [GraphqlClient; 2] = [Self::Apollo, Self::Urql];

    /// Token or cookie name suggested by the prompt.
    pub fn default_token_name(&self) -> &'static str {
        match self {
            Self::Apollo => DEFAULT_APOLLO_TOKEN,
            Self::Urql => DEFAULT_URQL_TOKEN,
        }
    }

    pub fn token_prompt(&self) -> &'static str {
        match self {
            Self::Apollo => "Enter the token name for Apollo (e.g., apollo:myapp.token)",
            Self::Urql => "Enter the cookie name for authentication (e.g., auth-token)",
        }
    }
}

impl fmt::Display for GraphqlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apollo => write!(f, "Apollo"),
            Self::Urql => write!(f, "Urql"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphqlClientOptions {
    pub client: GraphqlClient,
    pub token_name: String,
}

/// Execute the GraphQL client setup.
pub fn graphql_client(ctx: &mut SetupContext, opts: &GraphqlClientOptions) -> Result<()> {
    let layout = ProjectLayout::detect(ctx.project_dir);
    match opts.client {
        GraphqlClient::Apollo => setup_apollo(ctx, &opts.token_name, layout),
        GraphqlClient::Urql => setup_urql(ctx, &opts.token_name, layout),
    }
}

fn setup_apollo(ctx: &mut SetupContext, token_name: &str, layout: ProjectLayout) -> Result<()> {
    ctx.add_packages("Nuxt Apollo", &[APOLLO_MODULE], false)?;

    let file = ApolloClientTs::new(token_name, layout);
    file.write(ctx.project_dir)?;
    ctx.out.success(&format!(
        "Apollo configuration created at {}",
        display_path(&file.dir(), "apollo.ts")
    ));

    let reference = file.config_reference();
    let edit = add_apollo_client(ctx.project_dir, &reference);
    let manual = JsObject::new()
        .array("modules", JsArray::new().string(APOLLO_MODULE))
        .object(
            "apollo",
            JsObject::new().object("clients", JsObject::new().string("default", &reference)),
        );
    ctx.finish_config_edit(edit, manual)
}

fn setup_urql(ctx: &mut SetupContext, token_name: &str, layout: ProjectLayout) -> Result<()> {
    ctx.add_packages("Nuxt Urql", &["@urql/vue", "graphql"], false)?;

    let file = UrqlPluginTs::new(token_name, layout);
    file.write(ctx.project_dir)?;
    ctx.out.success(&format!(
        "Urql configuration created at {}",
        display_path(&file.dir(), "urql.ts")
    ));

    let endpoint_expr = format!("process.env.{}", HASURA_GRAPHQL_ENDPOINT);
    let edit = add_runtime_config(
        ctx.project_dir,
        RUNTIME_ENDPOINT_KEY,
        ConfigValue::raw(&endpoint_expr),
        true,
    );
    ctx.finish_config_edit(edit, runtime_config_settings(&endpoint_expr))?;

    ctx.out
        .success("Urql has been configured with authentication support using useCookie.");
    Ok(())
}

/// `dir/file` with forward slashes, for messages.
fn display_path(dir: &std::path::Path, file: &str) -> String {
    let dir: Vec<String> = dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("{}/{}", dir.join("/"), file)
}

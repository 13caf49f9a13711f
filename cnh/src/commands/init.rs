use clap::Args;
use cnh_core::{PackageManager, ShellRunner};
use eyre::Result;

use super::{
    EndpointArgs, PromptArgs, Session,
    codegen::CodegenArgs,
    get_schema::GetSchemaArgs,
    graphql_client::TokenArgs,
    hasura::HasuraArgs,
};
use crate::{
    ops::{SetupContext, graphql_client::GraphqlClient, init, init::InitOptions},
    reports::TerminalOutput,
};

#[derive(Args)]
pub struct InitCommand {
    /// Name of the Nuxt project
    #[arg(value_name = "PROJECT_NAME")]
    pub name: String,

    /// Package manager to use (npm, yarn, pnpm or bun)
    #[arg(short, long = "package-manager", value_name = "NAME")]
    pub package_manager: Option<PackageManager>,

    /// Skip `git init`
    #[arg(long)]
    pub no_git: bool,

    /// Also set up Hasura
    #[arg(long)]
    pub hasura: bool,

    /// Also add the fetch:schema script
    #[arg(long)]
    pub get_schema: bool,

    /// Also set up GraphQL Codegen
    #[arg(long)]
    pub codegen: bool,

    /// Also set up a GraphQL client
    #[arg(long, value_enum, value_name = "CLIENT")]
    pub graphql_client: Option<GraphqlClient>,

    #[command(flatten)]
    endpoint: EndpointArgs,

    #[command(flatten)]
    hasura_args: HasuraArgs,

    #[command(flatten)]
    schema: GetSchemaArgs,

    #[command(flatten)]
    codegen_args: CodegenArgs,

    #[command(flatten)]
    token: TokenArgs,

    #[command(flatten)]
    prompt: PromptArgs,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let session = Session::start(&self.prompt)?;
        let opts = self.resolve(&session)?;

        let package_manager = session.prompter.select(
            "Select a package manager",
            self.package_manager,
            &PackageManager::ALL,
            PackageManager::DEFAULT,
        )?;

        let runner = ShellRunner;
        let mut out = TerminalOutput::new();
        let mut ctx = SetupContext::new(&runner, &mut out, &session.dir, package_manager);
        init(&mut ctx, &opts)?;
        Ok(())
    }

    /// Collect every answer up front so the flow runs without interruption.
    fn resolve(&self, session: &Session) -> Result<InitOptions> {
        let Session {
            defaults, prompter, ..
        } = session;

        let endpoint = if self.hasura || self.get_schema {
            Some(self.endpoint.resolve(prompter, defaults)?)
        } else {
            None
        };

        let hasura = match (&endpoint, self.hasura) {
            (Some(endpoint), true) => Some(self.hasura_args.resolve(endpoint.clone(), prompter)?),
            _ => None,
        };

        let get_schema = match (&endpoint, self.get_schema) {
            (Some(endpoint), true) => {
                Some(self.schema.resolve(endpoint.clone(), prompter, defaults)?)
            }
            _ => None,
        };

        let codegen = if self.codegen {
            Some(self.codegen_args.resolve(prompter, defaults)?)
        } else {
            None
        };

        let graphql_client = match self.graphql_client {
            Some(client) => Some(self.token.resolve(client, prompter)?),
            None => None,
        };

        Ok(InitOptions {
            project_name: self.name.clone(),
            git: !self.no_git,
            hasura,
            get_schema,
            codegen,
            graphql_client,
        })
    }
}

use clap::Args;
use cnh_core::ShellRunner;
use eyre::{Context, Result};

use super::{PackageManagerArgs, PromptArgs, Session};
use crate::{
    ops::{
        SetupContext, graphql_client,
        graphql_client::{GraphqlClient, GraphqlClientOptions},
    },
    prompt::Prompter,
    reports::TerminalOutput,
};

/// Values prompted by the client setup, apart from the client itself.
#[derive(Args, Debug, Default)]
pub struct TokenArgs {
    /// Apollo token name or urql auth cookie name
    #[arg(long, value_name = "NAME")]
    pub token_name: Option<String>,
}

impl TokenArgs {
    pub fn resolve(&self, client: GraphqlClient, prompter: &Prompter) -> Result<GraphqlClientOptions> {
        Ok(GraphqlClientOptions {
            client,
            token_name: prompter.input(
                client.token_prompt(),
                self.token_name.as_deref(),
                client.default_token_name(),
            )?,
        })
    }
}

#[derive(Args)]
pub struct GraphqlClientCommand {
    /// GraphQL client to set up
    #[arg(long, value_enum)]
    client: Option<GraphqlClient>,

    #[command(flatten)]
    token: TokenArgs,

    #[command(flatten)]
    package_manager: PackageManagerArgs,

    #[command(flatten)]
    prompt: PromptArgs,
}

impl GraphqlClientCommand {
    pub fn run(&self) -> Result<()> {
        let session = Session::start(&self.prompt)?;
        let client = session.prompter.select(
            "Which GraphQL client do you want to use?",
            self.client,
            &GraphqlClient::ALL,
            GraphqlClient::Apollo,
        )?;
        let opts = self.token.resolve(client, &session.prompter)?;

        let runner = ShellRunner;
        let mut out = TerminalOutput::new();
        let mut ctx = SetupContext::new(
            &runner,
            &mut out,
            &session.dir,
            self.package_manager.resolve(&session.dir),
        );
        graphql_client(&mut ctx, &opts).wrap_err("Failed to set up GraphQL client")?;
        Ok(())
    }
}

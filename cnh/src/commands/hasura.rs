use clap::Args;
use cnh_core::ShellRunner;
use eyre::{Context, Result};

use super::{EndpointArgs, PackageManagerArgs, PromptArgs, Session};
use crate::{
    ops::{SetupContext, hasura, hasura::HasuraOptions},
    prompt::Prompter,
    reports::TerminalOutput,
};

/// Values prompted by the Hasura setup, apart from the endpoint.
#[derive(Args, Debug, Default)]
pub struct HasuraArgs {
    /// Hasura admin secret (empty for none)
    #[arg(long, value_name = "SECRET")]
    pub admin_secret: Option<String>,
}

impl HasuraArgs {
    pub fn resolve(&self, endpoint: String, prompter: &Prompter) -> Result<HasuraOptions> {
        Ok(HasuraOptions {
            endpoint,
            admin_secret: prompter.secret(
                "Enter your Hasura admin secret (leave blank if not applicable)",
                self.admin_secret.as_deref(),
            )?,
        })
    }
}

#[derive(Args)]
pub struct HasuraCommand {
    #[command(flatten)]
    endpoint: EndpointArgs,

    #[command(flatten)]
    args: HasuraArgs,

    #[command(flatten)]
    package_manager: PackageManagerArgs,

    #[command(flatten)]
    prompt: PromptArgs,
}

impl HasuraCommand {
    pub fn run(&self) -> Result<()> {
        let session = Session::start(&self.prompt)?;
        cnh_core::ensure_initialized(&session.dir)?;
        let endpoint = self.endpoint.resolve(&session.prompter, &session.defaults)?;
        let opts = self.args.resolve(endpoint, &session.prompter)?;

        let runner = ShellRunner;
        let mut out = TerminalOutput::new();
        let mut ctx = SetupContext::new(
            &runner,
            &mut out,
            &session.dir,
            self.package_manager.resolve(&session.dir),
        );
        hasura(&mut ctx, &opts).wrap_err("Failed to set up GraphQL with Hasura")?;
        Ok(())
    }
}

use clap::Args;
use cnh_core::ShellRunner;
use eyre::{Context, Result};

use super::{EndpointArgs, PackageManagerArgs, PromptArgs, Session};
use crate::{
    defaults::CliDefaults,
    ops::{SetupContext, get_schema, get_schema::GetSchemaOptions},
    prompt::Prompter,
    reports::TerminalOutput,
};

/// Values prompted by the get-schema setup, apart from the endpoint.
#[derive(Args, Debug, Default)]
pub struct GetSchemaArgs {
    /// File the fetch:schema script writes the schema to
    #[arg(long, value_name = "PATH")]
    pub schema_output: Option<String>,
}

impl GetSchemaArgs {
    pub fn resolve(
        &self,
        endpoint: String,
        prompter: &Prompter,
        defaults: &CliDefaults,
    ) -> Result<GetSchemaOptions> {
        Ok(GetSchemaOptions {
            endpoint,
            output_path: prompter.input(
                "Enter the output path for the schema file (e.g., ./schema.graphql)",
                self.schema_output.as_deref(),
                &defaults.default_schema_path,
            )?,
        })
    }
}

#[derive(Args)]
pub struct GetSchemaCommand {
    #[command(flatten)]
    endpoint: EndpointArgs,

    #[command(flatten)]
    args: GetSchemaArgs,

    #[command(flatten)]
    package_manager: PackageManagerArgs,

    #[command(flatten)]
    prompt: PromptArgs,
}

impl GetSchemaCommand {
    pub fn run(&self) -> Result<()> {
        let session = Session::start(&self.prompt)?;
        let endpoint = self.endpoint.resolve(&session.prompter, &session.defaults)?;
        let opts = self
            .args
            .resolve(endpoint, &session.prompter, &session.defaults)?;

        let runner = ShellRunner;
        let mut out = TerminalOutput::new();
        let mut ctx = SetupContext::new(
            &runner,
            &mut out,
            &session.dir,
            self.package_manager.resolve(&session.dir),
        );
        get_schema(&mut ctx, &opts).wrap_err("Failed to set up get-schema")?;
        Ok(())
    }
}

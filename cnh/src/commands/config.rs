use clap::Args;
use eyre::Result;

use super::{PromptArgs, Session};
use crate::{
    defaults::CliDefaults,
    reports::{Output, TerminalOutput},
};

#[derive(Args)]
pub struct ConfigCommand {
    /// Default Hasura GraphQL endpoint
    #[arg(long, value_name = "URL")]
    hasura_endpoint: Option<String>,

    /// Default GraphQL schema path
    #[arg(long, value_name = "PATH")]
    schema_path: Option<String>,

    /// Default output directory for generated types
    #[arg(long, value_name = "DIR")]
    codegen_output_dir: Option<String>,

    #[command(flatten)]
    prompt: PromptArgs,
}

impl ConfigCommand {
    pub fn run(&self) -> Result<()> {
        let session = Session::start(&self.prompt)?;
        let Session {
            dir,
            defaults,
            prompter,
        } = &session;

        let updated = CliDefaults {
            default_hasura_endpoint: prompter.input(
                "Default Hasura GraphQL endpoint",
                self.hasura_endpoint.as_deref(),
                &defaults.default_hasura_endpoint,
            )?,
            default_schema_path: prompter.input(
                "Default GraphQL schema path",
                self.schema_path.as_deref(),
                &defaults.default_schema_path,
            )?,
            default_codegen_output_dir: prompter.input(
                "Default output directory for generated types",
                self.codegen_output_dir.as_deref(),
                &defaults.default_codegen_output_dir,
            )?,
        };

        let path = updated.save(dir)?;

        let mut out = TerminalOutput::new();
        out.success(&format!("Configuration saved to {}", path.display()));
        Ok(())
    }
}

use clap::Args;
use cnh_core::ShellRunner;
use eyre::{Context, Result};

use super::{PackageManagerArgs, PromptArgs, Session};
use crate::{
    defaults::CliDefaults,
    ops::{SetupContext, codegen, codegen::CodegenOptions},
    prompt::Prompter,
    reports::TerminalOutput,
};

/// Values prompted by the codegen setup.
#[derive(Args, Debug, Default)]
pub struct CodegenArgs {
    /// Path or URL of the GraphQL schema
    #[arg(long, value_name = "PATH")]
    pub schema_path: Option<String>,

    /// Output directory for generated types
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,
}

impl CodegenArgs {
    pub fn resolve(&self, prompter: &Prompter, defaults: &CliDefaults) -> Result<CodegenOptions> {
        Ok(CodegenOptions {
            schema_path: prompter.input(
                "Enter the path to your GraphQL schema file (e.g., ./schema.graphql)",
                self.schema_path.as_deref(),
                &defaults.default_schema_path,
            )?,
            output_dir: prompter.input(
                "Enter the output directory for generated types (e.g., ./types/graphql)",
                self.output_dir.as_deref(),
                &defaults.default_codegen_output_dir,
            )?,
        })
    }
}

#[derive(Args)]
pub struct CodegenCommand {
    #[command(flatten)]
    args: CodegenArgs,

    #[command(flatten)]
    package_manager: PackageManagerArgs,

    #[command(flatten)]
    prompt: PromptArgs,
}

impl CodegenCommand {
    pub fn run(&self) -> Result<()> {
        let session = Session::start(&self.prompt)?;
        let opts = self.args.resolve(&session.prompter, &session.defaults)?;

        let runner = ShellRunner;
        let mut out = TerminalOutput::new();
        let mut ctx = SetupContext::new(
            &runner,
            &mut out,
            &session.dir,
            self.package_manager.resolve(&session.dir),
        );
        codegen(&mut ctx, &opts).wrap_err("Failed to set up GraphQL Codegen")?;
        Ok(())
    }
}

//! GraphQL Codegen setup.

use cnh_core::GeneratedFile;
use cnh_templates::files::{CODEGEN_CONFIG, CodegenTs};
use eyre::Result;
use tracing::debug;

use super::SetupContext;

/// Dev dependencies matching the plugins listed in `codegen.ts`.
pub const CODEGEN_PACKAGES: [&str; 5] = [
    "@graphql-codegen/cli",
    "@graphql-codegen/typescript",
    "@graphql-codegen/typescript-operations",
    "@graphql-codegen/typed-document-node",
    "graphql",
];

#[derive(Debug, Clone)]
pub struct CodegenOptions {
    pub schema_path: String,
    pub output_dir: String,
}

/// What the codegen flow did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenOutcome {
    Generated,
    /// The schema file does not exist yet, so no types were generated.
    GenerationSkipped,
}

/// Execute the codegen setup.
pub fn codegen(ctx: &mut SetupContext, opts: &CodegenOptions) -> Result<CodegenOutcome> {
    ctx.add_packages("GraphQL Codegen dependencies", &CODEGEN_PACKAGES, true)?;

    let file = CodegenTs::new(&opts.schema_path, &opts.output_dir);
    file.write(ctx.project_dir)?;
    ctx.out
        .success(&format!("GraphQL Codegen configuration created in {}.", CODEGEN_CONFIG));

    let generate = format!(
        "{} graphql-codegen --config {}",
        ctx.package_manager.exec_command(),
        CODEGEN_CONFIG
    );

    if !schema_available(ctx, &opts.schema_path) {
        debug!(schema = %opts.schema_path, "schema missing, skipping generation");
        ctx.out.info(&format!(
            "Skipping type generation: {} does not exist yet. Run `{}` once it does.",
            opts.schema_path, generate
        ));
        return Ok(CodegenOutcome::GenerationSkipped);
    }

    ctx.run_step(
        "Generating GraphQL types...",
        "GraphQL types generated successfully!",
        &generate,
    )?;
    Ok(CodegenOutcome::Generated)
}

/// Remote schemas are assumed reachable; local ones must exist.
fn schema_available(ctx: &SetupContext, schema: &str) -> bool {
    if schema.starts_with("http://") || schema.starts_with("https://") {
        return true;
    }
    ctx.project_dir.join(schema).exists()
}

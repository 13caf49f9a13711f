mod commands;
mod defaults;
mod ops;
mod prompt;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

/// Crates whose logs `--verbose` raises to debug.
const WORKSPACE_CRATES: [&str; 4] = [
    "create_nuxt_hasura_cli",
    "cnh_core",
    "cnh_nuxt_config",
    "cnh_templates",
];

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut directives = String::from("warn");
        if verbose {
            for krate in WORKSPACE_CRATES {
                directives.push_str(&format!(",{}=debug", krate));
            }
        }
        EnvFilter::new(directives)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

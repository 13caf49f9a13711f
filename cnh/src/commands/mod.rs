mod codegen;
mod completions;
mod config;
mod get_schema;
mod graphql_client;
mod hasura;
mod init;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use cnh_core::PackageManager;
use codegen::CodegenCommand;
use completions::CompletionsCommand;
use config::ConfigCommand;
use eyre::{Context, Result};
use get_schema::GetSchemaCommand;
use graphql_client::GraphqlClientCommand;
use hasura::HasuraCommand;
use init::InitCommand;
use tracing::debug;

use crate::{defaults::CliDefaults, prompt::Prompter};

/// Name the binary is installed under.
pub(crate) const BIN_NAME: &str = "create-nuxt-hasura-cli";

#[derive(Parser)]
#[command(name = "create-nuxt-hasura-cli")]
#[command(version)]
#[command(
    about = "CLI to create Nuxt projects with Hasura, GraphQL Codegen, and Apollo/Urql setup"
)]
pub(crate) struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Hasura(cmd) => cmd.run(),
            Commands::Codegen(cmd) => cmd.run(),
            Commands::GetSchema(cmd) => cmd.run(),
            Commands::GraphqlClient(cmd) => cmd.run(),
            Commands::Config(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Nuxt project with Hasura and GraphQL setup
    Init(InitCommand),

    /// Set up GraphQL with Hasura in the Nuxt project
    Hasura(HasuraCommand),

    /// Integrate GraphQL Codegen into the Nuxt project
    Codegen(CodegenCommand),

    /// Add a script that fetches the GraphQL schema from Hasura
    GetSchema(GetSchemaCommand),

    /// Set up Apollo or Urql as the GraphQL client
    GraphqlClient(GraphqlClientCommand),

    /// Save default answers for the other commands
    Config(ConfigCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags shared by every interactive command.
#[derive(Args, Debug, Default)]
pub(crate) struct PromptArgs {
    /// Accept defaults for everything not given as a flag
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Package manager selection for commands that install packages.
#[derive(Args, Debug, Default)]
pub(crate) struct PackageManagerArgs {
    /// Package manager to use (npm, yarn, pnpm or bun)
    #[arg(short, long = "package-manager", value_name = "NAME")]
    pub package_manager: Option<PackageManager>,
}

impl PackageManagerArgs {
    /// The flag value, otherwise whatever the lockfiles in `dir` indicate.
    pub fn resolve(&self, dir: &Path) -> PackageManager {
        self.package_manager
            .unwrap_or_else(|| PackageManager::detect(dir))
    }
}

/// Hasura endpoint, used by both `hasura` and `get-schema`.
#[derive(Args, Debug, Default)]
pub(crate) struct EndpointArgs {
    /// Hasura GraphQL endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl EndpointArgs {
    pub fn resolve(&self, prompter: &Prompter, defaults: &CliDefaults) -> Result<String> {
        prompter.input(
            "Enter your Hasura GraphQL endpoint",
            self.endpoint.as_deref(),
            &defaults.default_hasura_endpoint,
        )
    }
}

/// Everything a command needs before it can prompt.
pub(crate) struct Session {
    pub dir: PathBuf,
    pub defaults: CliDefaults,
    pub prompter: Prompter,
}

impl Session {
    pub fn start(prompt: &PromptArgs) -> Result<Self> {
        let dir = std::env::current_dir().wrap_err("Failed to get current directory")?;
        debug!(dir = %dir.display(), "working directory");
        Ok(Self {
            defaults: CliDefaults::load(&dir),
            prompter: Prompter::new(prompt.yes),
            dir,
        })
    }
}

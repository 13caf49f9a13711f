//! Core operations.
//!
//! Each setup flow lives here, separated from CLI argument parsing and
//! prompting. Flows take fully resolved options and report progress through
//! an [`Output`].

pub mod codegen;
pub mod get_schema;
pub mod graphql_client;
pub mod hasura;
pub mod init;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use cnh_core::{CommandRunner, EnvFileAction, EnvFileResult, ExecuteOptions, PackageManager};
use cnh_nuxt_config::MutateOutcome;
use cnh_templates::ast::JsObject;
use eyre::Result;
use tracing::warn;

pub use codegen::codegen;
pub use get_schema::get_schema;
pub use graphql_client::graphql_client;
pub use hasura::hasura;
pub use init::init;

use crate::reports::{ManualConfigReport, Output, Report};

/// Everything a flow needs besides its own options.
pub struct SetupContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub out: &'a mut dyn Output,
    /// Directory of the Nuxt project the flow operates on.
    pub project_dir: &'a Path,
    pub package_manager: PackageManager,
}

impl<'a> SetupContext<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        out: &'a mut dyn Output,
        project_dir: &'a Path,
        package_manager: PackageManager,
    ) -> Self {
        Self {
            runner,
            out,
            project_dir,
            package_manager,
        }
    }

    /// A context for another directory sharing this runner and output.
    pub fn at<'b>(&'b mut self, project_dir: &'b Path) -> SetupContext<'b> {
        SetupContext {
            runner: self.runner,
            out: &mut *self.out,
            project_dir,
            package_manager: self.package_manager,
        }
    }

    /// Run `command` in the project directory with its output captured.
    pub fn run_step(&mut self, message: &str, done: &str, command: &str) -> cnh_core::Result<()> {
        let options = ExecuteOptions::new().cwd(self.project_dir).captured();
        self.out.step(message);
        match self.runner.run(command, &options) {
            Ok(()) => {
                self.out.step_succeeded(done);
                Ok(())
            }
            Err(e) => {
                self.out.step_failed(message);
                Err(e)
            }
        }
    }

    /// Add `packages` with the project's package manager.
    pub fn add_packages(&mut self, label: &str, packages: &[&str], dev: bool) -> Result<()> {
        let command = format!(
            "{} {}",
            self.package_manager.add_command(dev),
            packages.join(" ")
        );
        self.run_step(
            &format!("Installing {}...", label),
            &format!("{} installed.", label),
            &command,
        )?;
        Ok(())
    }

    /// Report the result of a Nuxt config edit.
    ///
    /// A missing or unparseable config is not fatal: the user is shown the
    /// settings to add by hand. I/O failures still abort the flow.
    pub fn finish_config_edit(
        &mut self,
        result: cnh_nuxt_config::Result<MutateOutcome>,
        manual: JsObject,
    ) -> Result<()> {
        match result {
            Ok(MutateOutcome::Updated { path }) => {
                self.out.success(&format!("Updated {}", file_name(&path)));
            }
            Ok(MutateOutcome::Unchanged { path }) => {
                self.out
                    .info(&format!("{} is already configured", file_name(&path)));
            }
            Ok(MutateOutcome::NotFound { .. }) => {
                self.out
                    .warning("No nuxt.config.ts, nuxt.config.js or nuxt.config.mjs found.");
                ManualConfigReport::new(manual).render(self.out);
            }
            Err(e) if matches!(*e, cnh_nuxt_config::Error::Io { .. }) => {
                return Err(eyre::Report::new(*e));
            }
            Err(e) => {
                warn!(error = %e, "nuxt config left untouched");
                self.out
                    .warning("Could not update the Nuxt config automatically.");
                self.out
                    .preformatted(&format!("{:?}", miette::Report::new(*e)));
                ManualConfigReport::new(manual).render(self.out);
            }
        }
        Ok(())
    }

    /// Report what happened to a dotenv file.
    pub fn report_env_file(&mut self, result: &EnvFileResult) {
        let name = file_name(&result.path);
        match result.action {
            EnvFileAction::Created => self.out.success(&format!("{} created", name)),
            EnvFileAction::Appended => self.out.success(&format!("{} updated", name)),
            EnvFileAction::Skipped => self
                .out
                .info(&format!("{} already has these variables, skipping", name)),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

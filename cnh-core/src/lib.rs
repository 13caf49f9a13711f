//! Shared building blocks for the create-nuxt-hasura CLI.
//!
//! This crate provides:
//! - Subprocess execution ([`CommandRunner`], [`ShellRunner`])
//! - File writing ([`GeneratedFile`], [`File`], [`FileRules`])
//! - Package manager commands and detection ([`PackageManager`])
//! - Dotenv editing ([`create_or_append`])
//! - `package.json` script editing and Nuxt project detection

// Fields read by thiserror/miette derive macros.
#![allow(unused_assignments)]

mod env_file;
mod error;
mod file;
mod package_json;
mod package_manager;
mod process;
mod project;
mod utils;

// Dotenv files
pub use env_file::{
    EnvFileAction, EnvFileOptions, EnvFileResult, EnvVariable, create_or_append,
};
pub use error::{Error, Result};
// File operations
pub use file::{
    File, FileRules, GeneratedFile, Overwrite, WriteResult, ensure_dir_exists, write_file,
};
// Project files
pub use package_json::{PACKAGE_JSON, add_scripts};
pub use package_manager::PackageManager;
// Subprocesses
pub use process::{CommandRunner, ExecuteOptions, ShellRunner, StdioMode, run};
pub use project::{NUXT_CONFIG_CANDIDATES, ProjectLayout, ensure_initialized, find_nuxt_config};
// String utilities
pub use utils::{is_js_identifier, quote_js, validate_project_name, validate_shell_path};

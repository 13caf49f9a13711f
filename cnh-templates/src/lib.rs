//! Code builders and file templates for create-nuxt-hasura-cli.
//!
//! Every generated source file is assembled from [`ast`] nodes rendered by
//! a [`builder::CodeBuilder`], so user-entered values always pass through
//! string-literal escaping.

pub mod ast;
pub mod builder;
mod code_file;
pub mod env_vars;
pub mod files;

pub use code_file::CodeFile;
pub use files::{ApolloClientTs, CodegenTs, UrqlPluginTs};

//! Templated files written into the generated project.

mod apollo_ts;
mod codegen_ts;
mod urql_plugin;

pub use apollo_ts::{ApolloClientTs, DEFAULT_APOLLO_TOKEN};
pub use codegen_ts::{CODEGEN_CONFIG, CODEGEN_PLUGINS, CodegenTs};
pub use urql_plugin::{DEFAULT_URQL_TOKEN, UrqlPluginTs};

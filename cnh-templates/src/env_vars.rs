//! Environment variable names referenced by generated files.
//!
//! The CLI never reads these; they are written into templates and dotenv
//! files for the generated project to consume at its own runtime.

/// Remote GraphQL endpoint used by the client at runtime.
pub const HASURA_GRAPHQL_ENDPOINT: &str = "NUXT_HASURA_GRAPHQL_ENDPOINT";

/// Local endpoint the schema is fetched from.
pub const HASURA_GRAPHQL_ENDPOINT_LOCAL: &str = "NUXT_HASURA_GRAPHQL_ENDPOINT_LOCAL";

pub const HASURA_GRAPHQL_ADMIN_SECRET: &str = "NUXT_HASURA_GRAPHQL_ADMIN_SECRET";

/// `runtimeConfig.public` key exposing the endpoint to the app.
pub const RUNTIME_ENDPOINT_KEY: &str = "hasuraGraphqlEndpoint";

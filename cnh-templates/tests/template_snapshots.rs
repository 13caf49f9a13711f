//! Snapshot tests for the generated TypeScript files.

use cnh_core::{GeneratedFile, ProjectLayout, WriteResult};
use cnh_templates::{ApolloClientTs, CodegenTs, UrqlPluginTs};
use tempfile::TempDir;

#[test]
fn test_codegen_config() {
    let content = CodegenTs::new("./schema.graphql", "./types/graphql").render();
    insta::assert_snapshot!("codegen_ts", content);
}

#[test]
fn test_apollo_client() {
    let content = ApolloClientTs::new("apollo:app.token", ProjectLayout::Root).render();
    insta::assert_snapshot!("apollo_ts", content);
}

#[test]
fn test_urql_plugin() {
    let content = UrqlPluginTs::new("auth-token", ProjectLayout::App).render();
    insta::assert_snapshot!("urql_plugin_ts", content);
}

#[test]
fn test_write_creates_feature_dir() {
    let temp = TempDir::new().unwrap();
    let plugin = UrqlPluginTs::new("auth-token", ProjectLayout::App);

    let result = plugin.write(temp.path()).unwrap();

    assert_eq!(result, WriteResult::Written);
    let written = std::fs::read_to_string(temp.path().join("app/plugins/urql.ts")).unwrap();
    assert_eq!(written, plugin.render());
}

#[test]
fn test_codegen_overwrites_existing_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("codegen.ts"), "// old").unwrap();

    CodegenTs::new("./schema.graphql", "./gql")
        .write(temp.path())
        .unwrap();

    let written = std::fs::read_to_string(temp.path().join("codegen.ts")).unwrap();
    assert!(written.contains("\"./gql/types.ts\": {"));
}

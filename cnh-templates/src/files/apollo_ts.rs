use std::path::{Path, PathBuf};

use cnh_core::{FileRules, GeneratedFile, Overwrite, ProjectLayout};

use crate::{
    CodeFile,
    ast::{Import, JsObject},
    env_vars::HASURA_GRAPHQL_ENDPOINT,
};

/// Token name offered by the prompt.
pub const DEFAULT_APOLLO_TOKEN: &str = "apollo:app.token";

const FEATURE_DIR: &str = "apollo";
const FILE_NAME: &str = "apollo.ts";

/// Default client config for `@nuxtjs/apollo`, at `<layout>/apollo/apollo.ts`.
pub struct ApolloClientTs {
    pub token_name: String,
    pub layout: ProjectLayout,
}

impl ApolloClientTs {
    pub fn new(token_name: impl Into<String>, layout: ProjectLayout) -> Self {
        Self {
            token_name: token_name.into(),
            layout,
        }
    }

    /// Directory holding the file, relative to the project root.
    pub fn dir(&self) -> PathBuf {
        self.layout.feature_dir(FEATURE_DIR)
    }

    /// Path referenced from `apollo.clients.default` in the Nuxt config.
    pub fn config_reference(&self) -> String {
        self.layout.feature_import_path(FEATURE_DIR, FILE_NAME)
    }
}

impl GeneratedFile for ApolloClientTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.dir()).join(FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::Always,
            create_parents: true,
        }
    }

    fn render(&self) -> String {
        let client = JsObject::new()
            .raw("httpEndpoint", format!("process.env.{}!", HASURA_GRAPHQL_ENDPOINT))
            .string("tokenName", &self.token_name)
            .object(
                "httpLinkOptions",
                JsObject::new().string("credentials", "include"),
            );

        CodeFile::new()
            .import(Import::new("@nuxtjs/apollo/config").named("defineApolloClient"))
            .add(client.to_block("export default defineApolloClient(", ");"))
            .render()
    }
}

use std::path::{Path, PathBuf};

use cnh_core::{FileRules, GeneratedFile, Overwrite, ProjectLayout, quote_js};

use crate::{
    CodeFile,
    ast::{ArrowFn, Import, JsObject},
    builder::CodeFragment,
    env_vars::RUNTIME_ENDPOINT_KEY,
};

/// Cookie name offered by the prompt.
pub const DEFAULT_URQL_TOKEN: &str = "auth-token";

const FEATURE_DIR: &str = "plugins";
const FILE_NAME: &str = "urql.ts";

/// Nuxt plugin providing an urql client that sends the auth cookie as a
/// bearer token.
pub struct UrqlPluginTs {
    pub token_name: String,
    pub layout: ProjectLayout,
}

impl UrqlPluginTs {
    pub fn new(token_name: impl Into<String>, layout: ProjectLayout) -> Self {
        Self {
            token_name: token_name.into(),
            layout,
        }
    }

    pub fn dir(&self) -> PathBuf {
        self.layout.feature_dir(FEATURE_DIR)
    }

    fn fetch_options(&self) -> ArrowFn {
        let headers = JsObject::new().raw(
            "Authorization",
            "token.value ? `Bearer ${token.value}` : ''",
        );
        let response = JsObject::new().single_quoted().object("headers", headers);

        ArrowFn::new("")
            .body_line(format!(
                "const token = useCookie({});",
                quote_js(&self.token_name, '\'')
            ))
            .body_line("")
            .body(response.to_block("return ", ";"))
    }
}

impl GeneratedFile for UrqlPluginTs {
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
            .single_quoted()
            .raw("url", format!("runtimeConfig.public.{}", RUNTIME_ENDPOINT_KEY))
            .arrow_fn("fetchOptions", self.fetch_options());

        let plugin = CodeFragment::block(
            "export default defineNuxtPlugin(() => {",
            vec![
                CodeFragment::line("const runtimeConfig = useRuntimeConfig();"),
                client.to_block("const client = createClient(", ");"),
                CodeFragment::Blank,
                CodeFragment::line("provideClient(client);"),
            ],
            Some("});".to_string()),
        );

        CodeFile::new()
            .import(
                Import::new("@urql/vue")
                    .named("createClient")
                    .named("provideClient")
                    .single_quoted(),
            )
            .add(plugin)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_layout() {
        let root = UrqlPluginTs::new(DEFAULT_URQL_TOKEN, ProjectLayout::Root);
        assert_eq!(root.path(Path::new("/p")), Path::new("/p/plugins/urql.ts"));

        let app = UrqlPluginTs::new(DEFAULT_URQL_TOKEN, ProjectLayout::App);
        assert_eq!(app.path(Path::new("/p")), Path::new("/p/app/plugins/urql.ts"));
    }

    #[test]
    fn test_cookie_name() {
        let content = UrqlPluginTs::new("auth-token", ProjectLayout::Root).render();
        assert!(content.contains("useCookie('auth-token')"));
    }

    #[test]
    fn test_cookie_name_is_escaped() {
        let content = UrqlPluginTs::new("it's", ProjectLayout::Root).render();
        assert!(content.contains(r"useCookie('it\'s')"));
    }
}

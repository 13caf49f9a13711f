use std::path::{Path, PathBuf};

use cnh_core::{FileRules, GeneratedFile};

use crate::{
    CodeFile,
    ast::{Const, Export, Import, JsArray, JsObject},
};

/// File name of the codegen config, at the project root.
pub const CODEGEN_CONFIG: &str = "codegen.ts";

/// Plugins listed under the generated types target.
pub const CODEGEN_PLUGINS: [&str; 3] = ["typescript", "typescript-operations", "typed-document-node"];

/// Glob for the project's GraphQL documents.
const DOCUMENTS_GLOB: &str = "graphql/**/*.{graphql,gql}";

/// The `codegen.ts` config for `graphql-codegen`.
pub struct CodegenTs {
    pub schema_path: String,
    pub output_dir: String,
}

impl CodegenTs {
    pub fn new(schema_path: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            schema_path: schema_path.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Output file the types are generated into, e.g. `./types/graphql/types.ts`.
    pub fn types_path(&self) -> String {
        format!("{}/types.ts", self.output_dir.trim_end_matches('/'))
    }
}

impl GeneratedFile for CodegenTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(CODEGEN_CONFIG)
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let target = JsObject::new().array("plugins", JsArray::from_strings(CODEGEN_PLUGINS));

        let config = JsObject::new()
            .raw("overwrite", "true")
            .string("schema", &self.schema_path)
            .array("documents", JsArray::new().string(DOCUMENTS_GLOB))
            .object("generates", JsObject::new().object(self.types_path(), target));

        CodeFile::new()
            .import(
                Import::new("@graphql-codegen/cli")
                    .named("CodegenConfig")
                    .type_only(),
            )
            .add(Const::new("config", config).ty("CodegenConfig").private())
            .export(Export::new().default("config"))
            .render()
    }
}

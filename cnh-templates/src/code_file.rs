//! Whole TypeScript source files: import block, declarations, export block.

use crate::{
    ast::{Export, Import},
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// A generated `.ts` file.
///
/// Sections are separated by one blank line, and so are consecutive
/// declarations. Empty sections leave no gap behind.
///
/// ```
/// use cnh_templates::{CodeFile, ast::{Export, Import}, builder::CodeFragment};
///
/// let code = CodeFile::new()
///     .import(Import::new("@urql/vue").named("createClient"))
///     .add(CodeFragment::line("const client = createClient({ url: \"/graphql\" });"))
///     .export(Export::new().default("client"))
///     .render();
///
/// assert!(code.ends_with("\n\nexport default client;\n"));
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    declarations: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Append a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, declaration: impl Renderable) -> Self {
        self.declarations.push(declaration.to_fragments());
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.declarations.is_empty() && self.exports.is_empty()
    }

    pub fn render(&self) -> String {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();

        if !self.imports.is_empty() {
            sections.push(self.imports.iter().flat_map(|i| i.to_fragments()).collect());
        }
        for declaration in &self.declarations {
            sections.push(declaration.clone());
        }
        if !self.exports.is_empty() {
            sections.push(self.exports.iter().flat_map(|e| e.to_fragments()).collect());
        }

        let mut builder = CodeBuilder::typescript();
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                builder.emit(&CodeFragment::Blank);
            }
            for fragment in section {
                builder.emit(fragment);
            }
        }
        builder.build()
    }
}

//! TypeScript import builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
    quote: char,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
            quote: '"',
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Quote the module specifier with `'`.
    pub fn single_quoted(mut self) -> Self {
        self.quote = '\'';
        self
    }

    /// Build the import statement without a trailing newline.
    pub fn build(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        let q = self.quote;

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from {q}{}{q};", type_kw, def, self.from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from {q}{}{q};",
                type_kw,
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from {q}{}{q};",
                type_kw,
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import {q}{}{q};", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.build())]
    }
}

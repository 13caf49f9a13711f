//! TypeScript export builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for TypeScript export statements.
#[derive(Debug, Clone)]
pub struct Export {
    default: Option<String>,
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self {
            default: None,
            named: Vec::new(),
        }
    }

    /// Export as default.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Build the export statement; `None` for an empty export.
    pub fn build(&self) -> Option<String> {
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => Some(format!("export default {};", def)),
            (None, false) => Some(format!("export {{ {} }};", self.named.join(", "))),
            (Some(def), false) => Some(format!(
                "export {{ {} as default, {} }};",
                def,
                self.named.join(", ")
            )),
            (None, true) => None,
        }
    }
}

impl Default for Export {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.build().map(CodeFragment::Line).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_default() {
        let e = Export::new().default("config").build();
        assert_eq!(e.as_deref(), Some("export default config;"));
    }

    #[test]
    fn test_export_named() {
        let e = Export::new().named("foo").named("bar").build();
        assert_eq!(e.as_deref(), Some("export { foo, bar };"));
    }

    #[test]
    fn test_export_both() {
        let e = Export::new().default("config").named("schema").build();
        assert_eq!(e.as_deref(), Some("export { config as default, schema };"));
    }

    #[test]
    fn test_empty_export_renders_nothing() {
        assert!(Export::new().to_fragments().is_empty());
    }
}

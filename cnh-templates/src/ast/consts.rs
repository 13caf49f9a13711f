//! TypeScript const declaration builder.

use super::JsObject;
use crate::builder::{CodeFragment, Renderable};

/// Builder for `const` declarations whose value is an object literal.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: JsObject,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: JsObject) -> Self {
        Self {
            name: name.into(),
            value,
            ty: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        let prefix = format!("{}const {}{} = ", export, self.name, type_annotation);
        vec![self.value.to_block(&prefix, ";")]
    }
}

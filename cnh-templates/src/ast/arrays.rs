//! TypeScript/JavaScript array literal builder.

use cnh_core::quote_js;

/// An element in a JavaScript array literal.
#[derive(Debug, Clone)]
pub enum ArrayElement {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
}

/// Builder for single-line array literals.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<ArrayElement>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array from string values (will be quoted).
    pub fn from_strings<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter
                .into_iter()
                .map(|s| ArrayElement::String(s.into()))
                .collect(),
        }
    }

    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::String(value.into()));
        self
    }

    pub fn raw(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::Raw(value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render with `quote` around string elements.
    pub fn render(&self, quote: char) -> String {
        let elements = self
            .elements
            .iter()
            .map(|e| match e {
                ArrayElement::String(s) => quote_js(s, quote),
                ArrayElement::Raw(s) => s.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("[{}]", elements)
    }

    /// Build the array literal with double quotes.
    pub fn build(&self) -> String {
        self.render('"')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array() {
        assert_eq!(JsArray::new().build(), "[]");
    }

    #[test]
    fn test_string_array() {
        let arr = JsArray::from_strings(["typescript", "typescript-operations"]).build();
        assert_eq!(arr, "[\"typescript\", \"typescript-operations\"]");
    }

    #[test]
    fn test_single_quoted() {
        let arr = JsArray::new().string("a").raw("b").render('\'');
        assert_eq!(arr, "['a', b]");
    }

    #[test]
    fn test_escaping() {
        let arr = JsArray::new().string("say \"hi\"").build();
        assert_eq!(arr, r#"["say \"hi\""]"#);
    }
}

//! Object literals, the shape of every generated config.

use cnh_core::{is_js_identifier, quote_js};

use super::arrays::JsArray;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

#[derive(Debug, Clone)]
enum Value {
    /// Emitted as an escaped string literal.
    String(String),
    /// Emitted verbatim, e.g. `process.env.X` or `true`.
    Raw(String),
    Object(JsObject),
    ArrowFn(ArrowFn),
    Array(JsArray),
}

/// `(params) => { ... }` as a property value.
#[derive(Debug, Clone)]
pub struct ArrowFn {
    params: String,
    body: Vec<CodeFragment>,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            body: Vec::new(),
        }
    }

    /// Append a statement. An empty line becomes a blank separator.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        let line = line.into();
        self.body.push(if line.is_empty() {
            CodeFragment::Blank
        } else {
            CodeFragment::Line(line)
        });
        self
    }

    /// Append a nested fragment, e.g. a `return { ... };` block.
    pub fn body(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn header(&self, key: &str) -> String {
        format!("{}: ({}) => {{", key, self.params)
    }
}

/// An object literal, one property per line with trailing commas.
///
/// String values and non-identifier keys are escaped with the object's
/// quote character, which nested objects and arrays inherit.
#[derive(Debug, Clone)]
pub struct JsObject {
    entries: Vec<(String, Value)>,
    quote: char,
}

impl Default for JsObject {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            quote: '"',
        }
    }
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `'` instead of `"` for string literals.
    pub fn single_quoted(mut self) -> Self {
        self.quote = '\'';
        self
    }

    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entry(key, Value::String(value.into()))
    }

    pub fn raw(self, key: impl Into<String>, expr: impl Into<String>) -> Self {
        self.entry(key, Value::Raw(expr.into()))
    }

    pub fn object(self, key: impl Into<String>, value: JsObject) -> Self {
        self.entry(key, Value::Object(value))
    }

    pub fn arrow_fn(self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.entry(key, Value::ArrowFn(value))
    }

    pub fn array(self, key: impl Into<String>, value: JsArray) -> Self {
        self.entry(key, Value::Array(value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a block opened by `prefix{` and closed by `}suffix`.
    ///
    /// `JsObject::new().raw("a", "1").to_block("const x = ", ";")` yields
    /// a `const x = {` header, the properties, and `};`.
    pub fn to_block(&self, prefix: &str, suffix: &str) -> CodeFragment {
        if self.entries.is_empty() {
            return CodeFragment::Line(format!("{}{{}}{}", prefix, suffix));
        }
        CodeFragment::Block {
            header: format!("{}{{", prefix),
            body: self.entry_lines(self.quote),
            close: Some(format!("}}{}", suffix)),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.push((key.into(), value));
        self
    }

    fn entry_lines(&self, quote: char) -> Vec<CodeFragment> {
        self.entries
            .iter()
            .map(|(key, value)| {
                let key = render_key(key, quote);
                match value {
                    Value::String(s) => {
                        CodeFragment::Line(format!("{}: {},", key, quote_js(s, quote)))
                    }
                    Value::Raw(expr) => CodeFragment::Line(format!("{}: {},", key, expr)),
                    Value::Object(obj) if obj.is_empty() => {
                        CodeFragment::Line(format!("{}: {{}},", key))
                    }
                    Value::Object(obj) => CodeFragment::Block {
                        header: format!("{}: {{", key),
                        body: obj.entry_lines(quote),
                        close: Some("},".to_string()),
                    },
                    Value::ArrowFn(func) => CodeFragment::Block {
                        header: func.header(&key),
                        body: func.body.clone(),
                        close: Some("},".to_string()),
                    },
                    Value::Array(arr) => {
                        CodeFragment::Line(format!("{}: {},", key, arr.render(quote)))
                    }
                }
            })
            .collect()
    }
}

fn render_key(key: &str, quote: char) -> String {
    if is_js_identifier(key) {
        key.to_string()
    } else {
        quote_js(key, quote)
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.entries.is_empty() {
            return vec![CodeFragment::raw("{}")];
        }
        vec![self.to_block("", "")]
    }
}

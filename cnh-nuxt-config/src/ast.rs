//! Lossless view of the parts of a config module that can be edited.
//!
//! Only object and array literals are modelled. Anything else is kept as an
//! opaque expression span so the original text survives untouched.

use miette::SourceSpan;

/// Byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.end]
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end - span.start).into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLit {
    /// From `{` through `}` inclusive.
    pub span: Span,
    pub properties: Vec<Property>,
}

impl ObjectLit {
    /// The last property named `key`, which is the one JS would use.
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties
            .iter()
            .rev()
            .find(|p| matches!(&p.key, PropertyKey::Named(name) if name == key))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: PropertyKey,
    /// From the first token of the key through the end of the value.
    pub span: Span,
    pub value: Value,
    /// Offset of the `,` following the property, if any.
    pub comma: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    Named(String),
    Computed,
    Spread,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLit {
    pub span: Span,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub value: Value,
    pub comma: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Object(ObjectLit),
    Array(ArrayLit),
    String { value: String, span: Span },
    /// Any other expression, kept verbatim.
    Expr(Span),
}

impl Value {
    pub fn span(&self) -> Span {
        match self {
            Value::Object(obj) => obj.span,
            Value::Array(arr) => arr.span,
            Value::String { span, .. } | Value::Expr(span) => *span,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectLit> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayLit> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

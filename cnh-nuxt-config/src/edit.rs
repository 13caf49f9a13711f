//! Formatting-preserving edits of a Nuxt config module.
//!
//! Every edit is expressed as text splices on spans of the parsed source, so
//! comments, quoting and blank lines outside the touched ranges keep their
//! bytes. The file is re-parsed after each edit.

use std::path::{Path, PathBuf};

use cnh_core::{is_js_identifier, quote_js};
use tracing::debug;

use crate::{
    Error, Result,
    ast::{ObjectLit, Span, Value},
    error::SourceContext,
    parse::{ParsedConfig, parse},
};

/// A value to write into the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Emitted as a quoted, escaped string literal.
    String(String),
    /// Emitted verbatim, e.g. `process.env.API_URL`.
    Raw(String),
    Object(Vec<(String, ConfigValue)>),
    Array(Vec<ConfigValue>),
}

impl ConfigValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    fn is_scalar(&self) -> bool {
        matches!(self, Self::String(_) | Self::Raw(_))
    }

    /// Render at the block `indent`, or on one line when `indent` is `None`.
    fn render(&self, indent: Option<&str>, style: &Style) -> String {
        match (self, indent) {
            (Self::String(value), _) => quote_js(value, style.quote),
            (Self::Raw(expr), _) => expr.clone(),
            (Self::Object(entries), _) if entries.is_empty() => "{}".to_string(),
            (Self::Object(entries), None) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| {
                        format!("{}: {}", render_key(key, style.quote), value.render(None, style))
                    })
                    .collect();
                format!("{{ {} }}", entries.join(", "))
            }
            (Self::Object(entries), Some(indent)) => {
                let inner = format!("{}{}", indent, style.indent_unit);
                let lines = entries.iter().map(|(key, value)| {
                    format!(
                        "{}{}: {}",
                        inner,
                        render_key(key, style.quote),
                        value.render(Some(&inner), style)
                    )
                });
                style.block('{', '}', lines, indent)
            }
            (Self::Array(items), Some(indent)) if !items.iter().all(Self::is_scalar) => {
                let inner = format!("{}{}", indent, style.indent_unit);
                let lines = items
                    .iter()
                    .map(|item| format!("{}{}", inner, item.render(Some(&inner), style)));
                style.block('[', ']', lines, indent)
            }
            (Self::Array(items), _) => {
                let items: Vec<String> = items.iter().map(|i| i.render(None, style)).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

fn render_key(key: &str, quote: char) -> String {
    if is_js_identifier(key) {
        key.to_string()
    } else {
        quote_js(key, quote)
    }
}

/// Formatting conventions detected from the original file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Style {
    indent_unit: String,
    quote: char,
    trailing_commas: bool,
    newline: &'static str,
}

impl Style {
    fn detect(src: &str, parsed: &ParsedConfig) -> Self {
        Self {
            indent_unit: detect_indent_unit(src),
            quote: parsed.first_quote.unwrap_or('\''),
            trailing_commas: parsed
                .root
                .properties
                .last()
                .is_some_and(|p| p.comma.is_some()),
            newline: if src.contains("\r\n") { "\r\n" } else { "\n" },
        }
    }

    fn block(
        &self,
        open: char,
        close: char,
        lines: impl Iterator<Item = String>,
        indent: &str,
    ) -> String {
        let lines: Vec<String> = lines.collect();
        let mut out = String::new();
        out.push(open);
        out.push_str(self.newline);
        for (i, line) in lines.iter().enumerate() {
            out.push_str(line);
            if i + 1 < lines.len() || self.trailing_commas {
                out.push(',');
            }
            out.push_str(self.newline);
        }
        out.push_str(indent);
        out.push(close);
        out
    }
}

fn detect_indent_unit(src: &str) -> String {
    let mut smallest: Option<usize> = None;
    for line in src.lines() {
        let content = line.trim_start_matches([' ', '\t']);
        // Skip blank lines and block comment continuations.
        if content.is_empty() || content.starts_with('*') {
            continue;
        }
        let leading = &line[..line.len() - content.len()];
        if leading.starts_with('\t') {
            return "\t".to_string();
        }
        if !leading.is_empty() {
            smallest = Some(smallest.map_or(leading.len(), |s| s.min(leading.len())));
        }
    }
    " ".repeat(smallest.unwrap_or(2))
}

/// Leading whitespace of the line containing `pos`.
fn line_indent(src: &str, pos: usize) -> &str {
    let start = src[..pos].rfind('\n').map_or(0, |i| i + 1);
    let rest = &src[start..];
    let len = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    &rest[..len]
}

/// Offset of the line terminator of the line containing `pos`.
fn line_end(src: &str, pos: usize) -> usize {
    match src[pos..].find('\n') {
        Some(offset) => {
            let end = pos + offset;
            if end > pos && src.as_bytes()[end - 1] == b'\r' {
                end - 1
            } else {
                end
            }
        }
        None => src.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Splice {
    start: usize,
    end: usize,
    text: String,
}

impl Splice {
    fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    fn replace(span: Span, text: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            text: text.into(),
        }
    }
}

/// The last entry of an object or array literal.
#[derive(Debug, Clone, Copy)]
struct LastEntry {
    span: Span,
    comma: Option<usize>,
}

/// A parsed `nuxt.config.*` file with its pending edits.
pub struct NuxtConfig {
    path: PathBuf,
    original: String,
    source: String,
    parsed: ParsedConfig,
    style: Style,
}

impl NuxtConfig {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(source, path)
    }

    /// Parse `source`; `path` is used for diagnostics and by [`save`].
    ///
    /// [`save`]: NuxtConfig::save
    pub fn parse(source: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let path = path.into();
        let filename = path.display().to_string();
        let parsed = parse(&source)
            .map_err(|e| SourceContext::new(&source, &filename).parse_error(e.message, e.span))?;
        debug!(
            path = %filename,
            factory = parsed.factory.as_deref(),
            properties = parsed.root.properties.len(),
            "parsed nuxt config"
        );

        Ok(Self {
            style: Style::detect(&source, &parsed),
            path,
            original: source.clone(),
            source,
            parsed,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current text, including edits.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether any edit changed the text.
    pub fn is_modified(&self) -> bool {
        self.source != self.original
    }

    /// Name of the factory wrapping the settings object, e.g. `defineNuxtConfig`.
    pub fn factory(&self) -> Option<&str> {
        self.parsed.factory.as_deref()
    }

    /// Write the current text back to the file it was opened from.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, &self.source).map_err(|e| Error::io(&self.path, e))
    }

    /// String entries of the `modules` array.
    pub fn modules(&self) -> Vec<String> {
        self.parsed
            .root
            .property("modules")
            .and_then(|p| p.value.as_array())
            .map(|arr| {
                arr.elements
                    .iter()
                    .filter_map(|e| e.value.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Look up a dot-separated path such as `runtimeConfig.public.apiBase`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut object = &self.parsed.root;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let property = object.property(segment)?;
            if segments.peek().is_none() {
                return Some(&property.value);
            }
            object = property.value.as_object()?;
        }
        None
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Add `name` to the `modules` array unless it is already listed.
    ///
    /// Returns whether the config changed.
    pub fn add_module(&mut self, name: &str) -> Result<bool> {
        let root = &self.parsed.root;
        let splices = match root.property("modules") {
            Some(property) => {
                let Some(array) = property.value.as_array() else {
                    return Err(self
                        .context()
                        .unsupported("`modules` is not an array literal", property.value.span()));
                };
                if array.elements.iter().any(|e| e.value.as_str() == Some(name)) {
                    debug!(module = name, "module already registered");
                    return Ok(false);
                }
                let last = array.elements.last().map(|e| LastEntry {
                    span: e.value.span(),
                    comma: e.comma,
                });
                let literal = quote_js(name, self.style.quote);
                self.append_entry(array.span, last, false, |_| literal.clone())
            }
            None => {
                let modules = ConfigValue::Array(vec![ConfigValue::string(name)]);
                self.append_property(root, "modules", &modules, true)
            }
        };

        self.apply(splices)?;
        debug!(module = name, "registered module");
        Ok(true)
    }

    /// Set the value at a dot-separated path, creating missing objects.
    ///
    /// An existing value is replaced. Every intermediate segment that exists
    /// must be an object literal.
    pub fn set(&mut self, path: &str, value: ConfigValue) -> Result<()> {
        let segments: Vec<&str> = path.split('.').collect();
        let mut object = &self.parsed.root;
        let mut splices = Vec::new();

        for (i, segment) in segments.iter().enumerate() {
            let is_last = i + 1 == segments.len();
            match object.property(segment) {
                Some(property) if is_last => {
                    let indent = self
                        .is_multiline(object.span)
                        .then(|| line_indent(&self.source, property.span.start));
                    let text = value.render(indent, &self.style);
                    splices.push(Splice::replace(property.value.span(), text));
                }
                Some(property) => match &property.value {
                    Value::Object(inner) => object = inner,
                    other => {
                        return Err(self.context().unsupported(
                            format!("`{}` is not an object literal", segments[..=i].join(".")),
                            other.span(),
                        ));
                    }
                },
                None => {
                    let nested = segments[i + 1..].iter().rev().fold(value.clone(), |acc, key| {
                        ConfigValue::Object(vec![(key.to_string(), acc)])
                    });
                    splices = self.append_property(object, segment, &nested, i == 0);
                    break;
                }
            }
        }

        self.apply(splices)?;
        debug!(path, "set config value");
        Ok(())
    }

    /// [`set`](NuxtConfig::set) only when nothing exists at `path`.
    ///
    /// Returns whether the value was written.
    pub fn set_if_absent(&mut self, path: &str, value: ConfigValue) -> Result<bool> {
        if self.get(path).is_some() {
            return Ok(false);
        }
        self.set(path, value)?;
        Ok(true)
    }

    fn is_multiline(&self, span: Span) -> bool {
        span.text(&self.source).contains('\n')
    }

    fn context(&self) -> SourceContext<'_> {
        SourceContext::new(&self.source, self.path.to_str().unwrap_or("nuxt.config"))
    }

    fn append_property(
        &self,
        object: &ObjectLit,
        key: &str,
        value: &ConfigValue,
        is_root: bool,
    ) -> Vec<Splice> {
        let last = object.properties.last().map(|p| LastEntry {
            span: p.span,
            comma: p.comma,
        });
        let key = render_key(key, self.style.quote);
        self.append_entry(object.span, last, is_root, |indent| {
            format!("{}: {}", key, value.render(indent, &self.style))
        })
    }

    /// Splices that add an entry after the last one of the `{}` or `[]`
    /// literal at `span`, following its layout.
    fn append_entry(
        &self,
        span: Span,
        last: Option<LastEntry>,
        force_multiline: bool,
        entry: impl Fn(Option<&str>) -> String,
    ) -> Vec<Splice> {
        let src = &self.source;
        let newline = self.style.newline;
        let open = span.start;
        let close = span.end - 1;
        let multiline = self.is_multiline(span);

        let Some(last) = last else {
            let interior = Span::new(open + 1, close);
            if multiline || force_multiline {
                let outer = line_indent(src, open);
                let inner = format!("{}{}", outer, self.style.indent_unit);
                let comma = if self.style.trailing_commas { "," } else { "" };
                let text = format!(
                    "{newline}{inner}{}{comma}{newline}{outer}",
                    entry(Some(&inner))
                );
                return vec![Splice::replace(interior, text)];
            }
            let text = if src[open..].starts_with('{') {
                format!(" {} ", entry(None))
            } else {
                entry(None)
            };
            return vec![Splice::replace(interior, text)];
        };

        if !multiline {
            return match last.comma {
                Some(comma) => vec![Splice::insert(comma + 1, format!(" {}", entry(None)))],
                None => vec![Splice::insert(last.span.end, format!(", {}", entry(None)))],
            };
        }

        let indent = line_indent(src, last.span.start);
        let after = last.comma.map_or(last.span.end, |c| c + 1);
        let eol = line_end(src, after);
        let rest = src[after..eol].trim();
        // Keep a trailing line comment attached to the previous entry.
        let anchor = if rest.is_empty() || rest.starts_with("//") {
            eol
        } else {
            after
        };
        let trailing = if last.comma.is_some() { "," } else { "" };

        let mut splices = vec![Splice::insert(
            anchor,
            format!("{newline}{indent}{}{trailing}", entry(Some(indent))),
        )];
        if last.comma.is_none() {
            splices.push(Splice::insert(last.span.end, ","));
        }
        splices
    }

    fn apply(&mut self, mut splices: Vec<Splice>) -> Result<()> {
        if splices.is_empty() {
            return Ok(());
        }
        // Stable sort: splices at the same offset are applied in reverse text order.
        splices.sort_by(|a, b| b.start.cmp(&a.start));

        let mut source = self.source.clone();
        for splice in &splices {
            source.replace_range(splice.start..splice.end, &splice.text);
        }

        let filename = self.path.display().to_string();
        let parsed = parse(&source)
            .map_err(|e| SourceContext::new(&source, &filename).parse_error(e.message, e.span))?;
        self.source = source;
        self.parsed = parsed;
        Ok(())
    }
}

//! Locates the exported config object in a tree-sitter TypeScript tree and
//! converts it into [`ast`] nodes.
//!
//! The grammar is a superset of the JavaScript that `.js` and `.mjs` configs
//! use, so every variant goes through the same parser.
//!
//! [`ast`]: crate::ast

use tree_sitter::{Node, Parser, Tree};

use crate::ast::{ArrayLit, Element, ObjectLit, Property, PropertyKey, Span, Value};

/// The exported settings object of a config module.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedConfig {
    pub root: ObjectLit,
    /// Factory the object is passed to, e.g. `defineNuxtConfig`.
    pub factory: Option<String>,
    /// Quote character of the first string literal in the file.
    pub first_quote: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SyntaxError {
    pub message: String,
    pub span: Option<Span>,
}

impl SyntaxError {
    fn new(message: impl Into<String>, span: Option<Span>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    fn at(message: impl Into<String>, node: Node) -> Self {
        Self::new(message, Some(span(node)))
    }
}

pub(crate) fn parse(src: &str) -> Result<ParsedConfig, SyntaxError> {
    let tree = parse_tree(src)?;
    let program = tree.root_node();
    if let Some(node) = first_error(program) {
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            "unexpected syntax".to_string()
        };
        return Err(SyntaxError::at(message, node));
    }

    let reader = Reader { src, program };
    let export = reader.find_export()?;
    let (root, factory) = reader.exported_object(export, true)?;

    Ok(ParsedConfig {
        root,
        factory,
        first_quote: first_quote(program, src),
    })
}

fn parse_tree(src: &str) -> Result<Tree, SyntaxError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|e| {
            SyntaxError::new(format!("failed to load the TypeScript grammar: {}", e), None)
        })?;
    parser
        .parse(src, None)
        .ok_or_else(|| SyntaxError::new("the parser produced no syntax tree", None))
}

fn span(node: Node) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// All children, comments included.
fn children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

/// Named children without comments.
fn named(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

/// The first error or missing node in document order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    children(node).into_iter().find_map(first_error)
}

fn first_quote(node: Node, src: &str) -> Option<char> {
    if node.kind() == "string" {
        return src[node.byte_range()].chars().next();
    }
    children(node)
        .into_iter()
        .find_map(|child| first_quote(child, src))
}

struct Reader<'t> {
    src: &'t str,
    program: Node<'t>,
}

impl<'t> Reader<'t> {
    fn text(&self, node: Node) -> &'t str {
        let src: &'t str = self.src;
        &src[node.byte_range()]
    }

    /// The expression after `export default` or `module.exports =`.
    fn find_export(&self) -> Result<Node<'t>, SyntaxError> {
        for statement in named(self.program) {
            match statement.kind() {
                "export_statement" => {
                    let is_default = children(statement).iter().any(|c| c.kind() == "default");
                    let value = statement.child_by_field_name("value");
                    if let Some(value) = value.filter(|_| is_default) {
                        return Ok(value);
                    }
                }
                "expression_statement" => {
                    let Some(assignment) = named(statement)
                        .into_iter()
                        .find(|n| n.kind() == "assignment_expression")
                    else {
                        continue;
                    };
                    let target = assignment.child_by_field_name("left");
                    if target.is_some_and(|left| self.text(left) == "module.exports") {
                        if let Some(right) = assignment.child_by_field_name("right") {
                            return Ok(right);
                        }
                    }
                }
                _ => {}
            }
        }
        Err(SyntaxError::new("no default export found", None))
    }

    /// Parse `{...}`, `factory({...})`, or an identifier bound to either.
    fn exported_object(
        &self,
        node: Node<'t>,
        resolve_idents: bool,
    ) -> Result<(ObjectLit, Option<String>), SyntaxError> {
        match node.kind() {
            "object" => Ok((self.object(node)?, None)),
            // `({...})`, `{...} satisfies NuxtConfig` and `{...} as NuxtConfig`
            "parenthesized_expression" | "satisfies_expression" | "as_expression" => {
                match named(node).first() {
                    Some(inner) => self.exported_object(*inner, resolve_idents),
                    None => Err(SyntaxError::at("expected an object literal", node)),
                }
            }
            "call_expression" => self.factory_call(node, resolve_idents),
            "identifier" if resolve_idents => {
                let init = self.find_binding(node)?;
                self.exported_object(init, false)
            }
            _ if resolve_idents => Err(SyntaxError::at(
                "expected an object literal or a config factory call",
                node,
            )),
            _ => Err(SyntaxError::at("expected an object literal", node)),
        }
    }

    fn factory_call(
        &self,
        call: Node<'t>,
        resolve_idents: bool,
    ) -> Result<(ObjectLit, Option<String>), SyntaxError> {
        let function = call
            .child_by_field_name("function")
            .filter(|f| f.kind() == "identifier")
            .ok_or_else(|| {
                SyntaxError::at("expected a config factory such as `defineNuxtConfig`", call)
            })?;
        let name = self.text(function).to_string();

        let arguments = call
            .child_by_field_name("arguments")
            .map(named)
            .unwrap_or_default();
        let [argument] = arguments.as_slice() else {
            return Err(SyntaxError::at(
                format!("expected a single object argument to `{}`", name),
                call,
            ));
        };

        let object = match argument.kind() {
            "object" => self.object(*argument)?,
            "identifier" if resolve_idents => {
                let init = self.find_binding(*argument)?;
                self.exported_object(init, false)?.0
            }
            _ => {
                return Err(SyntaxError::at(
                    format!("expected an object literal as the argument of `{}`", name),
                    *argument,
                ));
            }
        };
        Ok((object, Some(name)))
    }

    /// Initializer of the top-level `const`, `let` or `var` named by `ident`.
    fn find_binding(&self, ident: Node<'t>) -> Result<Node<'t>, SyntaxError> {
        let name = self.text(ident);
        for statement in named(self.program) {
            let declaration = match statement.kind() {
                "lexical_declaration" | "variable_declaration" => statement,
                "export_statement" => match statement.child_by_field_name("declaration") {
                    Some(declaration) => declaration,
                    None => continue,
                },
                _ => continue,
            };
            for declarator in named(declaration) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }
                let declares = declarator
                    .child_by_field_name("name")
                    .is_some_and(|n| self.text(n) == name);
                if !declares {
                    continue;
                }
                return declarator.child_by_field_name("value").ok_or_else(|| {
                    SyntaxError::at("config binding has no initializer", declarator)
                });
            }
        }
        Err(SyntaxError::at(
            format!("`{}` is not declared at the top level of the file", name),
            ident,
        ))
    }

    fn object(&self, node: Node<'t>) -> Result<ObjectLit, SyntaxError> {
        let mut properties: Vec<Property> = Vec::new();
        for child in children(node) {
            match child.kind() {
                "{" | "}" | "comment" => {}
                "," => {
                    if let Some(last) = properties.last_mut() {
                        last.comma = Some(child.start_byte());
                    }
                }
                _ => properties.push(self.property(child)?),
            }
        }
        Ok(ObjectLit {
            span: span(node),
            properties,
        })
    }

    fn property(&self, node: Node<'t>) -> Result<Property, SyntaxError> {
        let (key, value) = match node.kind() {
            "pair" => {
                let key = node
                    .child_by_field_name("key")
                    .ok_or_else(|| SyntaxError::at("expected a property key", node))?;
                let value = node
                    .child_by_field_name("value")
                    .ok_or_else(|| SyntaxError::at("expected a property value", node))?;
                (self.key(key)?, self.value(value)?)
            }
            "method_definition" => {
                let key = node
                    .child_by_field_name("name")
                    .ok_or_else(|| SyntaxError::at("expected a method name", node))?;
                (self.key(key)?, Value::Expr(span(node)))
            }
            "shorthand_property_identifier" => (
                PropertyKey::Named(self.text(node).to_string()),
                Value::Expr(span(node)),
            ),
            "spread_element" => (PropertyKey::Spread, Value::Expr(span(node))),
            other => {
                return Err(SyntaxError::at(
                    format!("unexpected `{}` in object literal", other),
                    node,
                ));
            }
        };
        Ok(Property {
            key,
            span: span(node),
            value,
            comma: None,
        })
    }

    fn key(&self, node: Node<'t>) -> Result<PropertyKey, SyntaxError> {
        match node.kind() {
            "property_identifier" | "number" => {
                Ok(PropertyKey::Named(self.text(node).to_string()))
            }
            "string" => Ok(PropertyKey::Named(self.string(node))),
            "computed_property_name" => Ok(PropertyKey::Computed),
            _ => Err(SyntaxError::at("expected a property key", node)),
        }
    }

    fn value(&self, node: Node<'t>) -> Result<Value, SyntaxError> {
        Ok(match node.kind() {
            "object" => Value::Object(self.object(node)?),
            "array" => Value::Array(self.array(node)?),
            "string" => Value::String {
                value: self.string(node),
                span: span(node),
            },
            // `{ ... } as const`, `'a' + b` and the like stay opaque.
            _ => Value::Expr(span(node)),
        })
    }

    fn array(&self, node: Node<'t>) -> Result<ArrayLit, SyntaxError> {
        let mut elements: Vec<Element> = Vec::new();
        for child in children(node) {
            match child.kind() {
                "[" | "]" | "comment" => {}
                "," => match elements.last_mut() {
                    Some(last) if last.comma.is_none() => last.comma = Some(child.start_byte()),
                    _ => return Err(SyntaxError::at("array holes are not supported", child)),
                },
                _ => {
                    if elements.last().is_some_and(|e| e.comma.is_none()) {
                        return Err(SyntaxError::at("missing `,`", child));
                    }
                    elements.push(Element {
                        value: self.value(child)?,
                        comma: None,
                    });
                }
            }
        }
        Ok(ArrayLit {
            span: span(node),
            elements,
        })
    }

    /// Decoded contents of a string literal.
    fn string(&self, node: Node<'t>) -> String {
        let mut out = String::new();
        for part in children(node) {
            match part.kind() {
                "string_fragment" => out.push_str(self.text(part)),
                "escape_sequence" => push_escape(&mut out, self.text(part)),
                _ => {}
            }
        }
        out
    }
}

fn push_escape(out: &mut String, escape: &str) {
    let body = escape.strip_prefix('\\').unwrap_or(escape);
    let decoded = match body.chars().next() {
        // Line continuation.
        None | Some('\n' | '\r' | '\u{2028}' | '\u{2029}') => return,
        Some('n') => Some('\n'),
        Some('r') => Some('\r'),
        Some('t') => Some('\t'),
        Some('b') => Some('\u{8}'),
        Some('f') => Some('\u{c}'),
        Some('v') => Some('\u{b}'),
        Some('0') if body.len() == 1 => Some('\0'),
        Some('x') => u32::from_str_radix(&body[1..], 16).ok().and_then(char::from_u32),
        Some('u') => {
            let hex = body[1..].trim_start_matches('{').trim_end_matches('}');
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        }
        Some(other) => Some(other),
    };
    match decoded {
        Some(c) => out.push(c),
        None => out.push_str(escape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(src: &str) -> ObjectLit {
        parse(src).unwrap().root
    }

    fn keys(obj: &ObjectLit) -> Vec<PropertyKey> {
        obj.properties.iter().map(|p| p.key.clone()).collect()
    }

    fn named_key(name: &str) -> PropertyKey {
        PropertyKey::Named(name.to_string())
    }

    #[test]
    fn test_factory_call() {
        let src = "export default defineNuxtConfig({\n  devtools: { enabled: true }\n})\n";
        let parsed = parse(src).unwrap();
        assert_eq!(parsed.factory.as_deref(), Some("defineNuxtConfig"));
        assert_eq!(keys(&parsed.root), [named_key("devtools")]);
        let devtools = parsed.root.property("devtools").unwrap();
        let inner = devtools.value.as_object().unwrap();
        assert_eq!(inner.property("enabled").unwrap().value.span().text(src), "true");
    }

    #[test]
    fn test_plain_object_and_module_exports() {
        assert_eq!(keys(&root("export default { ssr: false }")), [named_key("ssr")]);
        assert_eq!(keys(&root("module.exports = { ssr: false };")), [named_key("ssr")]);
        assert_eq!(
            keys(&root("export default { ssr: false } satisfies NuxtConfig")),
            [named_key("ssr")]
        );
    }

    #[test]
    fn test_exported_identifier_is_resolved() {
        let src = "import type { NuxtConfig } from 'nuxt/schema'\n\
                   const config: NuxtConfig = defineNuxtConfig({ app: {} })\n\
                   export default config\n";
        let parsed = parse(src).unwrap();
        assert_eq!(parsed.factory.as_deref(), Some("defineNuxtConfig"));
        assert_eq!(keys(&parsed.root), [named_key("app")]);
        assert_eq!(parsed.first_quote, Some('\''));
    }

    #[test]
    fn test_factory_argument_is_resolved() {
        let src = "const options = { ssr: true }\nexport default defineNuxtConfig(options)\n";
        let parsed = parse(src).unwrap();
        assert_eq!(parsed.factory.as_deref(), Some("defineNuxtConfig"));
        assert_eq!(keys(&parsed.root), [named_key("ssr")]);
    }

    #[test]
    fn test_property_shapes() {
        let src = r#"export default {
  'quoted-key': 1,
  [computed]: 2,
  ...spread,
  shorthand,
  method() { return { a: 1 } },
  async load() {},
  get value() { return 1 },
  arrow: (a, b) => ({ a, b }),
  ternary: x ? { a: 1 } : [2],
  asConst: { a: 1 } as const,
}"#;
        let obj = root(src);
        assert_eq!(
            keys(&obj),
            [
                named_key("quoted-key"),
                PropertyKey::Computed,
                PropertyKey::Spread,
                named_key("shorthand"),
                named_key("method"),
                named_key("load"),
                named_key("value"),
                named_key("arrow"),
                named_key("ternary"),
                named_key("asConst"),
            ]
        );
        assert!(obj.properties.iter().all(|p| p.comma.is_some()));
        assert!(matches!(obj.property("asConst").unwrap().value, Value::Expr(_)));
        assert_eq!(
            obj.property("ternary").unwrap().value.span().text(src),
            "x ? { a: 1 } : [2]"
        );
    }

    #[test]
    fn test_arrays_and_strings() {
        let src = "export default { modules: ['@nuxt/ui', \"@pinia/nuxt\"] }";
        let obj = root(src);
        let modules = obj.property("modules").unwrap().value.as_array().unwrap();
        let names: Vec<&str> = modules
            .elements
            .iter()
            .filter_map(|e| e.value.as_str())
            .collect();
        assert_eq!(names, ["@nuxt/ui", "@pinia/nuxt"]);
        assert_eq!(modules.elements[0].comma, Some(src.find(',').unwrap()));
        assert_eq!(modules.elements[1].comma, None);
    }

    #[test]
    fn test_string_escapes_are_decoded() {
        let src = r#"export default { title: 'it\'s A\x42\u{1F600}\n' }"#;
        let obj = root(src);
        assert_eq!(
            obj.property("title").unwrap().value.as_str(),
            Some("it's AB\u{1F600}\n")
        );
    }

    #[test]
    fn test_comments_between_entries() {
        let src = "export default {\n  // head\n  a: 1, /* one */\n  b: [/* none */],\n}\n";
        let obj = root(src);
        assert_eq!(keys(&obj), [named_key("a"), named_key("b")]);
        assert!(obj.properties[0].comma.is_some());
        let b = obj.property("b").unwrap().value.as_array().unwrap();
        assert!(b.elements.is_empty());
    }

    #[test]
    fn test_missing_export() {
        let err = parse("const config = {}").unwrap_err();
        assert_eq!(err.message, "no default export found");
    }

    #[test]
    fn test_non_object_argument() {
        let err = parse("export default defineNuxtConfig(() => ({}))").unwrap_err();
        assert!(err.message.contains("defineNuxtConfig"));
    }

    #[test]
    fn test_extra_factory_arguments_are_rejected() {
        let err = parse("export default defineNuxtConfig({ a: 1 }, extra)").unwrap_err();
        assert_eq!(
            err.message,
            "expected a single object argument to `defineNuxtConfig`"
        );
    }

    #[test]
    fn test_invalid_syntax_is_rejected() {
        for src in [
            "export default defineNuxtConfig({ a: 1 / })",
            "export default defineNuxtConfig({ modules: ['a' 'b'] })",
            "export default { a: 1; b: 2 }",
            "export default { 'a' 'b' }",
            "export default defineNuxtConfig({ a: 1,",
        ] {
            let err = parse(src).unwrap_err();
            assert!(err.span.is_some(), "no span for {src:?}");
        }
    }

    #[test]
    fn test_array_holes_are_rejected() {
        let err = parse("export default { modules: ['a', , 'b'] }").unwrap_err();
        assert_eq!(err.message, "array holes are not supported");
    }
}

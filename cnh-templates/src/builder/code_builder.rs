//! Turns fragments into indented source text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates rendered fragments at the current block depth.
///
/// ```
/// use cnh_templates::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.emit(&CodeFragment::block(
///     "export default defineNuxtPlugin(() => {",
///     vec![CodeFragment::line("provideClient(client);")],
///     Some("});".to_string()),
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "export default defineNuxtPlugin(() => {\n  provideClient(client);\n});\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    unit: Indent,
    out: String,
}

impl CodeBuilder {
    pub fn new(unit: Indent) -> Self {
        Self {
            depth: 0,
            unit,
            out: String::new(),
        }
    }

    /// Two-space indentation, as used in every generated `.ts` file.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.write(fragment);
        }
        self
    }

    pub fn build(self) -> String {
        self.out
    }

    fn write(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => self.write_line(&text),
            CodeFragment::Blank => self.out.push('\n'),
            CodeFragment::Raw(text) => self.out.push_str(&text),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.write_line(&header);
                self.depth += 1;
                for inner in body {
                    self.write(inner);
                }
                self.depth = self.depth.saturating_sub(1);
                if let Some(close) = close {
                    self.write_line(&close);
                }
            }
        }
    }

    // Empty lines carry no trailing indentation.
    fn write_line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(self.unit.as_str());
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

//! The unit of generated output.

/// One piece of generated source, before indentation is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// Written at the current depth, then a newline.
    Line(String),
    Blank,
    /// Written as is: no indentation, no newline.
    Raw(String),
    /// `header`, then `body` one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// Anything that can be written by a [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

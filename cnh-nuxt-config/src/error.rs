use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// Result type for Nuxt config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source text and file name, carried into diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub(crate) fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    pub(crate) fn parse_error(&self, message: impl Into<String>, span: Option<Span>) -> Box<Error> {
        Box::new(Error::Parse {
            src: self.named_source(),
            span: span.map(SourceSpan::from),
            message: message.into(),
        })
    }

    pub(crate) fn unsupported(&self, message: impl Into<String>, span: Span) -> Box<Error> {
        Box::new(Error::Unsupported {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to access '{path}'")]
    #[diagnostic(code(nuxt_config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse Nuxt config: {message}")]
    #[diagnostic(
        code(nuxt_config::parse_error),
        help("the config must export an object, e.g. `export default defineNuxtConfig(...)`")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(
        code(nuxt_config::unsupported),
        help("this part of the config is not a literal and has to be edited by hand")
    )]
    Unsupported {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.into(),
            source,
        })
    }
}

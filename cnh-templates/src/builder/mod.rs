//! Fragments and the builder that indents them.
//!
//! AST nodes implement [`Renderable`] and produce [`CodeFragment`]s, which a
//! [`CodeBuilder`] writes out at the right depth.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};

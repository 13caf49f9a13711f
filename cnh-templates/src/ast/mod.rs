//! TypeScript syntax nodes for the generated config and plugin files.

mod arrays;
mod consts;
mod exports;
mod imports;
mod objects;

pub use arrays::JsArray;
pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use objects::{ArrowFn, JsObject};

//! HTML building blocks: escaping, tags and value formatting.

mod escape;
mod format;
mod tag;

pub use escape::escape_html;
pub use format::*;
pub use tag::*;

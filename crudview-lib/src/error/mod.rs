//! Error types

mod field;
mod metadata;

pub use field::*;
pub use metadata::*;

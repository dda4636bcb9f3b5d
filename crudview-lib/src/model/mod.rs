//! Typed models

mod entity;
pub mod metadata;
mod record;
mod record_json;
mod value;

pub use entity::*;
pub use record::*;
pub use value::*;

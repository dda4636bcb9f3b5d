//! Model metadata: the description of an entity's attributes.

mod attribute;
mod model;

pub use attribute::*;
pub use model::*;

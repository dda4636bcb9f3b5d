//! Sortable HTML list tables for CRUD scaffolds
//!
//! Renders a collection of entities as an HTML table with one header row
//! and one row per entity. Attribute columns can carry sort links that
//! toggle the list's `sort` / `sort_dir` request parameters; custom columns
//! render whatever markup their closure returns.
//!
//! The entry point is [`ListHelper`]. Entities implement
//! [`model::Listable`] and are described by a
//! [`model::metadata::ModelMetadata`].

pub mod error;
pub mod html;
pub mod model;
pub mod query;
pub mod table;

mod helper;

pub use helper::*;

//! List tables: columns, the column builder and the renderer.

mod builder;
mod column;
mod config;
mod render;

pub use builder::TableBuilder;
pub use column::Column;
pub use config::TableConfig;
pub use render::RenderContext;
pub use render::render_table;

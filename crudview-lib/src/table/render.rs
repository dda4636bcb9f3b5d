//! Table rendering

use log::debug;

use super::Column;
use super::TableConfig;
use crate::html::escape_html;
use crate::html::link_to;
use crate::model::Listable;
use crate::model::metadata::ModelMetadata;
use crate::query::Direction;
use crate::query::SortMappings;
use crate::query::SortParams;
use crate::query::SortState;

/// Everything besides columns and entries that a table render depends on.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'h> {
    /// Description of the listed model.
    pub model: &'h ModelMetadata,
    /// Parameters of the current request, carried along in sort links.
    pub params: &'h SortParams,
    /// The sort state derived from `params`.
    pub state: &'h SortState,
    /// Sortable keys that are not model attributes.
    pub mappings: &'h SortMappings,
    /// Presentation settings.
    pub config: &'h TableConfig,
}

impl RenderContext<'_> {
    /// Returns `true` if `key` is a model attribute or a sort mapping.
    pub fn is_sort_key(&self, key: &str) -> bool {
        self.model.has_attribute(key) || self.mappings.contains(key)
    }

    /// Returns `true` if the header of `column` gets a sort link.
    pub fn links_header<R: Listable>(&self, column: &Column<'_, R>) -> bool {
        column.is_sortable() && self.is_sort_key(column.key())
    }

    fn sort_link<R: Listable>(&self, column: &Column<'_, R>) -> String {
        let key = column.key();
        let direction = self.state.toggled_direction(key);
        let href = format!("{}?{}", self.model.path(), self.params.sort_query(key, direction));
        let mut header = link_to(&escape_html(column.label()), &href);

        if let Some(current) = self.state.current_direction(key) {
            let arrow = match current {
                Direction::Asc => &self.config.asc_arrow,
                Direction::Desc => &self.config.desc_arrow,
            };
            header.push(' ');
            header.push_str(arrow);
        }
        header
    }
}

/// Renders `entries` as an HTML table with the given columns.
///
/// Produces one header row and one row per entry. An empty `entries`
/// slice renders the configured empty message instead of a table.
pub fn render_table<R: Listable>(columns: &[Column<'_, R>], entries: &[R], ctx: &RenderContext<'_>) -> String {
    let config = ctx.config;

    if entries.is_empty() {
        debug!("[table] no {} entries to list", ctx.model.name());
        return format!(
            r#"<div class="{}">{}</div>"#,
            escape_html(&config.table_class),
            escape_html(&config.empty_message)
        );
    }

    let mut html = format!(r#"<table class="{}">"#, escape_html(&config.table_class));
    html.push('\n');

    html.push_str("<tr>");
    for column in columns {
        let header = if ctx.links_header(column) {
            ctx.sort_link(column)
        } else {
            escape_html(column.label())
        };
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr>\n");

    for (index, entry) in entries.iter().enumerate() {
        let parity = if index % 2 == 0 { "even" } else { "odd" };
        html.push_str(&format!(r#"<tr class="{}">"#, parity));
        for column in columns {
            html.push_str(&column.render_cell(entry, ctx.model, config));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>");

    debug!(
        "[table] rendered {} rows x {} columns of {}",
        entries.len(),
        columns.len(),
        ctx.model.name()
    );
    html
}
